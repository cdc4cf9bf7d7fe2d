//! In-memory backend implementing every data-source trait.
//!
//! Backs the demo binary and the tests. Writes that the real database runs
//! in a transaction happen here under a single write lock.

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::debug;

use crate::api::{
    AdminApi, CompanyApi, ContentApi, NotificationApi, PaymentApi, TeamApi, TicketApi, UserApi,
};
use crate::error::ApiError;
use crate::models::{
    Analytics, Article, Company, CompanyUpdate, Entry, Faq, Invitation, Notification, Page,
    Payment, ProfileUpdate, Revision, Role, Subscription, TeamMember, Ticket, TicketStatus,
    UserProfile,
};

#[derive(Debug, Default)]
struct Data {
    current_user: String,
    users: Vec<UserProfile>,
    tickets: Vec<Ticket>,
    entries: Vec<Entry>,
    revisions: Vec<Revision>,
    members: HashMap<String, Vec<TeamMember>>,
    invitations: Vec<Invitation>,
    payments: Vec<Payment>,
    subscription: Option<Subscription>,
    companies: Vec<Company>,
    notifications: Vec<Notification>,
    unread: HashMap<String, u64>,
    faqs: Vec<Faq>,
    articles: Vec<Article>,
}

/// Backend keeping every collection in memory.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    data: RwLock<Data>,
    calls: Mutex<HashMap<&'static str, u32>>,
    unavailable: AtomicBool,
    next_id: AtomicU64,
}

impl InMemoryBackend {
    /// Empty backend signed in as `current_user`.
    pub fn new(current_user: impl Into<String>) -> Self {
        let backend = Self::default();
        backend.data.write().current_user = current_user.into();
        backend
    }

    /// Backend with a small data set for demos and tests.
    pub fn seeded() -> Self {
        let backend = Self::new("u-1");
        {
            let mut data = backend.data.write();

            data.users = vec![
                user("u-1", "Ana Torres", "ana@example.com", Role::Owner),
                user("u-2", "Luis Ortega", "luis@example.com", Role::Admin),
                user("u-3", "Marta Gil", "marta@example.com", Role::Member),
            ];

            data.tickets = (1..=12)
                .map(|n| Ticket {
                    id: format!("t-{n}"),
                    user_id: format!("u-{}", n % 3 + 1),
                    subject: format!("Survey issue #{n}"),
                    status: if n % 4 == 0 {
                        TicketStatus::Resolved
                    } else {
                        TicketStatus::Open
                    },
                })
                .collect();

            data.entries = vec![Entry {
                id: "e-1".into(),
                title: "Confirmshaming in a chatbot reply".into(),
                active_revision: "r-2".into(),
            }];
            data.revisions = vec![
                revision("r-1", "e-1", "First draft", true),
                revision("r-2", "e-1", "Reviewed wording", false),
                revision("r-3", "e-1", "Proposed rewrite", true),
            ];

            data.members.insert(
                "team-1".into(),
                vec![
                    TeamMember {
                        user_id: "u-1".into(),
                        role: Role::Owner,
                    },
                    TeamMember {
                        user_id: "u-2".into(),
                        role: Role::Admin,
                    },
                ],
            );

            data.payments = (1..=5)
                .map(|n| Payment {
                    id: format!("p-{n}"),
                    amount_cents: 4_900,
                    currency: "EUR".into(),
                    paid_at: 1_700_000_000 + n * 2_592_000,
                })
                .collect();
            data.subscription = Some(Subscription {
                plan: "team".into(),
                active: true,
                renews_at: Some(1_716_000_000),
            });

            data.companies = vec![
                company("c-1", "Acme Research", 25),
                company("c-2", "Northwind Labs", 10),
            ];

            data.notifications = (1..=3)
                .map(|n| Notification {
                    id: format!("n-{n}"),
                    user_id: "u-1".into(),
                    message: format!("Ticket t-{n} has a new reply"),
                    read: false,
                })
                .collect();
            data.unread.insert("u-1".into(), 3);

            data.faqs = vec![
                faq("f-1", "privacy", "How is my data used?", "Only for research."),
                faq("f-2", "surveys", "How long does a survey take?", "About ten minutes."),
            ];
            data.articles = vec![Article {
                id: "a-1".into(),
                category: "privacy".into(),
                title: "Data retention".into(),
                body: "Responses are kept for two years.".into(),
            }];
        }
        backend
    }

    /// Makes every call fail with [`ApiError::Unavailable`] until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Adds an entry together with its revision history.
    pub fn insert_entry(&self, entry: Entry, revisions: impl IntoIterator<Item = Revision>) {
        let mut data = self.data.write();
        data.entries.push(entry);
        data.revisions.extend(revisions);
    }

    /// Number of calls made to `op` (the trait method name).
    pub fn calls(&self, op: &str) -> u32 {
        self.calls.lock().get(op).copied().unwrap_or(0)
    }

    /// Total number of calls across all operations.
    pub fn total_calls(&self) -> u32 {
        self.calls.lock().values().sum()
    }

    fn enter(&self, op: &'static str) -> Result<(), ApiError> {
        *self.calls.lock().entry(op).or_insert(0) += 1;
        debug!(op, "Backend call");

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ApiError::unavailable(format!("{op}: connection refused")));
        }
        Ok(())
    }

    fn next_id(&self, prefix: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 100;
        format!("{prefix}-{n}")
    }
}

fn user(id: &str, name: &str, email: &str, role: Role) -> UserProfile {
    UserProfile {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
    }
}

fn revision(id: &str, entry_id: &str, body: &str, archived: bool) -> Revision {
    Revision {
        id: id.into(),
        entry_id: entry_id.into(),
        body: body.into(),
        archived,
    }
}

fn company(id: &str, name: &str, seats: u32) -> Company {
    Company {
        id: id.into(),
        name: name.into(),
        seats,
    }
}

fn faq(id: &str, category: &str, question: &str, answer: &str) -> Faq {
    Faq {
        id: id.into(),
        category: category.into(),
        question: question.into(),
        answer: answer.into(),
    }
}

#[async_trait]
impl AdminApi for InMemoryBackend {
    async fn list_tickets(&self, page: u32, limit: u32) -> Result<Page<Ticket>, ApiError> {
        self.enter("list_tickets")?;
        Ok(Page::of(&self.data.read().tickets, page, limit))
    }

    async fn get_ticket(&self, id: &str) -> Result<Ticket, ApiError> {
        self.enter("get_ticket")?;
        self.data
            .read()
            .tickets
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("ticket", id))
    }

    async fn list_entries(&self, page: u32, limit: u32) -> Result<Page<Entry>, ApiError> {
        self.enter("list_entries")?;
        Ok(Page::of(&self.data.read().entries, page, limit))
    }

    async fn list_revisions(&self, entry_id: &str) -> Result<Vec<Revision>, ApiError> {
        self.enter("list_revisions")?;
        Ok(self
            .data
            .read()
            .revisions
            .iter()
            .filter(|r| r.entry_id == entry_id)
            .cloned()
            .collect())
    }

    async fn analytics(&self) -> Result<Analytics, ApiError> {
        self.enter("analytics")?;
        let data = self.data.read();
        Ok(Analytics {
            entries: data.entries.len(),
            revisions: data.revisions.len(),
            open_tickets: data.tickets.iter().filter(|t| t.status.is_open()).count(),
            users: data.users.len(),
        })
    }

    async fn set_ticket_status(&self, id: &str, status: TicketStatus) -> Result<Ticket, ApiError> {
        self.enter("set_ticket_status")?;
        let mut data = self.data.write();
        let ticket = data
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::not_found("ticket", id))?;

        ticket.status = status;
        Ok(ticket.clone())
    }

    async fn swap_revision(&self, entry_id: &str, revision_id: &str) -> Result<Entry, ApiError> {
        self.enter("swap_revision")?;
        let mut data = self.data.write();

        let target = data
            .revisions
            .iter()
            .position(|r| r.id == revision_id && r.entry_id == entry_id)
            .ok_or_else(|| ApiError::not_found("revision", revision_id))?;
        let entry = data
            .entries
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or_else(|| ApiError::not_found("entry", entry_id))?;

        let previous = data.entries[entry].active_revision.clone();
        if previous == revision_id {
            return Err(ApiError::Conflict(format!(
                "revision {revision_id} is already active"
            )));
        }

        for revision in data.revisions.iter_mut().filter(|r| r.id == previous) {
            revision.archived = true;
        }
        data.revisions[target].archived = false;
        data.entries[entry].active_revision = revision_id.to_string();

        Ok(data.entries[entry].clone())
    }
}

#[async_trait]
impl UserApi for InMemoryBackend {
    async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.enter("current_user")?;
        let data = self.data.read();
        data.users
            .iter()
            .find(|u| u.id == data.current_user)
            .cloned()
            .ok_or_else(|| ApiError::PermissionDenied("not signed in".into()))
    }

    async fn get_user(&self, id: &str) -> Result<UserProfile, ApiError> {
        self.enter("get_user")?;
        self.data
            .read()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("user", id))
    }

    async fn list_users(&self, page: u32, limit: u32) -> Result<Page<UserProfile>, ApiError> {
        self.enter("list_users")?;
        Ok(Page::of(&self.data.read().users, page, limit))
    }

    async fn update_profile(
        &self,
        id: &str,
        update: ProfileUpdate,
    ) -> Result<UserProfile, ApiError> {
        self.enter("update_profile")?;
        if update.email.as_deref().is_some_and(|e| !e.contains('@')) {
            return Err(ApiError::InvalidArgument("email must contain '@'".into()));
        }

        let mut data = self.data.write();
        let profile = data
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| ApiError::not_found("user", id))?;

        if let Some(name) = update.name {
            profile.name = name;
        }
        if let Some(email) = update.email {
            profile.email = email;
        }
        Ok(profile.clone())
    }
}

#[async_trait]
impl TeamApi for InMemoryBackend {
    async fn members(&self, team_id: &str) -> Result<Vec<TeamMember>, ApiError> {
        self.enter("members")?;
        self.data
            .read()
            .members
            .get(team_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("team", team_id))
    }

    async fn invitations(&self, team_id: &str) -> Result<Vec<Invitation>, ApiError> {
        self.enter("invitations")?;
        Ok(self
            .data
            .read()
            .invitations
            .iter()
            .filter(|i| i.team_id == team_id)
            .cloned()
            .collect())
    }

    async fn invite(&self, team_id: &str, email: &str, role: Role) -> Result<Invitation, ApiError> {
        self.enter("invite")?;
        if role == Role::Owner {
            return Err(ApiError::PermissionDenied(
                "owners cannot be invited".into(),
            ));
        }

        let mut data = self.data.write();
        if !data.members.contains_key(team_id) {
            return Err(ApiError::not_found("team", team_id));
        }
        if data
            .invitations
            .iter()
            .any(|i| i.team_id == team_id && i.email == email)
        {
            return Err(ApiError::Conflict(format!("{email} already invited")));
        }

        let invitation = Invitation {
            team_id: team_id.to_string(),
            email: email.to_string(),
            role,
        };
        data.invitations.push(invitation.clone());
        Ok(invitation)
    }
}

#[async_trait]
impl PaymentApi for InMemoryBackend {
    async fn payment_history(&self, page: u32, limit: u32) -> Result<Page<Payment>, ApiError> {
        self.enter("payment_history")?;
        Ok(Page::of(&self.data.read().payments, page, limit))
    }

    async fn subscription(&self) -> Result<Subscription, ApiError> {
        self.enter("subscription")?;
        self.data
            .read()
            .subscription
            .clone()
            .ok_or_else(|| ApiError::not_found("subscription", "current"))
    }
}

#[async_trait]
impl CompanyApi for InMemoryBackend {
    async fn list_companies(&self, page: u32, limit: u32) -> Result<Page<Company>, ApiError> {
        self.enter("list_companies")?;
        Ok(Page::of(&self.data.read().companies, page, limit))
    }

    async fn get_company(&self, id: &str) -> Result<Company, ApiError> {
        self.enter("get_company")?;
        self.data
            .read()
            .companies
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("company", id))
    }

    async fn update_company(&self, id: &str, update: CompanyUpdate) -> Result<Company, ApiError> {
        self.enter("update_company")?;
        let mut data = self.data.write();
        let company = data
            .companies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::not_found("company", id))?;

        if let Some(name) = update.name {
            company.name = name;
        }
        if let Some(seats) = update.seats {
            company.seats = seats;
        }
        Ok(company.clone())
    }
}

#[async_trait]
impl NotificationApi for InMemoryBackend {
    async fn unread(&self, user_id: &str) -> Result<Vec<Notification>, ApiError> {
        self.enter("unread")?;
        Ok(self
            .data
            .read()
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .cloned()
            .collect())
    }

    async fn mark_read(&self, user_id: &str, id: &str) -> Result<u64, ApiError> {
        self.enter("mark_read")?;
        let mut data = self.data.write();
        let notification = data
            .notifications
            .iter_mut()
            .find(|n| n.id == id && n.user_id == user_id)
            .ok_or_else(|| ApiError::not_found("notification", id))?;

        let was_unread = !notification.read;
        notification.read = true;

        let counter = data.unread.entry(user_id.to_string()).or_insert(0);
        if was_unread {
            *counter = counter.saturating_sub(1);
        }
        Ok(*counter)
    }
}

#[async_trait]
impl ContentApi for InMemoryBackend {
    async fn faqs(&self) -> Result<Vec<Faq>, ApiError> {
        self.enter("faqs")?;
        Ok(self.data.read().faqs.clone())
    }

    async fn faq(&self, id: &str) -> Result<Faq, ApiError> {
        self.enter("faq")?;
        self.data
            .read()
            .faqs
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("faq", id))
    }

    async fn articles(&self, category: &str) -> Result<Vec<Article>, ApiError> {
        self.enter("articles")?;
        Ok(self
            .data
            .read()
            .articles
            .iter()
            .filter(|a| a.category == category)
            .cloned()
            .collect())
    }

    async fn upsert_faq(&self, faq: Faq) -> Result<Faq, ApiError> {
        self.enter("upsert_faq")?;
        if faq.question.trim().is_empty() {
            return Err(ApiError::InvalidArgument("question is empty".into()));
        }

        let mut data = self.data.write();
        match data.faqs.iter_mut().find(|f| f.id == faq.id) {
            Some(existing) => *existing = faq.clone(),
            None => data.faqs.push(faq.clone()),
        }
        Ok(faq)
    }
}

#[async_trait]
impl TicketApi for InMemoryBackend {
    async fn tickets_for_user(&self, user_id: &str) -> Result<Vec<Ticket>, ApiError> {
        self.enter("tickets_for_user")?;
        Ok(self
            .data
            .read()
            .tickets
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn ticket(&self, id: &str) -> Result<Ticket, ApiError> {
        self.enter("ticket")?;
        self.data
            .read()
            .tickets
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("ticket", id))
    }

    async fn open_ticket(&self, user_id: &str, subject: &str) -> Result<Ticket, ApiError> {
        self.enter("open_ticket")?;
        let ticket = Ticket {
            id: self.next_id("t"),
            user_id: user_id.to_string(),
            subject: subject.to_string(),
            status: TicketStatus::Open,
        };
        self.data.write().tickets.push(ticket.clone());
        Ok(ticket)
    }
}
