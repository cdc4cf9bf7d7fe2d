//! Error types for the dashboard data sources.

/// Errors returned by the data-source traits in [`crate::api`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The requested document does not exist.
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// The caller is not allowed to perform the operation.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The write conflicts with the current document state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Invalid input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The backend could not be reached.
    #[error("backend unavailable: {reason}")]
    Unavailable { reason: String },
}

impl ApiError {
    /// Creates a new not-found error.
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Creates a new unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Returns true if retrying may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::not_found("ticket", "t-9");
        assert_eq!(err.to_string(), "ticket not found: t-9");

        let err = ApiError::unavailable("connection reset");
        assert_eq!(err.to_string(), "backend unavailable: connection reset");
    }

    #[test]
    fn test_is_transient() {
        assert!(ApiError::unavailable("timeout").is_transient());
        assert!(!ApiError::Conflict("stale revision".into()).is_transient());
    }
}
