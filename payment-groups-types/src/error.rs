//! Error types for the payment groups service.

/// Repository-level errors (data access failures).
///
/// The application service returns these unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".into()),
            RepoError::Database(e) => AppError::Internal(e),
            RepoError::Conflict(e) => AppError::Conflict(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_is_internal() {
        let err: AppError = RepoError::Database("connection reset".into()).into();
        assert!(matches!(err, AppError::Internal(msg) if msg == "connection reset"));
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err: AppError = RepoError::NotFound.into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_conflict_keeps_message() {
        let err: AppError = RepoError::Conflict("duplicate name".into()).into();
        assert!(matches!(err, AppError::Conflict(msg) if msg == "duplicate name"));
    }
}
