use thiserror::Error;

/// Failures reported by gateway implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The row targeted by a write does not exist.
    #[error("entity not found")]
    NotFound,
    /// Stored data or query parameters violate a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
    #[cfg(feature = "server")]
    #[error("database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),
    #[cfg(feature = "server")]
    #[error("connection error: {0}")]
    ConnectionError(#[from] diesel::r2d2::PoolError),
    /// Any other storage failure.
    #[error("{0}")]
    Unexpected(String),
}

/// Convenient alias for gateway results.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
