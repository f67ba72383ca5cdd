use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::validation::Notification;
use crate::repository::errors::RepositoryError;

/// Generic error type used by service layer functions.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Validation failed or the requested aggregate does not exist.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// The gateway failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Domain failure carried by this error, if any.
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Repository(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.domain().is_some_and(DomainError::is_not_found)
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result of a use case that reports failures as data instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseCaseOutcome<T> {
    Success(T),
    Failure(Notification),
}

impl<T> UseCaseOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(self) -> Option<Notification> {
        match self {
            Self::Success(_) => None,
            Self::Failure(notification) => Some(notification),
        }
    }
}
