//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the conversions live here.

use crate::domain::errors::DomainError;
use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<DomainError> for RepositoryError {
    fn from(val: DomainError) -> Self {
        let details = val
            .errors()
            .iter()
            .map(|e| e.message())
            .collect::<Vec<_>>()
            .join(", ");
        RepositoryError::ValidationError(format!("{val}: {details}"))
    }
}
