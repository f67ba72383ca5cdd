use thiserror::Error;

use crate::domain::validation::{Notification, ValidationError};

/// Failures raised by aggregates and use cases.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more rules were violated.
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<ValidationError>,
    },
    /// The requested aggregate does not exist.
    #[error("{error}")]
    NotFound {
        aggregate: &'static str,
        id: String,
        error: ValidationError,
    },
}

impl DomainError {
    /// Wraps a single violated rule.
    pub fn with(error: ValidationError) -> Self {
        Self::Validation {
            message: error.message().to_string(),
            errors: vec![error],
        }
    }

    /// Wraps every error collected by `notification` under `message`.
    pub fn from_notification(message: impl Into<String>, notification: Notification) -> Self {
        Self::Validation {
            message: message.into(),
            errors: notification.into_errors(),
        }
    }

    /// Builds the not-found failure for the aggregate named `aggregate`.
    pub fn not_found(aggregate: &'static str, id: impl Into<String>) -> Self {
        let id = id.into();
        let error = ValidationError::new(format!("{aggregate} with ID {id} was not found"));
        Self::NotFound {
            aggregate,
            id,
            error,
        }
    }

    /// Errors carried by this failure, in the order they were recorded.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation { errors, .. } => errors,
            Self::NotFound { error, .. } => std::slice::from_ref(error),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_single_error() {
        let err = DomainError::not_found("Genre", "123");
        assert!(err.is_not_found());
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].message(), "Genre with ID 123 was not found");
        assert_eq!(err.to_string(), "Genre with ID 123 was not found");
    }

    #[test]
    fn notification_errors_keep_order() {
        let mut notification = Notification::new();
        notification
            .push(ValidationError::new("first"))
            .push(ValidationError::new("second"));

        let err = DomainError::from_notification("Could not create Aggregate Genre", notification);
        assert_eq!(err.to_string(), "Could not create Aggregate Genre");
        let messages: Vec<&str> = err.errors().iter().map(ValidationError::message).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }
}
