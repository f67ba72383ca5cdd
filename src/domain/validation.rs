//! Validation handlers shared by every aggregate.
//!
//! Rules report violations to a [`ValidationHandler`]. A [`Notification`]
//! records every violation and lets the caller decide what to do afterwards,
//! while a [`ThrowsValidationHandler`] fails on the first one. Rules propagate
//! handler failures with `?`, so the same rule set serves both behaviours.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// A single violated rule.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Sink for rule violations.
pub trait ValidationHandler {
    /// Report a violation. Fails when the handler stops at the first error.
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError>;

    /// Violations recorded so far.
    fn errors(&self) -> &[ValidationError];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}

/// Collect-all handler: records every violation and never fails.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notification preloaded with `error`.
    pub fn from_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// A notification carrying the message of an unexpected failure.
    pub fn from_failure(failure: &dyn std::error::Error) -> Self {
        Self::from_error(ValidationError::new(failure.to_string()))
    }

    pub fn push(&mut self, error: ValidationError) -> &mut Self {
        self.errors.push(error);
        self
    }

    /// Appends every error recorded by `other`.
    pub fn merge(&mut self, other: &Notification) -> &mut Self {
        self.errors.extend(other.errors.iter().cloned());
        self
    }

    /// Runs `action`, recording the errors of a failure instead of returning it.
    pub fn validate<T, F>(&mut self, action: F) -> Option<T>
    where
        F: FnOnce() -> Result<T, DomainError>,
    {
        match action() {
            Ok(value) => Some(value),
            Err(err) => {
                self.errors.extend(err.errors().iter().cloned());
                None
            }
        }
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        self.push(error);
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Fail-fast handler: the first violation becomes a [`DomainError`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThrowsValidationHandler;

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        Err(DomainError::with(error))
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }
}

/// Name rules shared by the aggregates; only the length range differs.
pub(crate) fn validate_name(
    name: Option<&str>,
    min_length: usize,
    max_length: usize,
    handler: &mut dyn ValidationHandler,
) -> Result<(), DomainError> {
    let Some(name) = name else {
        return handler.append(ValidationError::new("'name' should not be null"));
    };

    let trimmed = name.trim();
    if trimmed.is_empty() {
        return handler.append(ValidationError::new("'name' should not be empty"));
    }

    let length = trimmed.chars().count();
    if length < min_length || length > max_length {
        handler.append(ValidationError::new(format!(
            "'name' must be between {min_length} and {max_length} characters"
        )))?;
    }

    Ok(())
}
