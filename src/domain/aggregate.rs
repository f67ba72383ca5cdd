use crate::domain::errors::DomainError;
use crate::domain::types::Identifier;
use crate::domain::validation::ValidationHandler;

/// An entity that is the consistency boundary for its own invariants.
///
/// Implementors compare equal by identifier only.
pub trait AggregateRoot {
    type Id: Identifier;

    /// Name used in not-found messages.
    const NAME: &'static str;

    fn id(&self) -> &Self::Id;

    /// Report every violated rule to `handler`.
    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), DomainError>;
}
