//! Use cases of the catalog.
//!
//! Every function is generic over the gateway traits it needs, so the same
//! code runs against [`crate::repository::DieselRepository`] and the
//! in-memory test double.
pub mod categories;
pub mod errors;
pub mod genres;

pub use errors::{ServiceError, ServiceResult, UseCaseOutcome};
