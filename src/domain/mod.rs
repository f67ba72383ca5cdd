//! Aggregates, validation and value types of the catalog.
//!
//! Nothing in this module touches storage; gateways live in
//! [`crate::repository`].

pub mod aggregate;
pub mod category;
pub mod errors;
pub mod genre;
pub mod pagination;
pub mod types;
pub mod validation;
