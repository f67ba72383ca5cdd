//! Commands accepted by the use cases and the outputs they return.
pub mod categories;
pub mod genres;
