//! Core library exports for the catalog administration service.
//!
//! The crate manages two aggregates, categories and genres, and exposes the
//! domain model, the use cases operating on it and the gateway traits the
//! use cases persist through. With the `server` feature it also provides the
//! Diesel/SQLite gateway and the configuration used by the binary.

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod repository;
pub mod services;

#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod schema;

#[cfg(feature = "server")]
use diesel_migrations::{EmbeddedMigrations, embed_migrations};

/// Schema migrations compiled into the crate.
#[cfg(feature = "server")]
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();
