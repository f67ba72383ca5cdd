//! Diesel row types and their conversions to domain aggregates.

pub mod category;
pub mod config;
pub mod genre;
