//! Team Matching Engine
//!
//! Roster, activation and multi-criteria matching for forming university project teams,
//! with recruitment listings, comments and direct messages held in one session.

pub mod config;
pub mod errors;
pub mod models;
pub mod sample;
pub mod search;
pub mod store;

pub use errors::{AppError, AppResult};
pub use search::{aggregate_by, search, Dimension, SearchFilters};
pub use store::Session;
