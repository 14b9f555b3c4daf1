//! Shared types for the Kassa POS front-end
//!
//! Role abilities, catalog models and auth DTOs used by the API client
//! and by UI code.

pub mod ability;
pub mod client;
pub mod models;

// Re-exports
pub use ability::{Ability, Role, Rule, define_abilities_for};
pub use serde::{Deserialize, Serialize};
