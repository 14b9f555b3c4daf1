//! Data models
//!
//! Catalog records exchanged with the backend. The backend owns the schema,
//! so only identifying fields are typed; everything else is kept as-is in
//! `extra` and sent back unchanged.

pub mod category;
pub mod product;

// Re-exports
pub use category::*;
pub use product::*;
