//! Kassa Client - HTTP client for the Kassa POS backend
//!
//! Wraps the backend's product, category and auth endpoints. Bearer
//! credentials come from an injected [`CredentialStore`].

pub mod api;
pub mod auth;
pub mod config;
pub mod credential;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod response;

pub use api::KassaClient;
pub use auth::TokenPrecedence;
pub use config::ClientConfig;
pub use credential::{
    CredentialStore, Credentials, FileCredentialStore, MemoryCredentialStore, TokenKind,
};
pub use endpoint::{BodyKind, Endpoint};
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient, RequestBody};
pub use response::BackendResponse;

// Re-export shared types for convenience
pub use shared::ability::{Ability, Role, define_abilities_for};
pub use shared::client::{LoginRequest, LoginResponse, TokenPair};
pub use shared::models::{Attachment, Category, CategoryPayload, Product, ProductForm};
