//! Client configuration

use crate::auth::TokenPrecedence;
use crate::credential::CredentialStore;
use crate::{ClientResult, NetworkHttpClient};
use std::sync::Arc;

/// Production backend origin
pub const DEFAULT_BASE_URL: &str = "https://back-end-kde2.onrender.com/";

/// Content type sent with JSON request bodies
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Client configuration for connecting to the backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin (e.g., "https://back-end-kde2.onrender.com/")
    pub base_url: String,

    /// `Content-Type` header for JSON bodies; bodyless requests send none
    pub content_type: String,

    /// Token chosen for `Authorization` when both are stored
    pub token_precedence: TokenPrecedence,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            token_precedence: TokenPrecedence::default(),
        }
    }

    /// Read configuration from the environment.
    ///
    /// - `KASSA_API_BASE_URL` (default [`DEFAULT_BASE_URL`])
    /// - `KASSA_API_CONTENT_TYPE` (default [`DEFAULT_CONTENT_TYPE`])
    /// - `KASSA_TOKEN_PRECEDENCE`: `access_first` | `refresh_overwrites`
    pub fn from_env() -> ClientResult<Self> {
        let base_url =
            std::env::var("KASSA_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(base_url);

        if let Ok(content_type) = std::env::var("KASSA_API_CONTENT_TYPE") {
            config = config.with_content_type(content_type);
        }
        if let Ok(precedence) = std::env::var("KASSA_TOKEN_PRECEDENCE") {
            config = config.with_token_precedence(precedence.parse()?);
        }
        Ok(config)
    }

    /// Set the default content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Set the token precedence policy
    pub fn with_token_precedence(mut self, precedence: TokenPrecedence) -> Self {
        self.token_precedence = precedence;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(
        &self,
        store: Arc<dyn CredentialStore>,
    ) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self, store)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
