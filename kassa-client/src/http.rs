//! HTTP transport for network-based API calls

use crate::auth::{TokenPrecedence, authorization_header};
use crate::credential::CredentialStore;
use crate::endpoint::BodyKind;
use crate::{BackendResponse, ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Url};
use serde::Serialize;
use shared::models::ProductForm;
use std::sync::Arc;

/// Outgoing request body
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Serialized JSON bytes
    Json(Vec<u8>),
    Multipart(ProductForm),
}

impl RequestBody {
    /// Serialize `body` as JSON
    pub fn json<B: Serialize + ?Sized>(body: &B) -> ClientResult<Self> {
        Ok(RequestBody::Json(serde_json::to_vec(body)?))
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            RequestBody::Empty => BodyKind::None,
            RequestBody::Json(_) => BodyKind::Json,
            RequestBody::Multipart(_) => BodyKind::Multipart,
        }
    }
}

/// HTTP transport trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send one request to `path` (relative to the backend origin)
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> ClientResult<BackendResponse>;
}

/// Network HTTP client: attaches credentials and talks to the backend
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    content_type: HeaderValue,
    token_precedence: TokenPrecedence,
    store: Arc<dyn CredentialStore>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig, store: Arc<dyn CredentialStore>) -> ClientResult<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            ClientError::Config(format!("invalid base url '{}': {e}", config.base_url))
        })?;
        let content_type = HeaderValue::from_str(&config.content_type).map_err(|_| {
            ClientError::Config(format!("invalid content type '{}'", config.content_type))
        })?;
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            content_type,
            token_precedence: config.token_precedence,
            store,
        })
    }

    /// Backend origin without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn handle_response(
        &self,
        method: &Method,
        path: &str,
        response: reqwest::Response,
    ) -> ClientResult<BackendResponse> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(
                status = status.as_u16(),
                %method,
                url = %self.url(path),
                "Backend returned error status"
            );
            return Err(ClientError::from_status(status, text));
        }
        Ok(BackendResponse::new(status, headers, body))
    }
}

/// Convert a product form into a multipart body
pub(crate) fn multipart_form(form: ProductForm) -> ClientResult<Form> {
    let mut multipart = Form::new();
    for (name, value) in form.fields {
        multipart = multipart.text(name, value);
    }
    for attachment in form.attachments {
        let mut part = Part::bytes(attachment.bytes).file_name(attachment.file_name);
        if let Some(mime) = attachment.mime_type {
            part = part.mime_str(&mime).map_err(|e| {
                ClientError::InvalidRequest(format!(
                    "invalid mime type '{mime}' for field '{}': {e}",
                    attachment.field
                ))
            })?;
        }
        multipart = multipart.part(attachment.field, part);
    }
    Ok(multipart)
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> ClientResult<BackendResponse> {
        let auth = authorization_header(self.store.as_ref(), self.token_precedence)?;

        let mut req = self.client.request(method.clone(), self.url(path));
        req = match body {
            RequestBody::Empty => req,
            RequestBody::Json(bytes) => req
                .header(CONTENT_TYPE, self.content_type.clone())
                .body(bytes),
            RequestBody::Multipart(form) => req.multipart(multipart_form(form)?),
        };
        if let Some(auth) = &auth {
            req = req.header(AUTHORIZATION, auth.clone());
        }

        tracing::debug!(%method, path, authorized = auth.is_some(), "Sending request");
        let response = req.send().await?;
        self.handle_response(&method, path, response).await
    }
}
