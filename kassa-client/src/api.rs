//! Kassa backend API
//!
//! One method per backend endpoint. Every call reads the credential store,
//! sends exactly one request and hands back the backend response. Non-success
//! statuses and transport failures come back as [`ClientError`](crate::ClientError)
//! without retries.

use crate::endpoint::Endpoint;
use crate::http::{HttpClient, RequestBody};
use crate::{BackendResponse, ClientConfig, ClientResult, CredentialStore, NetworkHttpClient};
use serde::Serialize;
use shared::models::ProductForm;
use std::sync::Arc;

/// Gateway client for the Kassa backend
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use kassa_client::{ClientConfig, KassaClient, LoginRequest, MemoryCredentialStore};
/// ///
/// # async fn example() -> Result<(), kassa_client::ClientError> {
/// let store = Arc::new(MemoryCredentialStore::new());
/// let client = KassaClient::new(&ClientConfig::default(), store)?;
///
/// let resp = client.login(&LoginRequest::new("kassir", "secret")).await?;
/// println!("{}", resp.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct KassaClient<H: HttpClient = NetworkHttpClient> {
    http: H,
}

impl KassaClient<NetworkHttpClient> {
    /// Create a network client reading tokens from `store`
    pub fn new(config: &ClientConfig, store: Arc<dyn CredentialStore>) -> ClientResult<Self> {
        Ok(Self::with_http(config.build_http_client(store)?))
    }
}

impl<H: HttpClient> KassaClient<H> {
    /// Wrap a custom transport
    pub fn with_http(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// Send a request to an endpoint
    pub async fn send(&self, endpoint: Endpoint, body: RequestBody) -> ClientResult<BackendResponse> {
        self.http
            .execute(endpoint.method(), &endpoint.path(), body)
            .await
    }

    // ========== Auth API ==========

    /// Post login credentials; usually a [`LoginRequest`](shared::client::LoginRequest),
    /// but any JSON-serializable body is forwarded as is
    pub async fn login<B: Serialize + ?Sized>(
        &self,
        credentials: &B,
    ) -> ClientResult<BackendResponse> {
        self.send(Endpoint::Login, RequestBody::json(credentials)?)
            .await
    }

    /// Server-side logout; the caller clears its credential store afterwards
    pub async fn logout(&self) -> ClientResult<BackendResponse> {
        self.send(Endpoint::Logout, RequestBody::Empty).await
    }

    // ========== Product API ==========

    pub async fn get_all_products(&self) -> ClientResult<BackendResponse> {
        self.send(Endpoint::AllProducts, RequestBody::Empty).await
    }

    pub async fn create_product(&self, form: ProductForm) -> ClientResult<BackendResponse> {
        self.send(Endpoint::CreateProduct, RequestBody::Multipart(form))
            .await
    }

    pub async fn update_product(&self, id: i64, form: ProductForm) -> ClientResult<BackendResponse> {
        self.send(Endpoint::UpdateProduct(id), RequestBody::Multipart(form))
            .await
    }

    pub async fn delete_product(&self, id: i64) -> ClientResult<BackendResponse> {
        self.send(Endpoint::DeleteProduct(id), RequestBody::Empty)
            .await
    }

    // ========== Category API ==========

    pub async fn get_all_categories(&self) -> ClientResult<BackendResponse> {
        self.send(Endpoint::AllCategories, RequestBody::Empty).await
    }

    pub async fn create_category<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> ClientResult<BackendResponse> {
        self.send(Endpoint::CreateCategory, RequestBody::json(data)?)
            .await
    }

    pub async fn update_category<B: Serialize + ?Sized>(
        &self,
        id: i64,
        data: &B,
    ) -> ClientResult<BackendResponse> {
        self.send(Endpoint::UpdateCategory(id), RequestBody::json(data)?)
            .await
    }

    pub async fn delete_category(&self, id: i64) -> ClientResult<BackendResponse> {
        self.send(Endpoint::DeleteCategory(id), RequestBody::Empty)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::BodyKind;
    use async_trait::async_trait;
    use reqwest::header::HeaderMap;
    use reqwest::{Method, StatusCode};
    use shared::client::LoginRequest;
    use shared::models::CategoryPayload;
    use std::sync::Mutex;

    /// Records every request instead of sending it
    #[derive(Default)]
    struct RecordingHttpClient {
        calls: Mutex<Vec<(Method, String, RequestBody)>>,
    }

    #[async_trait]
    impl HttpClient for RecordingHttpClient {
        async fn execute(
            &self,
            method: Method,
            path: &str,
            body: RequestBody,
        ) -> ClientResult<BackendResponse> {
            self.calls
                .lock()
                .unwrap()
                .push((method, path.to_string(), body));
            Ok(BackendResponse::new(StatusCode::OK, HeaderMap::new(), b"{}".to_vec()))
        }
    }

    fn recorded(client: &KassaClient<RecordingHttpClient>) -> Vec<(Method, String, BodyKind)> {
        client
            .http()
            .calls
            .lock()
            .unwrap()
            .iter()
            .map(|(m, p, b)| (m.clone(), p.clone(), b.kind()))
            .collect()
    }

    #[tokio::test]
    async fn test_each_operation_sends_one_request() {
        let client = KassaClient::with_http(RecordingHttpClient::default());

        client.login(&LoginRequest::new("u", "p")).await.unwrap();
        client.logout().await.unwrap();
        client.get_all_products().await.unwrap();
        client.create_product(ProductForm::new().text("name", "Non")).await.unwrap();
        client.update_product(4, ProductForm::new()).await.unwrap();
        client.delete_product(4).await.unwrap();
        client.get_all_categories().await.unwrap();
        client.create_category(&CategoryPayload::new("Non")).await.unwrap();
        client.update_category(5, &CategoryPayload::new("Sut")).await.unwrap();
        client.delete_category(5).await.unwrap();

        let expected = vec![
            (Method::POST, "api-auth/login/", BodyKind::Json),
            (Method::POST, "api-auth/logout/", BodyKind::None),
            (Method::GET, "api/products/all", BodyKind::None),
            (Method::POST, "api/products/create", BodyKind::Multipart),
            (Method::PUT, "api/products/update/4", BodyKind::Multipart),
            (Method::DELETE, "api/products/delete/4", BodyKind::None),
            (Method::GET, "api/category/all", BodyKind::None),
            (Method::POST, "api/category/create", BodyKind::Json),
            (Method::PUT, "api/category/update/5", BodyKind::Json),
            (Method::DELETE, "api/category/delete/5", BodyKind::None),
        ];
        let expected: Vec<_> = expected
            .into_iter()
            .map(|(m, p, b)| (m, p.to_string(), b))
            .collect();
        assert_eq!(recorded(&client), expected);
    }

    #[tokio::test]
    async fn test_login_body_is_credentials_json() {
        let client = KassaClient::with_http(RecordingHttpClient::default());
        client.login(&LoginRequest::new("kassir", "1234")).await.unwrap();

        let calls = client.http().calls.lock().unwrap();
        let RequestBody::Json(bytes) = &calls[0].2 else {
            panic!("expected JSON body");
        };
        let json: serde_json::Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(json, serde_json::json!({"username": "kassir", "password": "1234"}));
    }

    #[tokio::test]
    async fn test_login_forwards_custom_credential_fields() {
        let client = KassaClient::with_http(RecordingHttpClient::default());
        let credentials = serde_json::json!({"phone": "+998901234567", "pin": "0000"});
        client.login(&credentials).await.unwrap();

        let calls = client.http().calls.lock().unwrap();
        assert_eq!(calls[0].0, Method::POST);
        assert_eq!(calls[0].1, "api-auth/login/");
        let RequestBody::Json(bytes) = &calls[0].2 else {
            panic!("expected JSON body");
        };
        let json: serde_json::Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(json, credentials);
    }

    #[tokio::test]
    async fn test_update_product_passes_form_through() {
        let client = KassaClient::with_http(RecordingHttpClient::default());
        let form = ProductForm::new().text("name", "Sut").text("price", 12000);
        client.update_product(9, form.clone()).await.unwrap();

        let calls = client.http().calls.lock().unwrap();
        assert_eq!(calls[0].2, RequestBody::Multipart(form));
    }
}
