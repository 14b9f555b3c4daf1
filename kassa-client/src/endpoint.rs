//! Backend endpoint table

use reqwest::Method;

/// How an endpoint's request body is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    None,
    Json,
    Multipart,
}

/// Backend endpoints, relative to the configured origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Logout,
    AllProducts,
    CreateProduct,
    UpdateProduct(i64),
    DeleteProduct(i64),
    AllCategories,
    CreateCategory,
    UpdateCategory(i64),
    DeleteCategory(i64),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Login
            | Endpoint::Logout
            | Endpoint::CreateProduct
            | Endpoint::CreateCategory => Method::POST,
            Endpoint::AllProducts | Endpoint::AllCategories => Method::GET,
            Endpoint::UpdateProduct(_) | Endpoint::UpdateCategory(_) => Method::PUT,
            Endpoint::DeleteProduct(_) | Endpoint::DeleteCategory(_) => Method::DELETE,
        }
    }

    /// Path without leading slash
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "api-auth/login/".to_string(),
            Endpoint::Logout => "api-auth/logout/".to_string(),
            Endpoint::AllProducts => "api/products/all".to_string(),
            Endpoint::CreateProduct => "api/products/create".to_string(),
            Endpoint::UpdateProduct(id) => format!("api/products/update/{id}"),
            Endpoint::DeleteProduct(id) => format!("api/products/delete/{id}"),
            Endpoint::AllCategories => "api/category/all".to_string(),
            Endpoint::CreateCategory => "api/category/create".to_string(),
            Endpoint::UpdateCategory(id) => format!("api/category/update/{id}"),
            Endpoint::DeleteCategory(id) => format!("api/category/delete/{id}"),
        }
    }

    pub fn body_kind(&self) -> BodyKind {
        match self {
            Endpoint::Login | Endpoint::CreateCategory | Endpoint::UpdateCategory(_) => {
                BodyKind::Json
            }
            Endpoint::CreateProduct | Endpoint::UpdateProduct(_) => BodyKind::Multipart,
            _ => BodyKind::None,
        }
    }
}
