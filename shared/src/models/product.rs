//! Product Model

use serde::{Deserialize, Serialize};

/// Product record as returned by `api/products/all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Backend-owned fields (price, category, image, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// File part of a product form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Form field name (e.g. "image")
    pub field: String,
    pub file_name: String,
    /// MIME type; guessed by the transport when `None`
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            mime_type: None,
            bytes,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Create/update product payload, sent as `multipart/form-data`.
///
/// Field order is preserved on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub fields: Vec<(String, String)>,
    pub attachments: Vec<Attachment>,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field
    pub fn text(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push((name.into(), value.to_string()));
        self
    }

    /// Add a file attachment
    pub fn attach(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.attachments.is_empty()
    }
}
