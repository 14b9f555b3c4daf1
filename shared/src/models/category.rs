//! Category Model

use serde::{Deserialize, Serialize};

/// Category record as returned by `api/category/all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Create/update category payload (JSON)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CategoryPayload {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Set an additional backend field
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_payload_serializes_flat() {
        let payload = CategoryPayload::new("Ichimliklar").with("parent", 2);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ichimliklar", "parent": 2}));
    }

    #[test]
    fn test_category_deserialize_without_name() {
        let category: Category = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert_eq!(category.id, 1);
        assert!(category.name.is_empty());
        assert!(category.extra.is_empty());
    }
}
