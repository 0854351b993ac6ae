//! Models shared across resource types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::Model;

/// Arbitrary key/value metadata attached to a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetaData {
    /// Server-assigned identifier; read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The metadata key.
    pub key: String,

    /// The metadata value.
    pub value: Value,

    /// Human-readable form of the key, when the server provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_key: Option<String>,

    /// Human-readable form of the value, when the server provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
}

impl Default for MetaData {
    fn default() -> Self {
        Self {
            id: None,
            key: String::new(),
            value: Value::String(String::new()),
            display_key: None,
            display_value: None,
        }
    }
}

impl Model for MetaData {
    const NAME: &'static str = "MetaData";
}
