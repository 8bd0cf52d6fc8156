use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One job advertisement as returned by the API.
///
/// The key set depends on the columns requested, so records stay dynamic
/// maps rather than a fixed struct. `custom_field1` holds the opaque
/// category code until the mapping step rewrites it to its label.
pub type JobRecord = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobAdsResponse {
    #[serde(default)]
    pub advertisements: Vec<JobRecord>,

    /// Field schemas keyed by field name; custom fields carry the
    /// code-to-label options used for resolution.
    #[serde(default)]
    pub fields: HashMap<String, FieldSchema>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldSchema {
    #[serde(default)]
    pub options: Vec<FieldOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldOption {
    pub id: String,
    pub label: String,
}
