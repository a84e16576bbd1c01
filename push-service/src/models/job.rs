use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPLATE_CODE: &str = "TEMPLATE_001";

fn default_template_code() -> String {
    DEFAULT_TEMPLATE_CODE.to_string()
}

/// One notification request as carried by the job payload. `user_id` and
/// `name` are not validated here; a missing field surfaces later as a lookup
/// or render gap. The remaining fields are producer metadata accepted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushJob {
    pub user_id: Option<String>,
    pub name: Option<String>,

    #[serde(default = "default_template_code")]
    pub template_code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    #[serde(default)]
    pub variables: HashMap<String, serde_json::Value>,

    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}
