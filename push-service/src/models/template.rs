use serde::{Deserialize, Serialize};

/// A template as served by the template service: `subject` and `body` are the
/// contract, the rest is carried for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub template_code: Option<String>,

    #[serde(default)]
    pub version: Option<u32>,

    pub subject: String,
    pub body: String,

    #[serde(default)]
    pub language: Option<String>,
}
