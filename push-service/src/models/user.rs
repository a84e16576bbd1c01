use serde::{Deserialize, Serialize};

/// Push-token record as served by the user service. Only `token` matters to
/// the worker; anything else in the response is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushToken {
    pub token: String,
}
