use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A rendered notification ready to hand to the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedNotification {
    pub title: String,
    pub body: String,
}

/// What came back from the provider. A failed send is reported here rather
/// than raised; the handler only logs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryOutcome {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryOutcome {
    pub fn delivered(response: impl Into<String>) -> Self {
        Self {
            success: true,
            response: Some(response.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error.into()),
        }
    }
}

/// Seam between the push handler and the provider integration.
#[async_trait]
pub trait PushDelivery {
    async fn send(
        &self,
        notification: &RenderedNotification,
        device_token: &str,
    ) -> DeliveryOutcome;
}
