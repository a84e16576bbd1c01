use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::Config,
    error::WorkerError,
    models::{
        delivery::{DeliveryOutcome, PushDelivery, RenderedNotification},
        fcm::{FcmMessage, FcmNotification, FcmRequest, FcmSendResponse},
    },
};

const FCM_SCOPES: &[&str] = &["https://www.googleapis.com/auth/firebase.messaging"];

pub struct FcmClient {
    http_client: Client,
    fcm_project_id: String,
}

impl FcmClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(project_id = %config.fcm_project_id, "FCM client initialized");

        Ok(Self {
            http_client,
            fcm_project_id: config.fcm_project_id.clone(),
        })
    }

    async fn try_send(&self, request: &FcmRequest) -> Result<String, WorkerError> {
        let provider = gcp_auth::provider()
            .await
            .map_err(|e| WorkerError::Delivery(format!("credential resolution failed: {e}")))?;

        let token = provider
            .token(FCM_SCOPES)
            .await
            .map_err(|e| WorkerError::Delivery(format!("access token request failed: {e}")))?;

        let url = format!(
            "https://fcm.googleapis.com/v1/projects/{}/messages:send",
            self.fcm_project_id
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token.as_str())
            .json(request)
            .send()
            .await
            .map_err(|e| WorkerError::Delivery(e.to_string()))?;

        if response.status().is_success() {
            let body: FcmSendResponse = response
                .json()
                .await
                .map_err(|e| WorkerError::Delivery(format!("invalid FCM response: {e}")))?;
            Ok(body.name)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|e| format!("unreadable FCM error body: {e}"));
            Err(WorkerError::Delivery(error_text))
        }
    }
}

#[async_trait]
impl PushDelivery for FcmClient {
    /// Sends to the resolved per-recipient token. Provider, auth, and
    /// transport failures are all reported through the outcome, never raised.
    async fn send(
        &self,
        notification: &RenderedNotification,
        device_token: &str,
    ) -> DeliveryOutcome {
        debug!(device_token, "Sending FCM push notification");

        let request = FcmRequest {
            message: FcmMessage {
                token: device_token.to_string(),
                notification: FcmNotification {
                    title: notification.title.clone(),
                    body: notification.body.clone(),
                },
                data: None,
            },
        };

        match self.try_send(&request).await {
            Ok(name) => DeliveryOutcome::delivered(name),
            Err(e) => DeliveryOutcome::failed(e.to_string()),
        }
    }
}
