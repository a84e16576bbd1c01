use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};

use crate::{config::Config, error::WorkerError, models::user::PushToken};

pub struct UserServiceClient {
    http_client: Client,
    base_url: String,
}

impl UserServiceClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.user_service_url, "User service client initialized");

        Ok(Self {
            http_client,
            base_url: config.user_service_url.clone(),
        })
    }

    pub async fn fetch_push_token(&self, user_id: &str) -> Result<PushToken, WorkerError> {
        let url = format!("{}/api/v1/users/{}/push-token", self.base_url, user_id);

        debug!(user_id, "Fetching push token from user service");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| WorkerError::Lookup {
                resource: "push token",
                reason: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(WorkerError::Lookup {
                resource: "push token",
                reason: format!("user service returned status {status}"),
            });
        }

        response
            .json::<PushToken>()
            .await
            .map_err(|e| WorkerError::Lookup {
                resource: "push token",
                reason: format!("invalid push token response: {e}"),
            })
    }
}
