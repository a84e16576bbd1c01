use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};

use crate::{config::Config, error::WorkerError, models::template::Template};

pub struct TemplateServiceClient {
    http_client: Client,
    base_url: String,
}

impl TemplateServiceClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.template_service_url, "Template service client initialized");

        Ok(Self {
            http_client,
            base_url: config.template_service_url.clone(),
        })
    }

    pub async fn fetch_template(&self, template_code: &str) -> Result<Template, WorkerError> {
        let url = format!("{}/api/v1/templates/{}", self.base_url, template_code);

        debug!(template_code, "Fetching template from service");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| WorkerError::Lookup {
                resource: "template",
                reason: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(WorkerError::Lookup {
                resource: "template",
                reason: format!("template service returned status {status}"),
            });
        }

        response
            .json::<Template>()
            .await
            .map_err(|e| WorkerError::Lookup {
                resource: "template",
                reason: format!("invalid template response: {e}"),
            })
    }
}
