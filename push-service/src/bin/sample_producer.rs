//! Publishes a handful of raw-format sample jobs to the push queue. Useful
//! for exercising the consumer without a producer service running.

use anyhow::{Error, Result};
use push_service::{clients::rbmq::RabbitMqClient, config::Config, logging};
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_tracing();

    let config = Config::load()?;
    let rabbit = RabbitMqClient::connect(&config).await?;

    for job in sample_jobs() {
        rabbit.publish_job(&job).await?;
        info!(
            user_id = job["user_id"].as_str().unwrap_or("-"),
            "Sample job published"
        );
    }

    Ok(())
}

fn sample_jobs() -> Vec<Value> {
    ["Alice Johnson", "Bob Smith", "Charlie Davis"]
        .iter()
        .map(|name| {
            json!({
                "notification_id": Uuid::new_v4(),
                "correlation_id": Uuid::new_v4(),
                "user_id": Uuid::new_v4(),
                "name": name,
                "template_code": "TEMPLATE_001",
                "request_id": format!("req-{}", Uuid::new_v4()),
                "priority": 1,
                "metadata": { "campaign_id": "summer_2025" },
            })
        })
        .collect()
}
