use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub rabbitmq_url: String,

    #[serde(default = "default_push_queue_name")]
    pub push_queue_name: String,

    #[serde(default = "default_prefetch_count")]
    pub prefetch_count: u16,

    pub template_service_url: String,
    pub user_service_url: String,

    pub fcm_project_id: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

fn default_push_queue_name() -> String {
    "push.queue".to_string()
}

fn default_prefetch_count() -> u16 {
    1
}

fn default_server_port() -> u16 {
    8001
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }
}
