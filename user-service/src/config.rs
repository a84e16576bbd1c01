use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,

    pub jwt_secret_key: String,

    #[serde(default = "default_token_expire_minutes")]
    pub access_token_expire_minutes: i64,
}

fn default_server_port() -> u16 {
    8000
}

fn default_token_expire_minutes() -> i64 {
    60
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }
}
