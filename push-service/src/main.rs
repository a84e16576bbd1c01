use anyhow::{Error, Result};
use push_service::{
    api,
    clients::{
        fcm::FcmClient, rbmq::RabbitMqClient, template::TemplateServiceClient,
        users::UserServiceClient,
    },
    config::Config,
    logging, worker,
};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_tracing();

    let config = Config::load()?;

    let rabbit = RabbitMqClient::connect(&config).await?;
    let templates = TemplateServiceClient::new(&config)?;
    let users = UserServiceClient::new(&config)?;
    let delivery = FcmClient::new(&config)?;

    let api_config = config.clone();
    tokio::spawn(async move {
        if let Err(error) = api::run_api_server(api_config).await {
            error!(%error, "Health check server exited");
        }
    });

    worker::run(&rabbit, &templates, &users, &delivery).await
}
