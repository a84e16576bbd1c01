use anyhow::{Error, Result, anyhow};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::info;
use user_service::{config::Config, logging, routes, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init_tracing();

    let config = Config::load()?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {e}"))?;

    info!("PostgreSQL connection established");

    sqlx::migrate!().run(&pool).await?;

    let state = AppState::new(pool, &config);
    let app = routes::app(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "User service started");

    axum::serve(listener, app).await?;

    Ok(())
}
