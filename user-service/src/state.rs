use sqlx::PgPool;

use crate::{auth::JwtAuth, config::Config};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth: JwtAuth,
}

impl AppState {
    pub fn new(pool: PgPool, config: &Config) -> Self {
        Self {
            auth: JwtAuth::new(&config.jwt_secret_key, config.access_token_expire_minutes),
            pool,
        }
    }
}
