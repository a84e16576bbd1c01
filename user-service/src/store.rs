use sqlx::{PgPool, types::Json};
use uuid::Uuid;

use crate::{
    auth,
    error::ApiError,
    models::{PushToken, User},
    schemas::{RegisterRequest, UpdateUserRequest},
};

const USER_COLUMNS: &str = "id, email, password, name, is_active, role, preferences, created_at";

pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, ApiError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_user(pool: &PgPool, user_id: Uuid) -> Result<Option<User>, ApiError> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, ApiError> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
    ))
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn create_user(pool: &PgPool, payload: &RegisterRequest) -> Result<User, ApiError> {
    let password_hash = auth::hash_password(&payload.password)?;

    let user = sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (email, password, name, preferences) \
         VALUES ($1, $2, $3, $4) \
         RETURNING {USER_COLUMNS}"
    ))
    .bind(&payload.email)
    .bind(&password_hash)
    .bind(&payload.name)
    .bind(Json(payload.preferences.clone()))
    .fetch_one(pool)
    .await
    .map_err(into_email_conflict)?;

    Ok(user)
}

pub async fn update_user(
    pool: &PgPool,
    user_id: Uuid,
    updates: &UpdateUserRequest,
) -> Result<Option<User>, ApiError> {
    let password_hash = match &updates.password {
        Some(password) => Some(auth::hash_password(password)?),
        None => None,
    };

    let user = sqlx::query_as::<_, User>(&format!(
        "UPDATE users SET \
            email = COALESCE($2, email), \
            name = COALESCE($3, name), \
            password = COALESCE($4, password), \
            preferences = COALESCE($5, preferences) \
         WHERE id = $1 \
         RETURNING {USER_COLUMNS}"
    ))
    .bind(user_id)
    .bind(&updates.email)
    .bind(&updates.name)
    .bind(&password_hash)
    .bind(updates.preferences.clone().map(Json))
    .fetch_optional(pool)
    .await
    .map_err(into_email_conflict)?;

    Ok(user)
}

pub async fn authenticate_user(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    let user = get_user_by_email(pool, email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !auth::verify_password(password, &user.password)? {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(user)
}

pub async fn get_push_token(pool: &PgPool, user_id: Uuid) -> Result<Option<PushToken>, ApiError> {
    let token = sqlx::query_as::<_, PushToken>(
        "SELECT id, user_id, token, created_at FROM push_tokens WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(token)
}

/// Creates the user's token record or updates it in place; a user never ends
/// up with more than one row.
pub async fn upsert_push_token(
    pool: &PgPool,
    user_id: Uuid,
    token: &str,
) -> Result<PushToken, ApiError> {
    let record = sqlx::query_as::<_, PushToken>(
        "INSERT INTO push_tokens (user_id, token) VALUES ($1, $2) \
         ON CONFLICT (user_id) DO UPDATE SET token = EXCLUDED.token \
         RETURNING id, user_id, token, created_at",
    )
    .bind(user_id)
    .bind(token)
    .fetch_one(pool)
    .await?;

    Ok(record)
}

fn into_email_conflict(error: sqlx::Error) -> ApiError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => ApiError::EmailTaken,
        _ => ApiError::from(error),
    }
}
