use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::CurrentUser,
    error::ApiError,
    models::PushToken,
    response::ApiResponse,
    schemas::{
        LoginRequest, PushTokenPayload, RegisterRequest, RegisteredUser, TokenResponse,
        UpdateUserRequest, UserOut,
    },
    state::AppState,
    store,
};

pub fn app(state: AppState) -> Router {
    let users = Router::new()
        .route("/", get(list_users))
        .route("/{user_id}", get(get_user).patch(update_user))
        .route(
            "/{user_id}/push-token",
            get(get_push_token).post(register_push_token),
        );

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/health", get(health))
        .nest("/api/v1/users", users)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<RegisteredUser>>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    if store::get_user_by_email(&state.pool, &payload.email)
        .await?
        .is_some()
    {
        return Err(ApiError::EmailTaken);
    }

    let created = store::create_user(&state.pool, &payload).await?;

    info!(user_id = %created.id, "User registered");

    Ok(Json(ApiResponse::success(
        RegisteredUser {
            user_id: created.id,
        },
        "created",
    )))
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = store::authenticate_user(&state.pool, &payload.email, &payload.password).await?;

    let token = state.auth.issue_token(&user.email)?;

    Ok(Json(TokenResponse::bearer(token)))
}

async fn me(CurrentUser(user): CurrentUser) -> Json<UserOut> {
    Json(user.into())
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserOut>>, ApiError> {
    let users = store::list_users(&state.pool).await?;

    Ok(Json(users.into_iter().map(UserOut::from).collect()))
}

async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserOut>, ApiError> {
    store::get_user(&state.pool, user_id)
        .await?
        .map(|user| Json(user.into()))
        .ok_or(ApiError::NotFound("User not found"))
}

async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(updates): Json<UpdateUserRequest>,
) -> Result<Json<UserOut>, ApiError> {
    let updated = store::update_user(&state.pool, user_id, &updates)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    Ok(Json(updated.into()))
}

async fn get_push_token(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<PushToken>, ApiError> {
    if store::get_user(&state.pool, user_id).await?.is_none() {
        return Err(ApiError::Forbidden);
    }

    store::get_push_token(&state.pool, user_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("No push token found for this user"))
}

async fn register_push_token(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<PushTokenPayload>,
) -> Result<Json<PushToken>, ApiError> {
    if store::get_user(&state.pool, user_id).await?.is_none() {
        return Err(ApiError::Forbidden);
    }

    let record = store::upsert_push_token(&state.pool, user_id, &payload.token).await?;

    info!(user_id = %user_id, "Push token registered");

    Ok(Json(record))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
