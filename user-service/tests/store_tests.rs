use sqlx::{PgPool, postgres::PgPoolOptions};
use user_service::{
    error::ApiError,
    schemas::{RegisterRequest, UserPreferences},
    store,
};
use uuid::Uuid;

async fn test_pool() -> PgPool {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("failed to connect to PostgreSQL");

    sqlx::migrate!().run(&pool).await.expect("migrations failed");

    pool
}

fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: "s3cret-pass".to_string(),
        name: "Alice".to_string(),
        preferences: UserPreferences {
            email: false,
            push: true,
        },
    }
}

fn unique_email() -> String {
    format!("store-test-{}@example.com", Uuid::new_v4())
}

/// Test: Second registration of a token updates the row instead of adding one
#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn push_token_reregistration_updates_existing_record() {
    let pool = test_pool().await;

    let user = store::create_user(&pool, &register_request(&unique_email()))
        .await
        .unwrap();

    let first = store::upsert_push_token(&pool, user.id, "token-one")
        .await
        .unwrap();
    let second = store::upsert_push_token(&pool, user.id, "token-two")
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.token, "token-two");

    let stored = store::get_push_token(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(stored.token, "token-two");
}

/// Test: The unique email constraint surfaces as the duplicate-email error
#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn duplicate_email_registration_is_rejected() {
    let pool = test_pool().await;

    let email = unique_email();

    store::create_user(&pool, &register_request(&email))
        .await
        .unwrap();

    let err = store::create_user(&pool, &register_request(&email))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::EmailTaken));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn authentication_round_trips() {
    let pool = test_pool().await;

    let email = unique_email();
    store::create_user(&pool, &register_request(&email))
        .await
        .unwrap();

    let user = store::authenticate_user(&pool, &email, "s3cret-pass")
        .await
        .unwrap();
    assert_eq!(user.email, email);

    let err = store::authenticate_user(&pool, &email, "wrong-pass")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidCredentials));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn deleting_a_user_cascades_to_their_push_token() {
    let pool = test_pool().await;

    let user = store::create_user(&pool, &register_request(&unique_email()))
        .await
        .unwrap();
    store::upsert_push_token(&pool, user.id, "token-one")
        .await
        .unwrap();

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let token = store::get_push_token(&pool, user.id).await.unwrap();
    assert!(token.is_none());
}
