use axum::Router;
use chrono::{DateTime, Duration, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use warbler::router::init_router;
use warbler::state::AppState;
use warbler_auth::hash_password;
use warbler_config::{JwtConfig, ServerConfig, WebhookConfig};
use warbler_db::PgRefreshTokenStore;

pub const TEST_API_KEY: &str = "test-payments-api-key";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-key-32-chars!".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 5_184_000,
    }
}

pub fn setup_test_app(pool: PgPool) -> Router {
    let state = AppState {
        refresh_tokens: PgRefreshTokenStore::new(pool.clone()),
        db: pool,
        jwt_config: test_jwt_config(),
        server_config: ServerConfig {
            port: 8080,
            platform: "dev".to_string(),
        },
        webhook_config: WebhookConfig {
            api_key: TEST_API_KEY.to_string(),
        },
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

pub async fn create_test_user(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    password: &str,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO users (email, hashed_password)
           VALUES ($1, $2)
           RETURNING id"#,
    )
    .bind(email)
    .bind(&hashed)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_post(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    body: &str,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO posts (body, user_id)
           VALUES ($1, $2)
           RETURNING id"#,
    )
    .bind(body)
    .bind(user_id)
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}

/// Inserts a refresh-token row directly, bypassing the store, so tests can
/// seed expired or revoked records.
#[allow(dead_code)]
pub async fn insert_refresh_token(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    expires_at: DateTime<Utc>,
    revoked_at: Option<DateTime<Utc>>,
) -> String {
    let token = warbler_auth::generate_refresh_token().unwrap();

    sqlx::query(
        r#"INSERT INTO refresh_tokens (token, user_id, expires_at, revoked_at)
           VALUES ($1, $2, $3, $4)"#,
    )
    .bind(&token)
    .bind(user_id)
    .bind(expires_at)
    .bind(revoked_at)
    .execute(&mut **tx)
    .await
    .unwrap();

    token
}

#[allow(dead_code)]
pub fn sixty_days_from_now() -> DateTime<Utc> {
    Utc::now() + Duration::days(60)
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Mints an access token the test app will accept for `user_id`.
#[allow(dead_code)]
pub fn access_token_for(user_id: Uuid) -> String {
    warbler_auth::create_access_token(user_id, &test_jwt_config()).unwrap()
}

/// Mints an access token that is already past its expiry.
#[allow(dead_code)]
pub fn expired_access_token_for(user_id: Uuid) -> String {
    let config = JwtConfig {
        access_token_expiry: -120,
        ..test_jwt_config()
    };
    warbler_auth::create_access_token(user_id, &config).unwrap()
}
