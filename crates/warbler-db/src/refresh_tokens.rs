//! PostgreSQL implementation of the refresh-token storage interface.
//!
//! Every operation is a single statement keyed by token value, so no
//! transaction spans multiple rows. Records are never deleted here — revoke
//! only sets `revoked_at`, and expired rows age out by timestamp comparison
//! at validation time.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use warbler_auth::{AuthError, NewRefreshToken, RefreshTokenRecord, RefreshTokenStore};

#[derive(Debug, Clone, sqlx::FromRow)]
struct RefreshTokenRow {
    token: String,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    revoked_at: Option<DateTime<Utc>>,
}

impl From<RefreshTokenRow> for RefreshTokenRecord {
    fn from(row: RefreshTokenRow) -> Self {
        RefreshTokenRecord {
            token: row.token,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            expires_at: row.expires_at,
            revoked_at: row.revoked_at,
        }
    }
}

fn storage_error(e: sqlx::Error) -> AuthError {
    AuthError::Storage(e.to_string())
}

/// Refresh-token persistence backed by the shared [`PgPool`].
#[derive(Debug, Clone)]
pub struct PgRefreshTokenStore {
    pool: PgPool,
}

impl PgRefreshTokenStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenStore for PgRefreshTokenStore {
    async fn create(&self, new_token: NewRefreshToken) -> Result<RefreshTokenRecord, AuthError> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"INSERT INTO refresh_tokens (token, user_id, created_at, updated_at, expires_at)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING token, user_id, created_at, updated_at, expires_at, revoked_at"#,
        )
        .bind(&new_token.token)
        .bind(new_token.user_id)
        .bind(new_token.created_at)
        .bind(new_token.updated_at)
        .bind(new_token.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.into())
    }

    async fn lookup(&self, token: &str) -> Result<RefreshTokenRecord, AuthError> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"SELECT token, user_id, created_at, updated_at, expires_at, revoked_at
               FROM refresh_tokens
               WHERE token = $1"#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map(Into::into).ok_or(AuthError::TokenNotFound)
    }

    async fn update_revoked_at(
        &self,
        token: &str,
        revoked_at: DateTime<Utc>,
    ) -> Result<(), AuthError> {
        let result = sqlx::query(
            r#"UPDATE refresh_tokens
               SET revoked_at = $1, updated_at = $2
               WHERE token = $3"#,
        )
        .bind(revoked_at)
        .bind(revoked_at)
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(AuthError::TokenNotFound);
        }

        Ok(())
    }
}
