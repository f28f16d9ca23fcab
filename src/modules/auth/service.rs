use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use warbler_auth::{
    AuthError, NewRefreshToken, RefreshTokenStatus, RefreshTokenStore, create_access_token,
    verify_password,
};
use warbler_config::JwtConfig;
use warbler_core::AppError;

use super::model::{LoginRequest, LoginResponse, RefreshResponse};

pub struct AuthService;

impl AuthService {
    /// Verifies primary credentials, mints an access token, and persists a
    /// fresh refresh-token record for this session.
    ///
    /// Concurrent logins for the same user are fine: each call creates an
    /// independent record and none invalidates the others.
    #[instrument(skip_all)]
    pub async fn login(
        db: &PgPool,
        store: &impl RefreshTokenStore,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            created_at: chrono::DateTime<Utc>,
            updated_at: chrono::DateTime<Utc>,
            email: String,
            is_premium: bool,
            hashed_password: String,
        }

        let user = sqlx::query_as::<_, UserWithPassword>(
            r#"SELECT id, created_at, updated_at, email, is_premium, hashed_password
               FROM users WHERE email = $1"#,
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await
        .map_err(|e| AuthError::Storage(e.to_string()).into_app_error())?
        .ok_or_else(|| AuthError::CredentialInvalid.into_app_error())?;

        let is_valid = verify_password(&dto.password, &user.hashed_password)
            .map_err(AuthError::into_app_error)?;
        if !is_valid {
            return Err(AuthError::CredentialInvalid.into_app_error());
        }

        let token =
            create_access_token(user.id, jwt_config).map_err(AuthError::into_app_error)?;

        let record = store
            .create(
                NewRefreshToken::issue(user.id, jwt_config.refresh_token_expiry)
                    .map_err(AuthError::into_app_error)?,
            )
            .await
            .map_err(AuthError::into_app_error)?;

        Ok(LoginResponse {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email,
            is_premium: user.is_premium,
            token,
            refresh_token: record.token,
        })
    }

    /// Exchanges a still-valid refresh token for a new access token.
    ///
    /// The store is re-read on every call; there is no in-process cache. The
    /// record itself is left untouched — refresh tokens are not rotated.
    #[instrument(skip_all)]
    pub async fn refresh(
        store: &impl RefreshTokenStore,
        refresh_token: &str,
        jwt_config: &JwtConfig,
    ) -> Result<RefreshResponse, AppError> {
        let record = store
            .lookup(refresh_token)
            .await
            .map_err(AuthError::into_app_error)?;

        match record.status(Utc::now()) {
            RefreshTokenStatus::Valid => {}
            RefreshTokenStatus::Expired => {
                return Err(AuthError::TokenExpired.into_app_error());
            }
            RefreshTokenStatus::Revoked => {
                return Err(AuthError::TokenRevoked.into_app_error());
            }
        }

        let token =
            create_access_token(record.user_id, jwt_config).map_err(AuthError::into_app_error)?;

        Ok(RefreshResponse { token })
    }

    /// Revokes a refresh token. Terminal: a revoked token can never refresh
    /// again, though the record is kept.
    ///
    /// Idempotent at this boundary: revoking an already-revoked token bumps
    /// its timestamps, and an unknown token is reported as success so the
    /// response gives no oracle on which token values exist.
    #[instrument(skip_all)]
    pub async fn revoke(
        store: &impl RefreshTokenStore,
        refresh_token: &str,
    ) -> Result<(), AppError> {
        match store.update_revoked_at(refresh_token, Utc::now()).await {
            Ok(()) => Ok(()),
            Err(AuthError::TokenNotFound) => {
                tracing::warn!("revoke requested for unknown refresh token");
                Ok(())
            }
            Err(err) => Err(err.into_app_error()),
        }
    }
}
