use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use warbler_auth::{AuthError, hash_password};
use warbler_core::AppError;

use super::model::{CreateUserDto, UpdateCredentialsDto, User};

pub struct UserService;

impl UserService {
    #[instrument(skip_all)]
    pub async fn register_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        let existing_user = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing_user.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!("Email already exists")));
        }

        let hashed_password = hash_password(&dto.password).map_err(AuthError::into_app_error)?;

        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (email, hashed_password)
               VALUES ($1, $2)
               RETURNING id, created_at, updated_at, email, is_premium"#,
        )
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    /// Replaces the authenticated user's email and password.
    #[instrument(skip_all)]
    pub async fn update_credentials(
        db: &PgPool,
        user_id: Uuid,
        dto: UpdateCredentialsDto,
    ) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password).map_err(AuthError::into_app_error)?;

        let user = sqlx::query_as::<_, User>(
            r#"UPDATE users
               SET email = $1, hashed_password = $2, updated_at = NOW()
               WHERE id = $3
               RETURNING id, created_at, updated_at, email, is_premium"#,
        )
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }
}
