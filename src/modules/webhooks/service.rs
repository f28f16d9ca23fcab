use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use warbler_core::AppError;

pub struct WebhookService;

impl WebhookService {
    #[instrument(skip_all)]
    pub async fn upgrade_user_to_premium(db: &PgPool, user_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"UPDATE users
               SET is_premium = TRUE, updated_at = NOW()
               WHERE id = $1"#,
        )
        .bind(user_id)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        Ok(())
    }
}
