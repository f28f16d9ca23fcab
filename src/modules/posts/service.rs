use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use warbler_auth::{AuthError, ensure_owner};
use warbler_core::{AppError, profanity::clean_body};

use super::model::{CreatePostDto, Post};

const MAX_POST_LENGTH: usize = 140;

pub struct PostService;

impl PostService {
    #[instrument(skip_all)]
    pub async fn create_post(
        db: &PgPool,
        user_id: Uuid,
        dto: CreatePostDto,
    ) -> Result<Post, AppError> {
        if dto.body.len() > MAX_POST_LENGTH {
            return Err(AppError::bad_request(anyhow::anyhow!("Post is too long")));
        }

        let post = sqlx::query_as::<_, Post>(
            r#"INSERT INTO posts (body, user_id)
               VALUES ($1, $2)
               RETURNING id, created_at, updated_at, body, user_id"#,
        )
        .bind(clean_body(&dto.body))
        .bind(user_id)
        .fetch_one(db)
        .await?;

        Ok(post)
    }

    #[instrument(skip_all)]
    pub async fn get_posts(db: &PgPool) -> Result<Vec<Post>, AppError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"SELECT id, created_at, updated_at, body, user_id
               FROM posts
               ORDER BY created_at ASC"#,
        )
        .fetch_all(db)
        .await?;

        Ok(posts)
    }

    #[instrument(skip_all)]
    pub async fn get_post_by_id(db: &PgPool, post_id: Uuid) -> Result<Post, AppError> {
        let post = sqlx::query_as::<_, Post>(
            r#"SELECT id, created_at, updated_at, body, user_id
               FROM posts
               WHERE id = $1"#,
        )
        .bind(post_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Post not found")))?;

        Ok(post)
    }

    /// Deletes a post. Only the owner may delete; anyone else gets the same
    /// `Forbidden` signal regardless of why the IDs differ.
    #[instrument(skip_all)]
    pub async fn delete_post(db: &PgPool, post_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let post = Self::get_post_by_id(db, post_id).await?;

        ensure_owner(post.user_id, user_id).map_err(AuthError::into_app_error)?;

        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post.id)
            .execute(db)
            .await?;

        Ok(())
    }
}
