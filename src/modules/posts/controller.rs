use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use warbler_core::AppError;

use super::model::{CreatePostDto, Post};
use super::service::PostService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create a post
#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "Post body too long or invalid"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Posts"
)]
#[instrument(skip_all)]
pub async fn create_post(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePostDto>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let post = PostService::create_post(&state.db, auth_user.user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// List all posts
#[utoipa::path(
    get,
    path = "/api/posts",
    responses(
        (status = 200, description = "All posts, oldest first", body = [Post]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Posts"
)]
#[instrument(skip_all)]
pub async fn get_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, AppError> {
    let posts = PostService::get_posts(&state.db).await?;
    Ok(Json(posts))
}

/// Get a post by ID
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    params(("post_id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 200, description = "The post", body = Post),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Posts"
)]
#[instrument(skip_all)]
pub async fn get_post_by_id(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Post>, AppError> {
    let post = PostService::get_post_by_id(&state.db, post_id).await?;
    Ok(Json(post))
}

/// Delete own post
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    params(("post_id" = Uuid, Path, description = "Post ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the post owner"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Posts"
)]
#[instrument(skip_all)]
pub async fn delete_post(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    PostService::delete_post(&state.db, post_id, auth_user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
