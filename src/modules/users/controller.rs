use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use warbler_core::AppError;

use super::model::{CreateUserDto, UpdateCredentialsDto, User};
use super::service::UserService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User registered successfully", body = User),
        (status = 400, description = "Bad request - validation error or email already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = UserService::register_user(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update own email and password
#[utoipa::path(
    put,
    path = "/api/users",
    request_body = UpdateCredentialsDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Credentials updated", body = User),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn update_credentials(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateCredentialsDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::update_credentials(&state.db, auth_user.user_id, dto).await?;
    Ok(Json(user))
}
