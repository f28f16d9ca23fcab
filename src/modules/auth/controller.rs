use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use tracing::instrument;

use warbler_auth::{AuthError, bearer_token};
use warbler_core::AppError;

use super::model::{LoginRequest, LoginResponse, RefreshResponse};
use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response =
        AuthService::login(&state.db, &state.refresh_tokens, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "New access token issued", body = RefreshResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn refresh_access_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RefreshResponse>, AppError> {
    let refresh_token = bearer_token(&headers).map_err(AuthError::into_app_error)?;

    let response =
        AuthService::refresh(&state.refresh_tokens, &refresh_token, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Revoke a refresh token
#[utoipa::path(
    post,
    path = "/api/auth/revoke",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Token revoked"),
        (status = 401, description = "Missing authorization header"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn revoke_refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let refresh_token = bearer_token(&headers).map_err(AuthError::into_app_error)?;

    AuthService::revoke(&state.refresh_tokens, &refresh_token).await?;
    Ok(StatusCode::NO_CONTENT)
}
