use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use uuid::Uuid;

use warbler_auth::{bearer_token, verify_token};
use warbler_core::AppError;

use crate::state::AppState;

/// Extractor that validates the bearer access token and provides the
/// authenticated principal's ID.
///
/// Any extraction or validation failure rejects the request with the uniform
/// `401 Unauthorized` response; the underlying reason is only logged.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            bearer_token(&parts.headers).map_err(warbler_auth::AuthError::into_app_error)?;

        let user_id = verify_token(&token, &state.jwt_config)
            .map_err(warbler_auth::AuthError::into_app_error)?;

        Ok(AuthUser { user_id })
    }
}
