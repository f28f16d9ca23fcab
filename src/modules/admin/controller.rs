use axum::Json;
use axum::extract::State;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use warbler_core::AppError;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ResetResponse {
    pub message: String,
}

/// Wipe all user data (dev platform only)
///
/// Deleting users cascades to their posts and refresh tokens.
#[utoipa::path(
    post,
    path = "/admin/reset",
    responses(
        (status = 200, description = "All user data deleted", body = ResetResponse),
        (status = 403, description = "Not available on this platform"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Admin"
)]
#[instrument(skip_all)]
pub async fn reset(State(state): State<AppState>) -> Result<Json<ResetResponse>, AppError> {
    if !state.server_config.is_dev() {
        return Err(AppError::forbidden("Reset is only available on the dev platform"));
    }

    sqlx::query("DELETE FROM users").execute(&state.db).await?;
    tracing::info!("all user data deleted");

    Ok(Json(ResetResponse {
        message: "All user data has been deleted".to_string(),
    }))
}
