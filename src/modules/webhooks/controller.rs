use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use tracing::instrument;

use warbler_auth::{AuthError, api_key};
use warbler_core::AppError;

use super::model::{PaymentWebhookEvent, USER_UPGRADED_EVENT};
use super::service::WebhookService;
use crate::state::AppState;

/// Payment-provider webhook
///
/// Authenticated with `Authorization: ApiKey <key>` rather than a bearer
/// token; the key is a shared service-to-service credential.
#[utoipa::path(
    post,
    path = "/api/webhooks/payments",
    request_body = PaymentWebhookEvent,
    responses(
        (status = 204, description = "Event processed or ignored"),
        (status = 401, description = "Missing or wrong API key"),
        (status = 404, description = "Unknown user"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Webhooks"
)]
#[instrument(skip_all)]
pub async fn handle_payment_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(event): Json<PaymentWebhookEvent>,
) -> Result<StatusCode, AppError> {
    let presented_key = api_key(&headers).map_err(AuthError::into_app_error)?;
    if presented_key != state.webhook_config.api_key {
        return Err(AppError::unauthorized("Unauthorized"));
    }

    // Unrecognized events are acknowledged so the provider stops retrying.
    if event.event != USER_UPGRADED_EVENT {
        return Ok(StatusCode::NO_CONTENT);
    }

    WebhookService::upgrade_user_to_premium(&state.db, event.data.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
