use axum::{Router, routing::post};

use super::controller::handle_payment_event;
use crate::state::AppState;

pub fn init_webhooks_router() -> Router<AppState> {
    Router::new().route("/payments", post(handle_payment_event))
}
