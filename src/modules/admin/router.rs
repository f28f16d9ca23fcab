use axum::{Router, routing::post};

use super::controller::reset;
use crate::state::AppState;

pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/reset", post(reset))
}
