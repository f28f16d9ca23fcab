use axum::{Router, routing::post};

use super::controller::{create_user, update_credentials};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/", post(create_user).put(update_credentials))
}
