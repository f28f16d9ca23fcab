use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_post, delete_post, get_post_by_id, get_posts};
use crate::state::AppState;

pub fn init_posts_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_post).get(get_posts))
        .route("/{post_id}", get(get_post_by_id).delete(delete_post))
}
