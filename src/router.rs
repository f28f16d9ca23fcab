use axum::http::StatusCode;
use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::admin::router::init_admin_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::posts::router::init_posts_router;
use crate::modules::users::router::init_users_router;
use crate::modules::webhooks::router::init_webhooks_router;
use crate::state::AppState;

/// Readiness probe
#[utoipa::path(
    get,
    path = "/api/healthz",
    responses((status = 200, description = "Server is ready")),
    tag = "Admin"
)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .route("/healthz", get(health_check))
                .nest("/auth", init_auth_router())
                .nest("/users", init_users_router())
                .nest("/posts", init_posts_router())
                .nest("/webhooks", init_webhooks_router()),
        )
        .nest("/admin", init_admin_router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
}
