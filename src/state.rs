use sqlx::PgPool;

use warbler_config::{JwtConfig, ServerConfig, WebhookConfig};
use warbler_db::PgRefreshTokenStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub refresh_tokens: PgRefreshTokenStore,
    pub jwt_config: JwtConfig,
    pub server_config: ServerConfig,
    pub webhook_config: WebhookConfig,
}

pub async fn init_app_state() -> AppState {
    let db = warbler_db::init_db_pool().await;

    AppState {
        refresh_tokens: PgRefreshTokenStore::new(db.clone()),
        db,
        jwt_config: JwtConfig::from_env(),
        server_config: ServerConfig::from_env(),
        webhook_config: WebhookConfig::from_env(),
    }
}
