use std::env;

/// Server bind address and deployment platform.
///
/// `platform` gates destructive admin endpoints: only the `dev` platform may
/// wipe user data.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub platform: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            platform: env::var("PLATFORM").unwrap_or_else(|_| "production".to_string()),
        }
    }

    pub fn is_dev(&self) -> bool {
        self.platform == "dev"
    }
}
