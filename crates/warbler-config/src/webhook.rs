use std::env;

/// API key expected from the payment provider's webhook calls.
#[derive(Clone, Debug)]
pub struct WebhookConfig {
    pub api_key: String,
}

impl WebhookConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("PAYMENTS_API_KEY").unwrap_or_default(),
        }
    }
}
