use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Event name the payment provider sends when a user buys the premium tier.
pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

#[derive(Debug, Deserialize, ToSchema)]
pub struct PaymentWebhookEvent {
    pub event: String,
    pub data: PaymentWebhookData,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PaymentWebhookData {
    pub user_id: Uuid,
}
