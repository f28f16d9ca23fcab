use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Login request structure
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Login response: the user's public fields plus a short-lived access token
/// and the opaque refresh token for this session.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    pub is_premium: bool,
    pub token: String,
    pub refresh_token: String,
}

/// Refresh response: a new access token only. The refresh token presented by
/// the caller stays valid and is not rotated.
#[derive(Debug, Serialize, ToSchema)]
pub struct RefreshResponse {
    pub token: String,
}
