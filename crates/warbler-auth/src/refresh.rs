//! Refresh-token records, generation, and the storage abstraction.
//!
//! A refresh token is an opaque high-entropy value persisted server-side.
//! Records are never deleted: they leave circulation either by passing their
//! `expires_at` or by having `revoked_at` set. Revocation is monotonic —
//! once set it never clears. A user may hold any number of concurrently
//! valid tokens (one per session).
//!
//! Refresh does **not** rotate the token: exchanging a refresh token for a
//! new access token leaves the record untouched.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use rand::rngs::OsRng;
use uuid::Uuid;

use crate::error::AuthError;

/// Raw entropy per token, before hex encoding.
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Generates an opaque refresh-token value: 256 bits from the OS CSPRNG,
/// hex-encoded.
pub fn generate_refresh_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))?;
    Ok(hex::encode(bytes))
}

/// A persisted refresh-token record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTokenRecord {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Lifecycle state of a record at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTokenStatus {
    Valid,
    Expired,
    Revoked,
}

impl RefreshTokenRecord {
    /// Derives the record's state at `now`.
    ///
    /// Expiry and revocation are independent conditions; either one blocks a
    /// refresh. A record that is both expired and revoked reports `Expired`.
    pub fn status(&self, now: DateTime<Utc>) -> RefreshTokenStatus {
        if now >= self.expires_at {
            RefreshTokenStatus::Expired
        } else if self.revoked_at.is_some() {
            RefreshTokenStatus::Revoked
        } else {
            RefreshTokenStatus::Valid
        }
    }
}

/// Parameters for persisting a freshly issued refresh token.
#[derive(Debug, Clone)]
pub struct NewRefreshToken {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl NewRefreshToken {
    /// Generates a token value and stamps the record: `created_at` and
    /// `updated_at` are `now`, `expires_at` is `now + ttl_seconds`.
    pub fn issue(user_id: Uuid, ttl_seconds: i64) -> Result<Self, AuthError> {
        let token = generate_refresh_token()?;
        let now = Utc::now();

        Ok(Self {
            token,
            user_id,
            created_at: now,
            updated_at: now,
            expires_at: now + Duration::seconds(ttl_seconds),
        })
    }
}

/// Narrow storage interface for refresh-token state.
///
/// Each operation is a single statement against one row keyed by token
/// value, assumed atomic and durable on success. The subsystem depends only
/// on this trait; the Postgres implementation lives in `warbler-db`.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Persists a new record with `revoked_at` unset.
    async fn create(&self, new_token: NewRefreshToken) -> Result<RefreshTokenRecord, AuthError>;

    /// Fetches the record for a token value.
    ///
    /// # Errors
    ///
    /// [`AuthError::TokenNotFound`] when no record exists.
    async fn lookup(&self, token: &str) -> Result<RefreshTokenRecord, AuthError>;

    /// Sets `revoked_at` and `updated_at` on the record.
    ///
    /// Re-invoking on an already-revoked token updates both timestamps again
    /// rather than erroring.
    ///
    /// # Errors
    ///
    /// [`AuthError::TokenNotFound`] when no record matches the token value.
    async fn update_revoked_at(
        &self,
        token: &str,
        revoked_at: DateTime<Utc>,
    ) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_expiring_in(seconds: i64) -> RefreshTokenRecord {
        let now = Utc::now();
        RefreshTokenRecord {
            token: "test-token".to_string(),
            user_id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            expires_at: now + Duration::seconds(seconds),
            revoked_at: None,
        }
    }

    #[test]
    fn test_generate_refresh_token_length_and_charset() {
        let token = generate_refresh_token().unwrap();
        // 32 bytes hex-encoded
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_refresh_token_unique() {
        let first = generate_refresh_token().unwrap();
        let second = generate_refresh_token().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_status_valid() {
        let record = record_expiring_in(3600);
        assert_eq!(record.status(Utc::now()), RefreshTokenStatus::Valid);
    }

    #[test]
    fn test_status_expired() {
        let record = record_expiring_in(3600);
        let later = record.expires_at + Duration::seconds(1);
        assert_eq!(record.status(later), RefreshTokenStatus::Expired);
    }

    #[test]
    fn test_status_expired_at_exact_boundary() {
        let record = record_expiring_in(3600);
        assert_eq!(record.status(record.expires_at), RefreshTokenStatus::Expired);
    }

    #[test]
    fn test_status_revoked_regardless_of_expiry_state() {
        let mut record = record_expiring_in(3600);
        record.revoked_at = Some(Utc::now());
        assert_eq!(record.status(Utc::now()), RefreshTokenStatus::Revoked);
    }

    #[test]
    fn test_status_expired_with_revoked_unset() {
        let record = record_expiring_in(-1);
        assert_eq!(record.status(Utc::now()), RefreshTokenStatus::Expired);
    }

    #[test]
    fn test_issue_stamps_record() {
        let user_id = Uuid::new_v4();
        let ttl = 5_184_000; // 60 days
        let before = Utc::now();
        let new_token = NewRefreshToken::issue(user_id, ttl).unwrap();
        let after = Utc::now();

        assert_eq!(new_token.user_id, user_id);
        assert_eq!(new_token.created_at, new_token.updated_at);
        assert!(new_token.created_at >= before && new_token.created_at <= after);
        assert_eq!(
            new_token.expires_at - new_token.created_at,
            Duration::seconds(ttl)
        );
    }
}
