//! # Warbler Auth
//!
//! Authentication and session-lifecycle subsystem for the Warbler API.
//!
//! This crate provides:
//!
//! - [`password`]: Salted one-way password hashing and verification (bcrypt)
//! - [`jwt`]: Short-lived signed access tokens (issue and validate)
//! - [`refresh`]: Long-lived refresh-token records, opaque token generation,
//!   the [`RefreshTokenStore`] storage abstraction, and the
//!   valid/expired/revoked state machine
//! - [`extract`]: `Authorization` header credential extraction (`Bearer` and
//!   `ApiKey` schemes)
//! - [`guard`]: Resource-ownership check for mutating operations
//! - [`error`]: The internal failure taxonomy and its collapse into uniform
//!   boundary responses
//!
//! # Session lifecycle
//!
//! Login verifies the password, mints an access token (1 hour) and persists a
//! refresh-token record (60 days). Refresh exchanges a still-valid refresh
//! token for a new access token; the refresh-token record itself is left
//! untouched. Revoke sets `revoked_at` on the record; revocation is terminal
//! and never clears. Multiple concurrently valid refresh tokens per user are
//! allowed by design.
//!
//! # Example
//!
//! ```ignore
//! use warbler_auth::{create_access_token, verify_token};
//! use warbler_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

pub mod claims;
pub mod error;
pub mod extract;
pub mod guard;
pub mod jwt;
pub mod password;
pub mod refresh;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use error::AuthError;
pub use extract::{api_key, bearer_token};
pub use guard::ensure_owner;
pub use jwt::{create_access_token, verify_token};
pub use password::{hash_password, verify_password};
pub use refresh::{
    NewRefreshToken, RefreshTokenRecord, RefreshTokenStatus, RefreshTokenStore,
    generate_refresh_token,
};
