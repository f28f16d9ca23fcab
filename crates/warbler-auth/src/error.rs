//! Internal failure taxonomy for the auth subsystem.
//!
//! The enum keeps every failure mode distinct for logging and tests. At the
//! HTTP boundary all validation-class failures collapse into a single
//! `401 Unauthorized` so the response never tells an attacker *why* a token
//! was rejected; infrastructure failures collapse into a generic `500`.

use thiserror::Error;
use warbler_core::AppError;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password.
    #[error("invalid credentials")]
    CredentialInvalid,

    /// Token could not be decoded into claims.
    #[error("malformed token")]
    TokenMalformed,

    /// Token decoded but the signature does not match the signing secret.
    #[error("invalid token signature")]
    SignatureInvalid,

    /// Token signature is valid but the expiry has passed.
    #[error("token expired")]
    TokenExpired,

    /// Refresh-token record has `revoked_at` set.
    #[error("token revoked")]
    TokenRevoked,

    /// No refresh-token record for the presented value.
    #[error("token not found")]
    TokenNotFound,

    /// No usable `Authorization` header on the request.
    #[error("missing authorization header")]
    MissingHeader,

    /// Authenticated principal does not own the resource.
    #[error("not the resource owner")]
    Forbidden,

    /// bcrypt failure (corrupt digest or internal library error).
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// JWT encoding failure.
    #[error("token signing failed: {0}")]
    Signing(String),

    /// OS random source failure while generating an opaque token.
    #[error("token generation failed: {0}")]
    TokenGeneration(String),

    /// Refresh-token storage fault.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl AuthError {
    /// True for failures a client can cure by re-authenticating, as opposed
    /// to server-side faults.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            AuthError::CredentialInvalid
                | AuthError::TokenMalformed
                | AuthError::SignatureInvalid
                | AuthError::TokenExpired
                | AuthError::TokenRevoked
                | AuthError::TokenNotFound
                | AuthError::MissingHeader
        )
    }

    /// Collapses the internal taxonomy into the boundary response policy.
    ///
    /// The specific kind is logged here and never surfaced to the caller.
    pub fn into_app_error(self) -> AppError {
        match self {
            err if err.is_unauthorized() => {
                tracing::warn!(reason = %err, "authentication rejected");
                AppError::unauthorized("Unauthorized")
            }
            AuthError::Forbidden => AppError::forbidden("Forbidden"),
            err => {
                tracing::error!(error = %err, "auth subsystem failure");
                AppError::internal_error("Something went wrong")
            }
        }
    }
}
