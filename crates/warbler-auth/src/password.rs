//! Password hashing and verification.
//!
//! bcrypt with the library's default cost; the salt is embedded in the digest
//! and comparison is constant-time inside the library. Plaintext passwords
//! are never persisted or logged.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::error::AuthError;

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    hash(password, DEFAULT_COST).map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Checks `password` against a stored digest.
///
/// A wrong password is `Ok(false)`; an error means the digest itself is
/// unusable or the library failed internally.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, AuthError> {
    verify(password, hashed).map_err(|e| AuthError::Hashing(e.to_string()))
}
