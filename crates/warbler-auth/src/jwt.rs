//! Access-token issue and validation.
//!
//! Access tokens are HS256-signed JWTs carrying `{sub, iat, exp}`. They are
//! purely computational: nothing is persisted, and validity at any instant is
//! derived entirely from the claimed expiry against the wall clock.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use warbler_config::JwtConfig;

use crate::claims::Claims;
use crate::error::AuthError;

/// Creates a signed access token for `user_id`.
///
/// Expiry is `now + jwt_config.access_token_expiry` seconds. Fails with
/// [`AuthError::Signing`] only on an internal encoding failure.
pub fn create_access_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let exp = now + jwt_config.access_token_expiry;

    let claims = Claims {
        sub: user_id.to_string(),
        exp: exp as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AuthError::Signing(e.to_string()))
}

/// Verifies an access token and returns its subject.
///
/// The signature is checked before any claim is trusted. Expiry is enforced
/// with zero leeway: a token is rejected from the instant the current time
/// reaches its claimed expiry, even with a valid signature.
///
/// # Errors
///
/// - [`AuthError::TokenExpired`] when `now >= exp`
/// - [`AuthError::SignatureInvalid`] when signed with a different secret
/// - [`AuthError::TokenMalformed`] for anything that does not decode
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Uuid, AuthError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidSignature => AuthError::SignatureInvalid,
        _ => AuthError::TokenMalformed,
    })?;

    // The library's expiry check is strict (`exp < now`), which would accept
    // the token for the whole second at which `now == exp`. Validity here is
    // `now < exp`, matching the refresh-token status check.
    if Utc::now().timestamp() >= claims.exp as i64 {
        return Err(AuthError::TokenExpired);
    }

    Uuid::parse_str(&claims.sub).map_err(|_| AuthError::TokenMalformed)
}
