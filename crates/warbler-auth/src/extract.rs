//! `Authorization` header credential extraction.
//!
//! Two schemes share one header: `Bearer <token>` for access and refresh
//! tokens, `ApiKey <key>` for service-to-service webhook calls.
//!
//! Extraction is deliberately lenient: a header carrying a value without the
//! expected prefix is returned as-is rather than rejected. Extracted values
//! are therefore not guaranteed well-formed; validation happens downstream.

use axum::http::{HeaderMap, header};

use crate::error::AuthError;

const BEARER_PREFIX: &str = "Bearer ";
const API_KEY_PREFIX: &str = "ApiKey ";

fn scheme_token(headers: &HeaderMap, prefix: &str) -> Result<String, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::MissingHeader)?;

    let token = value.strip_prefix(prefix).unwrap_or(value);
    Ok(token.trim().to_string())
}

/// Extracts a bearer token from the `Authorization` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    scheme_token(headers, BEARER_PREFIX)
}

/// Extracts an API key from the `Authorization` header.
pub fn api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    scheme_token(headers, API_KEY_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_strips_prefix() {
        let headers = headers_with_authorization("Bearer abc123");
        assert_eq!(bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn test_bearer_token_trims_whitespace() {
        let headers = headers_with_authorization("Bearer   abc123  ");
        assert_eq!(bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MissingHeader)
        ));
    }

    #[test]
    fn test_bearer_token_empty_header() {
        let headers = headers_with_authorization("");
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MissingHeader)
        ));
    }

    #[test]
    fn test_bearer_token_without_prefix_passes_through() {
        // Lenient by design: raw value returned unmodified.
        let headers = headers_with_authorization("abc123");
        assert_eq!(bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn test_api_key_strips_prefix() {
        let headers = headers_with_authorization("ApiKey k-123");
        assert_eq!(api_key(&headers).unwrap(), "k-123");
    }

    #[test]
    fn test_api_key_missing_header() {
        let headers = HeaderMap::new();
        assert!(matches!(api_key(&headers), Err(AuthError::MissingHeader)));
    }

    #[test]
    fn test_prefixes_are_scheme_specific() {
        // A Bearer header read as an ApiKey keeps the Bearer prefix text,
        // so the downstream key comparison fails as it should.
        let headers = headers_with_authorization("Bearer abc123");
        assert_eq!(api_key(&headers).unwrap(), "Bearer abc123");
    }
}
