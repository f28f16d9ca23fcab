//! Middleware and extractors for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::AuthUser`] extractor validates the JWT and yields the
//!    authenticated user's ID
//! 3. Handlers that mutate owned resources additionally run the ownership
//!    guard before touching anything

pub mod auth;
