//! # Warbler DB
//!
//! Database pool and storage implementations for the Warbler API.
//!
//! This crate provides the PostgreSQL connection pool plus
//! [`PgRefreshTokenStore`], the sqlx-backed implementation of the
//! refresh-token storage interface defined in `warbler-auth`.
//!
//! # Example
//!
//! ```ignore
//! use warbler_db::{init_db_pool, PgRefreshTokenStore};
//!
//! let pool = init_db_pool().await;
//! let store = PgRefreshTokenStore::new(pool.clone());
//! ```

use std::env;

pub mod refresh_tokens;

pub use refresh_tokens::PgRefreshTokenStore;

/// Initializes a PostgreSQL connection pool.
///
/// Reads the database URL from the `DATABASE_URL` environment variable. The
/// returned pool is cheaply cloneable and shared across request tasks.
///
/// # Panics
///
/// Panics if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
pub async fn init_db_pool() -> sqlx::PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    sqlx::PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
