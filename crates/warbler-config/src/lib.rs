//! # Warbler Config
//!
//! Configuration types for the Warbler API.
//!
//! This crate provides configuration structures loaded from environment
//! variables:
//!
//! - [`jwt`]: JWT authentication configuration
//! - [`server`]: Server bind address and platform environment
//! - [`webhook`]: Payment-provider webhook API key
//!
//! # Example
//!
//! ```ignore
//! use warbler_config::{JwtConfig, ServerConfig, WebhookConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! let webhook_config = WebhookConfig::from_env();
//! ```

pub mod jwt;
pub mod server;
pub mod webhook;

// Re-export commonly used types at crate root
pub use jwt::JwtConfig;
pub use server::ServerConfig;
pub use webhook::WebhookConfig;
