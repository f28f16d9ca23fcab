//! # Warbler Core
//!
//! Core types and utilities for the Warbler API.
//!
//! This crate provides foundational pieces used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`profanity`]: Post body cleaning utility
//!
//! # Example
//!
//! ```ignore
//! use warbler_core::AppError;
//! use warbler_core::profanity::clean_body;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Post not found"));
//! let cleaned = clean_body("what a kerfuffle");
//! ```

pub mod errors;
pub mod profanity;

// Re-export commonly used types at crate root
pub use errors::AppError;
