//! Shared utilities and common types for the OTP relay server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Utility functions (phone validation, masking)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{CacheConfig, ConfigError, ServerConfig};
pub use errors::{error_codes, ErrorResponse};
pub use utils::phone;
