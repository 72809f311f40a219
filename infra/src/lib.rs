//! # Infrastructure Layer
//!
//! Concrete implementations of the external collaborators the relay core
//! depends on. Today that is a single concern: the TTL-capable key-value
//! store (Redis), exposed to the core through
//! [`relay_core::services::relay::OtpStoreTrait`].

use thiserror::Error;

/// Cache module - Redis client and the store trait implementation
pub mod cache;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bounded per-operation timeout elapsed
    #[error("Timed out waiting for the store to answer '{operation}'")]
    Timeout { operation: String },
}
