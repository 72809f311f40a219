//! Cache module for Redis-backed storage
//!
//! Provides the Redis client (connection management, bounded timeouts,
//! retry with backoff) and the Redis implementation of the core's OTP
//! store contract.

pub mod otp_store;
pub mod redis_client;

#[cfg(test)]
mod tests;

pub use otp_store::RedisOtpStore;
pub use redis_client::RedisClient;

// Re-export commonly used types
pub use relay_shared::config::cache::CacheConfig;
