//! # OTP Relay Core
//!
//! Core business logic and domain layer for the OTP relay backend.
//! This crate contains the domain entity (the stored OTP record), the
//! extraction heuristics that pull a one-time password out of free-form
//! SMS text, the consume-once relay service executed against an injected
//! TTL-capable key-value store, and the error types shared by both.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
