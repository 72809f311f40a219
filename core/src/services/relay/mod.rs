//! The OTP relay service: consume-once mailbox semantics per phone number
//!
//! One phone number maps to one single-slot mailbox in the external
//! key-value store. Submit parks a freshly extracted OTP there (last
//! writer wins); Retrieve hands it to exactly one caller. Expiry is the
//! store's TTL; the service never deletes.

pub mod config;
pub mod service;
pub mod traits;

#[cfg(test)]
mod tests;

pub use config::RelayConfig;
pub use service::RelayService;
pub use traits::OtpStoreTrait;
