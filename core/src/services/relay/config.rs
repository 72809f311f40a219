//! Relay service configuration

use crate::domain::OTP_TTL_SECONDS;

/// Configuration for the relay service
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Time-to-live applied on every write to a mailbox key, in seconds
    pub otp_ttl_seconds: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            otp_ttl_seconds: OTP_TTL_SECONDS,
        }
    }
}
