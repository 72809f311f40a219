//! The stored OTP record entity
//!
//! One record per phone number lives in the key-value store under
//! `otp:<phone>`, encoded as JSON with camelCase field names so records
//! round-trip against values written by earlier deployments of the relay.
//! Expiry is governed entirely by the store's TTL; `created_at` is
//! informational.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Minimum OTP length in digits
pub const OTP_MIN_LEN: usize = 4;

/// Maximum OTP length in digits
pub const OTP_MAX_LEN: usize = 8;

/// Fixed time-to-live for a stored record, in seconds (2 minutes).
/// Applied on every write: submit resets it, consumption rewrites it.
pub const OTP_TTL_SECONDS: u64 = 120;

/// A one-time password parked for a single consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpRecord {
    /// The extracted OTP digits
    pub otp: String,

    /// Creation timestamp in milliseconds since epoch
    pub created_at: i64,

    /// Whether the OTP has already been delivered
    pub used: bool,
}

impl OtpRecord {
    /// Create a fresh, unconsumed record for a just-extracted OTP
    pub fn new(otp: String) -> Self {
        Self {
            otp,
            created_at: Utc::now().timestamp_millis(),
            used: false,
        }
    }

    /// Structural check applied when a record is read back from the
    /// store: 4-8 ASCII digits. Anything else is treated as absent.
    pub fn is_well_formed(&self) -> bool {
        (OTP_MIN_LEN..=OTP_MAX_LEN).contains(&self.otp.len())
            && self.otp.chars().all(|c| c.is_ascii_digit())
    }
}
