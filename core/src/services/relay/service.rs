//! Main relay service implementation

use std::sync::Arc;

use relay_shared::utils::phone::{is_valid_phone, mask_phone_number};

use crate::domain::OtpRecord;
use crate::errors::{DomainError, DomainResult, RelayError};
use crate::services::extraction::extract_otp;

use super::config::RelayConfig;
use super::traits::OtpStoreTrait;

/// Key prefix for mailbox entries in the store
const OTP_KEY_PREFIX: &str = "otp";

/// Relay service executing the set-once/consume-once protocol
pub struct RelayService<S: OtpStoreTrait> {
    /// Key-value store the mailboxes live in
    store: Arc<S>,
    /// Service configuration
    config: RelayConfig,
}

impl<S: OtpStoreTrait> RelayService<S> {
    /// Create a new relay service
    pub fn new(store: Arc<S>, config: RelayConfig) -> Self {
        Self { store, config }
    }

    /// Format the store key for a phone number's mailbox.
    ///
    /// The phone string is used exactly as supplied; normalizing it is
    /// the forwarder's responsibility, and submit/retrieve must agree.
    fn record_key(phone: &str) -> String {
        format!("{}:{}", OTP_KEY_PREFIX, phone)
    }

    /// Submit a forwarded SMS for a phone number.
    ///
    /// Validates the phone, extracts the OTP from the message text and
    /// parks a fresh record in the mailbox, unconditionally overwriting
    /// any previous record and resetting the TTL. The OTP value is not
    /// returned; only the eventual consumer sees it.
    pub async fn submit(&self, phone: &str, message: &str) -> DomainResult<()> {
        if !is_valid_phone(phone) {
            return Err(RelayError::InvalidPhone.into());
        }

        let otp = extract_otp(message).ok_or(RelayError::OtpNotFound)?;
        let record = OtpRecord::new(otp);
        let encoded = serde_json::to_string(&record).map_err(|e| DomainError::Internal {
            message: format!("Failed to serialize OTP record: {}", e),
        })?;

        let key = Self::record_key(phone);
        self.store
            .set_with_expiry(&key, &encoded, self.config.otp_ttl_seconds)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    event = "otp_store_failed",
                    "Failed to store OTP record"
                );
                DomainError::Unavailable {
                    message: format!("OTP store unavailable: {}", e),
                }
            })?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            event = "otp_stored",
            ttl_seconds = self.config.otp_ttl_seconds,
            "Stored extracted OTP"
        );

        Ok(())
    }

    /// Retrieve and consume the pending OTP for a phone number.
    ///
    /// Returns `Ok(Some(otp))` to exactly one caller per stored record;
    /// absent, expired, already-consumed and malformed records all come
    /// back as `Ok(None)`. Consumption rewrites the record with a fresh
    /// TTL so the `used` marker outlives the delivery by the full window.
    pub async fn retrieve(&self, phone: &str) -> DomainResult<Option<String>> {
        if !is_valid_phone(phone) {
            return Err(RelayError::InvalidPhone.into());
        }

        let key = Self::record_key(phone);
        let raw = self
            .store
            .consume_unused(&key, self.config.otp_ttl_seconds)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    event = "otp_fetch_failed",
                    "Failed to read OTP record"
                );
                DomainError::Unavailable {
                    message: format!("OTP store unavailable: {}", e),
                }
            })?;

        let Some(raw) = raw else {
            tracing::debug!(
                phone = %mask_phone_number(phone),
                event = "otp_not_available",
                "No unconsumed OTP for phone"
            );
            return Ok(None);
        };

        // Stale or partially-written data degrades to "nothing available"
        let record = match serde_json::from_str::<OtpRecord>(&raw) {
            Ok(record) if record.is_well_formed() => record,
            _ => {
                tracing::warn!(
                    phone = %mask_phone_number(phone),
                    event = "otp_record_malformed",
                    "Stored OTP record failed validation, treating as absent"
                );
                return Ok(None);
            }
        };

        tracing::info!(
            phone = %mask_phone_number(phone),
            event = "otp_consumed",
            "Delivered OTP to consumer"
        );

        Ok(Some(record.otp))
    }
}

#[cfg(test)]
impl<S: OtpStoreTrait> RelayService<S> {
    pub(crate) fn key_for(phone: &str) -> String {
        Self::record_key(phone)
    }
}
