//! Errors specific to the relay operations
//!
//! These are the deterministic, non-retryable failures a caller can fix
//! by sending a better request. Store connectivity problems are not here;
//! they surface as `DomainError::Unavailable`.

use thiserror::Error;

/// Relay operation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RelayError {
    #[error("Invalid phone number format")]
    InvalidPhone,

    #[error("No valid OTP found in message (must be 4-8 digits)")]
    OtpNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_relay_error_messages() {
        assert_eq!(
            RelayError::OtpNotFound.to_string(),
            "No valid OTP found in message (must be 4-8 digits)"
        );
    }

    #[test]
    fn test_relay_error_bridges_to_domain_error() {
        let err: DomainError = RelayError::InvalidPhone.into();
        assert_eq!(err.to_string(), "Invalid phone number format");
    }
}
