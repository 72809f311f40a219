//! Request and response DTOs for the OTP relay endpoints

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /otp`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitOtpRequest {
    /// Phone number the SMS was addressed to
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,

    /// Full text of the forwarded SMS
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Response body for a successful `POST /otp`
#[derive(Debug, Serialize)]
pub struct SubmitOtpResponse {
    /// Always "stored" on success
    pub status: String,
}

impl SubmitOtpResponse {
    pub fn stored() -> Self {
        Self {
            status: "stored".to_string(),
        }
    }
}

/// Query parameters for `GET /otp`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RetrieveOtpQuery {
    /// Phone number to look up
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
}

/// A single delivered OTP
#[derive(Debug, Serialize)]
pub struct OtpMessage {
    /// The extracted verification code
    pub otp: String,
}

/// Response body for `GET /otp`
///
/// The same shape is returned whether or not a code was available; an
/// empty `messages` list with `count: 0` means nothing to deliver.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveOtpResponse {
    /// Whether the lookup itself succeeded
    pub ok: bool,

    /// Number of codes delivered (0 or 1)
    pub count: usize,

    /// The delivered codes, at most one
    pub messages: Vec<OtpMessage>,

    /// When the lookup happened, ISO 8601
    pub checked_at: String,
}

impl RetrieveOtpResponse {
    /// Build the response for a delivered code
    pub fn delivered(otp: String) -> Self {
        Self {
            ok: true,
            count: 1,
            messages: vec![OtpMessage { otp }],
            checked_at: Utc::now().to_rfc3339(),
        }
    }

    /// Build the response for an empty result
    pub fn empty() -> Self {
        Self {
            ok: true,
            count: 0,
            messages: Vec::new(),
            checked_at: Utc::now().to_rfc3339(),
        }
    }
}
