//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const PHONE_INVALID: &str = "PHONE_INVALID";
    pub const OTP_NOT_FOUND: &str = "OTP_NOT_FOUND";
    pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let response = ErrorResponse::new(error_codes::PHONE_INVALID, "Invalid phone number format");
        assert_eq!(response.error, "PHONE_INVALID");
        assert_eq!(response.message, "Invalid phone number format");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_add_detail() {
        let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("field", "message");
        let details = response.details.expect("details should be set");
        assert_eq!(details["field"], "message");
    }

    #[test]
    fn test_details_omitted_from_json_when_absent() {
        let response = ErrorResponse::new(error_codes::BAD_REQUEST, "bad request");
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
    }
}
