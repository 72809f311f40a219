//! Domain error to HTTP response mapping

use actix_web::HttpResponse;
use tracing::error;
use validator::ValidationErrors;

use relay_core::errors::{DomainError, RelayError};
use relay_shared::errors::{error_codes, ErrorResponse};

/// Map a domain error onto the appropriate HTTP status and error body.
///
/// Client mistakes (bad phone, no extractable code) come back as 400 so the
/// forwarder notices immediately; a dead store is 503 so callers can retry.
pub fn domain_error_response(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::Relay(RelayError::InvalidPhone) => HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::PHONE_INVALID, err.to_string())),
        DomainError::Relay(RelayError::OtpNotFound) => HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::OTP_NOT_FOUND, err.to_string())),
        DomainError::Unavailable { message } => {
            error!("Store unavailable: {}", message);
            HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
                error_codes::STORE_UNAVAILABLE,
                "OTP store is unreachable, try again shortly",
            ))
        }
        DomainError::Internal { message } => {
            error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            ))
        }
    }
}

/// Turn validator failures into a 400 with per-field details
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Validation failed");

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field))
            })
            .collect();
        response = response.add_detail(field, serde_json::json!(messages));
    }

    HttpResponse::BadRequest().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_invalid_phone_maps_to_400() {
        let resp = domain_error_response(&DomainError::Relay(RelayError::InvalidPhone));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_otp_not_found_maps_to_400() {
        let resp = domain_error_response(&DomainError::Relay(RelayError::OtpNotFound));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unavailable_maps_to_503() {
        let resp = domain_error_response(&DomainError::Unavailable {
            message: "connection refused".to_string(),
        });
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let resp = domain_error_response(&DomainError::Internal {
            message: "encode failure".to_string(),
        });
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
