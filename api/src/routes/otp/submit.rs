//! Submit endpoint for forwarded SMS messages

use actix_web::{web, HttpResponse};
use tracing::debug;
use validator::Validate;

use relay_core::services::relay::OtpStoreTrait;
use relay_shared::utils::phone::mask_phone_number;

use crate::dto::{SubmitOtpRequest, SubmitOtpResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::otp::AppState;

/// Handle `POST /otp`
///
/// Accepts a forwarded SMS, extracts the verification code and parks it
/// for the downstream consumer. The code never appears in the response.
pub async fn submit_otp<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<SubmitOtpRequest>,
) -> HttpResponse
where
    S: OtpStoreTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    debug!(
        phone = %mask_phone_number(&request.phone),
        "Received forwarded SMS"
    );

    match state
        .relay_service
        .submit(&request.phone, &request.message)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(SubmitOtpResponse::stored()),
        Err(err) => domain_error_response(&err),
    }
}
