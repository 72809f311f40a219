//! Retrieve endpoint for the downstream consumer

use actix_web::{web, HttpResponse};
use validator::Validate;

use relay_core::services::relay::OtpStoreTrait;

use crate::dto::{RetrieveOtpQuery, RetrieveOtpResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::otp::AppState;

/// Handle `GET /otp?phone=<number>`
///
/// Consumes the pending code for the phone if one exists. A consumed,
/// expired or never-stored code yields the same 200 empty-result body,
/// so pollers cannot distinguish "never sent" from "already taken".
pub async fn retrieve_otp<S>(
    state: web::Data<AppState<S>>,
    query: web::Query<RetrieveOtpQuery>,
) -> HttpResponse
where
    S: OtpStoreTrait + 'static,
{
    if let Err(errors) = query.validate() {
        return validation_error_response(&errors);
    }

    match state.relay_service.retrieve(&query.phone).await {
        Ok(Some(otp)) => HttpResponse::Ok().json(RetrieveOtpResponse::delivered(otp)),
        Ok(None) => HttpResponse::Ok().json(RetrieveOtpResponse::empty()),
        Err(err) => domain_error_response(&err),
    }
}
