//! Application factory
//!
//! Assembles routes, extractor configuration and middleware into an
//! actix-web `App`. Generic over the store so integration tests can run
//! the full HTTP stack against an in-memory fake.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{error::InternalError, middleware::Logger, web, App, HttpResponse};

use relay_core::services::relay::OtpStoreTrait;
use relay_shared::errors::{error_codes, ErrorResponse};

use crate::middleware::create_cors;
use crate::routes::health::health_check;
use crate::routes::otp::{retrieve_otp, submit_otp, AppState};

/// Build the actix-web application with all routes and middleware
pub fn create_app<S>(
    app_state: web::Data<AppState<S>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: OtpStoreTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(json_config())
        .app_data(query_config())
        .wrap(Logger::default())
        .wrap(create_cors())
        .route("/health", web::get().to(health_check))
        .route("/otp", web::post().to(submit_otp::<S>))
        .route("/otp", web::get().to(retrieve_otp::<S>))
        .default_service(web::route().to(not_found))
}

/// Malformed or non-JSON bodies become a structured 400 instead of the
/// default plain-text error
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid request body: {}", err);
        InternalError::from_response(
            err,
            HttpResponse::BadRequest()
                .json(ErrorResponse::new(error_codes::BAD_REQUEST, message)),
        )
        .into()
    })
}

/// Missing or malformed query parameters become a structured 400
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid query parameters: {}", err);
        InternalError::from_response(
            err,
            HttpResponse::BadRequest()
                .json(ErrorResponse::new(error_codes::BAD_REQUEST, message)),
        )
        .into()
    })
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
