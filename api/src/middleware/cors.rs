//! CORS middleware configuration
//!
//! Origins are taken from the `ALLOWED_ORIGINS` environment variable as a
//! comma-separated list. When unset, any origin is accepted, which suits
//! a relay typically deployed behind a private network boundary.

use actix_cors::Cors;
use actix_web::http::header;
use tracing::info;

/// Build the CORS middleware from the environment
pub fn create_cors() -> Cors {
    match std::env::var("ALLOWED_ORIGINS") {
        Ok(origins) if !origins.trim().is_empty() => {
            info!("CORS restricted to configured origins");
            let mut cors = Cors::default()
                .allowed_methods(vec!["GET", "POST"])
                .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
                .max_age(3600);
            for origin in origins.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                cors = cors.allowed_origin(origin);
            }
            cors
        }
        _ => Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600),
    }
}
