//! Health check endpoint

use actix_web::{HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Liveness probe. Reports the service as up without touching the store,
/// so it stays green even while Redis is flapping.
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "otp-relay",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
