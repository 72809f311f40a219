//! OTP relay server binary
//!
//! Accepts forwarded SMS messages from an upstream forwarder, extracts
//! the verification code and hands it to a downstream consumer exactly
//! once via a TTL-bounded Redis mailbox.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use relay_api::app::create_app;
use relay_api::routes::otp::AppState;
use relay_core::services::relay::{RelayConfig, RelayService};
use relay_infra::cache::{RedisClient, RedisOtpStore};
use relay_shared::config::{CacheConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting OTP relay server");

    // Configuration problems abort startup; a relay running without its
    // store would accept traffic it can never serve.
    let server_config = ServerConfig::from_env().map_err(startup_error)?;
    let cache_config = CacheConfig::from_env().map_err(startup_error)?;

    let redis_client = RedisClient::new(cache_config).await.map_err(startup_error)?;
    let otp_store = Arc::new(RedisOtpStore::new(redis_client));
    let relay_service = Arc::new(RelayService::new(otp_store, RelayConfig::default()));
    let app_state = web::Data::new(AppState::new(relay_service));

    let bind_address = server_config.bind_address();
    info!("Listening on {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}

fn startup_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
}
