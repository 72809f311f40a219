//! Redis cache client implementation
//!
//! Thin async client over a multiplexed connection with retry logic and
//! bounded per-operation timeouts. Every command either completes within
//! the configured response timeout or fails; nothing blocks indefinitely
//! waiting on the store.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisError, RedisResult};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, warn};

use relay_shared::config::cache::CacheConfig;

use crate::InfrastructureError;

/// Default maximum retry attempts per operation
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default base delay between retries in milliseconds
const DEFAULT_RETRY_DELAY_MS: u64 = 100;

/// Backoff ceiling in milliseconds
const MAX_BACKOFF_MS: u64 = 5000;

/// Redis client with retry logic and bounded timeouts
#[derive(Clone)]
pub struct RedisClient {
    /// Multiplexed connection; per-operation handles are cheap clones
    connection: MultiplexedConnection,
    /// Configuration used to create this client
    config: CacheConfig,
    /// Maximum number of attempts per operation
    max_retries: u32,
    /// Base delay between retries (exponential backoff)
    retry_delay_ms: u64,
}

impl RedisClient {
    /// Create a new Redis client from configuration
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        Self::new_with_retry_config(config, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_MS).await
    }

    /// Create a new Redis client with custom retry configuration
    pub async fn new_with_retry_config(
        config: CacheConfig,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, InfrastructureError> {
        info!("Creating Redis client for {}", mask_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection = Self::create_connection_with_retry(
            client,
            config.connection_timeout,
            max_retries,
            retry_delay_ms,
        )
        .await?;

        info!("Redis client created successfully");

        Ok(Self {
            connection,
            config,
            max_retries,
            retry_delay_ms,
        })
    }

    /// Establish the multiplexed connection, bounded by the connect
    /// timeout, retrying with exponential backoff
    async fn create_connection_with_retry(
        client: Client,
        connection_timeout: u64,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            let connect = timeout(
                Duration::from_secs(connection_timeout),
                client.get_multiplexed_async_connection(),
            )
            .await;

            match connect {
                Ok(Ok(connection)) => {
                    info!("Successfully connected to Redis");
                    return Ok(connection);
                }
                Ok(Err(e)) if attempts < max_retries => {
                    warn!(
                        "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(MAX_BACKOFF_MS);
                }
                Ok(Err(e)) => {
                    error!("Failed to connect to Redis after {} attempts: {}", attempts, e);
                    return Err(InfrastructureError::Cache(e));
                }
                Err(_) if attempts < max_retries => {
                    warn!(
                        "Connection to Redis timed out after {}s (attempt {}/{}). Retrying...",
                        connection_timeout, attempts, max_retries
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(MAX_BACKOFF_MS);
                }
                Err(_) => {
                    error!(
                        "Connection to Redis timed out after {} attempts",
                        attempts
                    );
                    return Err(InfrastructureError::Timeout {
                        operation: "connect".to_string(),
                    });
                }
            }
        }
    }

    /// Set a value with expiration time (`SET key value EX ttl`)
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!("Setting key '{}' with expiry {}s", key, expiry_seconds);

        self.execute_with_retry("set_with_expiry", |mut conn| {
            let key = key.to_string();
            let value = value.to_string();
            let expiry = expiry_seconds;

            Box::pin(async move { conn.set_ex::<_, _, ()>(key, value, expiry).await })
        })
        .await
    }

    /// Get a value, or `None` if the key is absent or expired
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!("Getting key '{}'", key);

        self.execute_with_retry("get", |mut conn| {
            let key = key.to_string();

            Box::pin(async move { conn.get::<_, Option<String>>(key).await })
        })
        .await
    }

    /// Check connectivity with a PING
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        debug!("Performing Redis health check");

        let response: String = self
            .execute_with_retry("ping", |mut conn| {
                Box::pin(async move { redis::cmd("PING").query_async::<_, String>(&mut conn).await })
            })
            .await?;

        Ok(response == "PONG")
    }

    /// Execute a Redis operation with bounded timeout and automatic retry.
    ///
    /// Each attempt runs against a fresh handle to the multiplexed
    /// connection and must finish within the configured response timeout.
    /// Transient errors and timeouts are retried with exponential backoff
    /// up to `max_retries`; everything else fails immediately.
    pub(crate) async fn execute_with_retry<F, T>(
        &self,
        op_name: &str,
        operation: F,
    ) -> Result<T, InfrastructureError>
    where
        F: Fn(
            MultiplexedConnection,
        ) -> Pin<Box<dyn Future<Output = RedisResult<T>> + Send>>,
    {
        let mut attempts = 0;
        let mut delay = self.retry_delay_ms;
        let response_timeout = Duration::from_secs(self.config.response_timeout);

        loop {
            attempts += 1;
            let conn = self.connection.clone();

            match timeout(response_timeout, operation(conn)).await {
                Ok(Ok(value)) => return Ok(value),
                Ok(Err(e)) if attempts < self.max_retries && is_retriable_error(&e) => {
                    warn!(
                        "Redis operation '{}' failed (attempt {}/{}): {}. Retrying in {}ms...",
                        op_name, attempts, self.max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(MAX_BACKOFF_MS);
                }
                Ok(Err(e)) => {
                    error!(
                        "Redis operation '{}' failed after {} attempts: {}",
                        op_name, attempts, e
                    );
                    return Err(InfrastructureError::Cache(e));
                }
                Err(_) if attempts < self.max_retries => {
                    warn!(
                        "Redis operation '{}' timed out after {:?} (attempt {}/{}). Retrying...",
                        op_name, response_timeout, attempts, self.max_retries
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(MAX_BACKOFF_MS);
                }
                Err(_) => {
                    error!(
                        "Redis operation '{}' timed out after {} attempts",
                        op_name, attempts
                    );
                    return Err(InfrastructureError::Timeout {
                        operation: op_name.to_string(),
                    });
                }
            }
        }
    }
}

/// Check if a Redis error is transient and worth retrying
pub(crate) fn is_retriable_error(error: &RedisError) -> bool {
    matches!(
        error.kind(),
        redis::ErrorKind::IoError
            | redis::ErrorKind::ClientError
            | redis::ErrorKind::BusyLoadingError
            | redis::ErrorKind::TryAgain
    )
}

/// Mask credentials in a Redis URL before it reaches the logs
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}
