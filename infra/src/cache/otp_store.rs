//! Redis-backed implementation of the OTP store contract
//!
//! Submit maps to a plain `SET ... EX`. Consumption is the delicate part:
//! reading the record, checking `used` and rewriting it must be atomic or
//! two concurrent consumers can both observe `used == false` and both
//! walk away with the OTP. The check-and-set therefore runs server-side
//! as a Lua script; Redis executes scripts atomically, which closes the
//! race without any client-side locking.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use redis::Script;
use tracing::debug;

use relay_core::services::relay::OtpStoreTrait;

use crate::cache::RedisClient;
use crate::InfrastructureError;

// Atomic consume: return nil for absent/malformed/used records, otherwise
// flip `used`, rewrite with a fresh TTL and return the pre-flip value.
// Malformed records (including out-of-range codes) are left unmutated for
// the TTL to reap.
static CONSUME_SCRIPT: Lazy<Script> = Lazy::new(|| {
    Script::new(
        r#"
local raw = redis.call('GET', KEYS[1])
if not raw then
  return nil
end
local ok, record = pcall(cjson.decode, raw)
if not ok or type(record) ~= 'table' then
  return nil
end
if type(record.otp) ~= 'string' or record.used ~= false then
  return nil
end
if not string.match(record.otp, '^%d%d%d%d%d?%d?%d?%d?$') then
  return nil
end
record.used = true
redis.call('SET', KEYS[1], cjson.encode(record), 'EX', tonumber(ARGV[1]))
return raw
"#,
    )
});

/// OTP store backed by Redis
#[derive(Clone)]
pub struct RedisOtpStore {
    /// Redis client for store operations
    client: RedisClient,
}

impl RedisOtpStore {
    /// Create a new Redis-backed OTP store
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    async fn consume_raw(
        &self,
        key: &str,
        ttl_seconds: u64,
    ) -> Result<Option<String>, InfrastructureError> {
        debug!("Consuming record at key '{}'", key);

        self.client
            .execute_with_retry("consume_unused", |mut conn| {
                let key = key.to_string();
                let ttl = ttl_seconds;

                Box::pin(async move {
                    CONSUME_SCRIPT
                        .key(key)
                        .arg(ttl)
                        .invoke_async::<_, Option<String>>(&mut conn)
                        .await
                })
            })
            .await
    }
}

#[async_trait]
impl OtpStoreTrait for RedisOtpStore {
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), String> {
        self.client
            .set_with_expiry(key, value, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn consume_unused(&self, key: &str, ttl_seconds: u64) -> Result<Option<String>, String> {
        self.consume_raw(key, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }
}
