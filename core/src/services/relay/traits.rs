//! Trait for the TTL-capable key-value store the relay runs against

use async_trait::async_trait;

/// Contract against the external key-value store.
///
/// `Err` means the store could not be reached (connectivity, timeout) and
/// is never used for "key absent" - that is `Ok(None)`.
#[async_trait]
pub trait OtpStoreTrait: Send + Sync {
    /// Unconditionally overwrite `key` with `value`, resetting its expiry
    /// to `ttl_seconds` from now.
    async fn set_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64)
        -> Result<(), String>;

    /// Atomically consume the record at `key`: if it holds a well-formed,
    /// unused record, rewrite it in place with `used = true` and a fresh
    /// `ttl_seconds` expiry, and return the record as it was before the
    /// flip. Absent, already-used and malformed records all yield
    /// `Ok(None)`.
    ///
    /// Atomicity is the implementor's obligation: concurrent calls for
    /// the same key must hand the record to at most one of them.
    async fn consume_unused(&self, key: &str, ttl_seconds: u64) -> Result<Option<String>, String>;
}
