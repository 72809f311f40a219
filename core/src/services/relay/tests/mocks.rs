//! Mock store for testing the relay service

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::services::relay::traits::OtpStoreTrait;

/// In-memory store mock.
///
/// `consume_unused` mirrors the atomic check-and-set semantics of the
/// Redis implementation: the whole read-check-flip runs under one lock,
/// so interleaved callers observe exactly-once delivery. Expiry is
/// simulated explicitly via [`MockOtpStore::expire`].
pub struct MockOtpStore {
    /// key -> (raw record JSON, last TTL written for the key)
    pub entries: Arc<Mutex<HashMap<String, (String, u64)>>>,
    pub should_fail: bool,
}

impl MockOtpStore {
    pub fn new(should_fail: bool) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
        }
    }

    /// Simulate TTL expiry: the key simply stops existing
    pub fn expire(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }

    /// Seed a raw value directly, bypassing submit (stale/corrupt data)
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (raw.to_string(), 0));
    }

    pub fn last_ttl(&self, key: &str) -> Option<u64> {
        self.entries.lock().unwrap().get(key).map(|(_, ttl)| *ttl)
    }
}

#[async_trait]
impl OtpStoreTrait for MockOtpStore {
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), String> {
        if self.should_fail {
            return Err("connection refused".to_string());
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), ttl_seconds));
        Ok(())
    }

    async fn consume_unused(&self, key: &str, ttl_seconds: u64) -> Result<Option<String>, String> {
        if self.should_fail {
            return Err("connection refused".to_string());
        }

        let mut entries = self.entries.lock().unwrap();
        let raw = match entries.get(key) {
            Some((raw, _)) => raw.clone(),
            None => return Ok(None),
        };

        let Ok(mut record) = serde_json::from_str::<serde_json::Value>(&raw) else {
            return Ok(None);
        };
        // Same well-formedness gate as the real store: 4-8 digit code,
        // unused. Anything else is left unmutated.
        let code_ok = record
            .get("otp")
            .and_then(|v| v.as_str())
            .map_or(false, |otp| {
                (4..=8).contains(&otp.len()) && otp.bytes().all(|b| b.is_ascii_digit())
            });
        if !code_ok {
            return Ok(None);
        }
        match record.get("used") {
            Some(serde_json::Value::Bool(false)) => {}
            _ => return Ok(None),
        }

        record["used"] = serde_json::Value::Bool(true);
        entries.insert(key.to_string(), (record.to_string(), ttl_seconds));
        Ok(Some(raw))
    }
}
