//! Relay service behavior tests

use std::sync::Arc;

use crate::errors::{DomainError, RelayError};
use crate::services::relay::config::RelayConfig;
use crate::services::relay::service::RelayService;

use super::mocks::MockOtpStore;

const PHONE: &str = "15551234567";

fn service_with_store() -> (RelayService<MockOtpStore>, Arc<MockOtpStore>) {
    let store = Arc::new(MockOtpStore::new(false));
    let service = RelayService::new(store.clone(), RelayConfig::default());
    (service, store)
}

#[tokio::test]
async fn test_submit_then_retrieve_delivers_exactly_once() {
    let (service, _store) = service_with_store();

    service.submit(PHONE, "Your code: 4821").await.unwrap();

    let first = service.retrieve(PHONE).await.unwrap();
    assert_eq!(first, Some("4821".to_string()));

    let second = service.retrieve(PHONE).await.unwrap();
    assert_eq!(second, None);
}

#[tokio::test]
async fn test_submit_overwrites_prior_unconsumed_record() {
    let (service, _store) = service_with_store();

    service.submit(PHONE, "code: 1111").await.unwrap();
    service.submit(PHONE, "code: 2222").await.unwrap();

    let delivered = service.retrieve(PHONE).await.unwrap();
    assert_eq!(delivered, Some("2222".to_string()));
    assert_eq!(service.retrieve(PHONE).await.unwrap(), None);
}

#[tokio::test]
async fn test_retrieve_after_expiry_returns_nothing() {
    let (service, store) = service_with_store();

    service.submit(PHONE, "Your code: 4821").await.unwrap();
    store.expire(&RelayService::<MockOtpStore>::key_for(PHONE));

    assert_eq!(service.retrieve(PHONE).await.unwrap(), None);
}

#[tokio::test]
async fn test_retrieve_for_unknown_phone_returns_nothing() {
    let (service, _store) = service_with_store();
    assert_eq!(service.retrieve(PHONE).await.unwrap(), None);
}

#[tokio::test]
async fn test_writes_apply_the_fixed_ttl() {
    let (service, store) = service_with_store();
    let key = RelayService::<MockOtpStore>::key_for(PHONE);

    service.submit(PHONE, "Your code: 4821").await.unwrap();
    assert_eq!(store.last_ttl(&key), Some(120));

    // consumption rewrites the record with a fresh TTL
    service.retrieve(PHONE).await.unwrap();
    assert_eq!(store.last_ttl(&key), Some(120));
}

#[tokio::test]
async fn test_malformed_records_degrade_to_nothing_available() {
    let (service, store) = service_with_store();
    let key = RelayService::<MockOtpStore>::key_for(PHONE);

    // not JSON at all
    store.insert_raw(&key, "not-json");
    assert_eq!(service.retrieve(PHONE).await.unwrap(), None);

    // missing otp field
    store.insert_raw(&key, r#"{"createdAt":1700000000000,"used":false}"#);
    assert_eq!(service.retrieve(PHONE).await.unwrap(), None);

    // non-boolean used field
    store.insert_raw(&key, r#"{"otp":"4821","createdAt":1700000000000,"used":"no"}"#);
    assert_eq!(service.retrieve(PHONE).await.unwrap(), None);
}

#[tokio::test]
async fn test_out_of_range_codes_are_left_unmutated() {
    let (service, store) = service_with_store();
    let key = RelayService::<MockOtpStore>::key_for(PHONE);

    let raw = r#"{"otp":"123","createdAt":1700000000000,"used":false}"#;
    store.insert_raw(&key, raw);

    assert_eq!(service.retrieve(PHONE).await.unwrap(), None);

    // the invalid record stays as written for the TTL to reap
    let entries = store.entries.lock().unwrap();
    assert_eq!(entries.get(&key).map(|(r, _)| r.as_str()), Some(raw));
}

#[tokio::test]
async fn test_submit_rejects_invalid_phone() {
    let (service, store) = service_with_store();

    let err = service.submit("123", "Your code: 4821").await.unwrap_err();
    assert!(matches!(err, DomainError::Relay(RelayError::InvalidPhone)));

    // no side effects before validation
    assert!(store.entries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_retrieve_rejects_invalid_phone() {
    let (service, _store) = service_with_store();
    let err = service.retrieve("not-a-phone").await.unwrap_err();
    assert!(matches!(err, DomainError::Relay(RelayError::InvalidPhone)));
}

#[tokio::test]
async fn test_submit_without_extractable_otp_is_rejected() {
    let (service, store) = service_with_store();

    let err = service.submit(PHONE, "See you at the meeting").await.unwrap_err();
    assert!(matches!(err, DomainError::Relay(RelayError::OtpNotFound)));
    assert!(store.entries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_store_failures_surface_as_unavailable() {
    let store = Arc::new(MockOtpStore::new(true));
    let service = RelayService::new(store, RelayConfig::default());

    let err = service.submit(PHONE, "Your code: 4821").await.unwrap_err();
    assert!(matches!(err, DomainError::Unavailable { .. }));

    let err = service.retrieve(PHONE).await.unwrap_err();
    assert!(matches!(err, DomainError::Unavailable { .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_retrieves_deliver_to_exactly_one_caller() {
    let (service, _store) = service_with_store();
    let service = Arc::new(service);

    service.submit(PHONE, "Your code: 4821").await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let service = service.clone();
        handles.push(tokio::spawn(
            async move { service.retrieve(PHONE).await },
        ));
    }

    let mut delivered = Vec::new();
    for handle in handles {
        if let Some(otp) = handle.await.unwrap().unwrap() {
            delivered.push(otp);
        }
    }

    assert_eq!(delivered, vec!["4821".to_string()]);
}
