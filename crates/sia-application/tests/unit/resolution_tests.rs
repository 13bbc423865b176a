//! Tests for the per-class resolution handle

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;
use sia_application::conditions::{always, named};
use sia_domain::{Capability, Error, ModelClass, Record};

use crate::support::{StubAdapter, VecSource, adapter, registry};

#[test]
fn test_resolution_starts_unresolved() {
    let registry = registry();
    let resolution = registry.from_class(ModelClass::new("Article"));

    assert!(!resolution.is_resolved());
    assert_eq!(resolution.model().name(), "Article");
}

#[test]
fn test_capability_access_resolves_once() {
    let registry = registry();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    registry.register(adapter("counted"), move |_model: &ModelClass| {
        counter.fetch_add(1, Ordering::SeqCst);
        true
    });

    let resolution = registry.from_class(ModelClass::new("Article"));
    assert!(resolution.records_provider().is_ok());
    assert!(resolution.callback_provider().is_ok());
    assert!(resolution.import_provider().is_ok());
    assert_eq!(resolution.adapter().name(), "counted");

    assert!(resolution.is_resolved());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_resolution_is_fixed_after_first_access() {
    let registry = registry();
    registry.register(adapter("before"), always);

    let resolution = registry.from_class(ModelClass::new("Article"));
    assert_eq!(resolution.adapter().name(), "before");

    registry.push_registration(adapter("after"), always);
    assert_eq!(resolution.adapter().name(), "before");

    // A fresh handle sees the new registration
    let fresh = registry.from_class(ModelClass::new("Article"));
    assert_eq!(fresh.adapter().name(), "after");
}

#[test]
fn test_unmatched_class_uses_default_adapter() {
    let registry = registry();
    registry.register(adapter("articles"), named("Article"));

    let resolution = registry.from_class(ModelClass::new("Comment"));
    assert_eq!(resolution.adapter().name(), "default");
}

#[test]
fn test_missing_capability_is_reported() {
    let registry = registry();
    registry.register(Arc::new(StubAdapter::without_importing("partial")), always);

    let resolution = registry.from_class(ModelClass::new("Article"));
    assert!(resolution.callback_provider().is_ok());

    let Err(err) = resolution.import_provider() else {
        panic!("expected missing importing capability");
    };
    assert!(err.is_capability_missing());
    match err {
        Error::CapabilityMissing {
            adapter,
            capability,
        } => {
            assert_eq!(adapter, "partial");
            assert_eq!(capability, Capability::Importing);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_adapter_misses_every_capability() {
    let registry = registry();
    registry.register(Arc::new(StubAdapter::empty("hollow")), always);

    let resolution = registry.from_class(ModelClass::new("Article"));
    assert!(resolution.records_provider().is_err());
    assert!(resolution.callback_provider().is_err());

    let message = resolution
        .import_provider()
        .err()
        .map(|err| err.to_string())
        .unwrap_or_default();
    assert!(message.contains("hollow"));
    assert!(message.contains("Importing"));
}

#[test]
fn test_callback_provider_returns_hooks() {
    let registry = registry();
    let model = ModelClass::new("Article");
    let resolution = registry.from_class(model.clone());

    let hooks = resolution
        .callback_provider()
        .expect("default stub provides callbacks")
        .hooks(&model);
    assert_eq!(hooks.len(), 3);
}

#[tokio::test]
async fn test_records_provider_fetches_through_source() {
    let registry = registry();
    let source = VecSource(vec![
        Record::new("1", json!({"title": "first"})),
        Record::new("2", json!({"title": "second"})),
    ]);

    let resolution = registry.from_class(ModelClass::new("Article"));
    let records = resolution
        .records_provider()
        .expect("default stub provides records")
        .records(&source, &["2".to_string()])
        .await
        .expect("records should load");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "2");
}

#[test]
fn test_debug_shows_resolution_state() {
    let registry = registry();
    let resolution = registry.from_class(ModelClass::new("Article"));
    assert!(format!("{resolution:?}").contains("None"));

    let _ = resolution.adapter();
    assert!(format!("{resolution:?}").contains("default"));
}
