//! Tests for the compile-time adapter catalog

use std::sync::Arc;

use sia_application::{ADAPTERS, AdapterEntry, list_adapters, resolve_adapter};
use sia_domain::{Adapter, Error, ModelClass};

use crate::support::{StubAdapter, registry};

fn detected_factory() -> Arc<dyn Adapter> {
    Arc::new(StubAdapter::complete("catalog_detected"))
}

fn fallback_factory() -> Arc<dyn Adapter> {
    Arc::new(StubAdapter::complete("catalog_fallback"))
}

fn is_catalog_model(model: &ModelClass) -> bool {
    model.descends_from("Catalog::Base")
}

#[linkme::distributed_slice(ADAPTERS)]
static CATALOG_DETECTED: AdapterEntry = AdapterEntry {
    name: "catalog_detected",
    description: "Adapter installed with a detection condition",
    factory: detected_factory,
    detection: Some(is_catalog_model),
    priority: 5,
};

#[linkme::distributed_slice(ADAPTERS)]
static CATALOG_FALLBACK: AdapterEntry = AdapterEntry {
    name: "catalog_fallback",
    description: "Adapter only usable as a fallback",
    factory: fallback_factory,
    detection: None,
    priority: 0,
};

#[test]
fn test_list_adapters_includes_entries() {
    let adapters = list_adapters();
    let names: Vec<&str> = adapters.iter().map(|(name, _)| *name).collect();

    assert!(names.contains(&"catalog_detected"));
    assert!(names.contains(&"catalog_fallback"));
    assert!(
        adapters
            .iter()
            .any(|(_, description)| description.contains("fallback"))
    );
}

#[test]
fn test_resolve_adapter_by_name() {
    let adapter = resolve_adapter("catalog_fallback").expect("entry is registered");
    assert_eq!(adapter.name(), "catalog_fallback");
}

#[test]
fn test_resolve_unknown_adapter_lists_available() {
    let Err(err) = resolve_adapter("does_not_exist") else {
        panic!("unknown adapter should fail");
    };

    assert!(matches!(err, Error::Configuration { .. }));
    let message = err.to_string();
    assert!(message.contains("does_not_exist"));
    assert!(message.contains("catalog_detected"));
}

#[test]
fn test_install_catalog_registers_detected_entries_only() {
    let registry = registry();
    let installed = registry.install_catalog();

    assert_eq!(installed, 1);
    let adapters = registry.adapters();
    assert_eq!(adapters["catalog_detected"].priority(), 5);
    assert!(!adapters.contains_key("catalog_fallback"));

    let model = ModelClass::new("Product").with_ancestor("Catalog::Base");
    assert_eq!(registry.resolve(&model).name(), "catalog_detected");
    assert_eq!(
        registry.resolve(&ModelClass::new("Other")).name(),
        "default"
    );
}

#[test]
fn test_push_registration_overrides_catalog_detection() {
    let registry = registry();
    registry.install_catalog();
    registry.push_registration(
        Arc::new(StubAdapter::complete("custom")),
        |model: &ModelClass| model.descends_from("Catalog::Base"),
    );

    let model = ModelClass::new("Product").with_ancestor("Catalog::Base");
    assert_eq!(registry.resolve(&model).name(), "custom");
}
