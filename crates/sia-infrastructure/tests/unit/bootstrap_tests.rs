//! Registry bootstrap tests

extern crate sia_providers;

use sia_domain::ModelClass;
use sia_domain::error::Error;
use sia_infrastructure::config::{AppConfig, ConfigBuilder};
use sia_infrastructure::di::bootstrap;

#[test]
fn test_bootstrap_with_defaults() {
    let registry = bootstrap(&AppConfig::default()).expect("default config bootstraps");

    assert_eq!(registry.default_adapter().name(), "default");
    let resolution = registry.from_class(ModelClass::new("Article"));
    assert_eq!(resolution.adapter().name(), "default");
}

#[test]
fn test_bootstrap_with_null_fallback() {
    let config = ConfigBuilder::new().with_default_adapter("null").build();
    let registry = bootstrap(&config).expect("null adapter is in the catalog");

    assert_eq!(registry.default_adapter().name(), "null");
}

#[test]
fn test_bootstrap_unknown_adapter_fails() {
    let config = ConfigBuilder::new().with_default_adapter("missing").build();

    let Err(err) = bootstrap(&config) else {
        panic!("unknown adapter should fail");
    };
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_bootstrap_without_catalog_starts_empty() {
    let config = ConfigBuilder::new().with_install_catalog(false).build();
    let registry = bootstrap(&config).expect("config bootstraps");
    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_bootstrapped_registry_is_shareable() {
    let registry = bootstrap(&AppConfig::default()).expect("default config bootstraps");

    let handle = {
        let registry = std::sync::Arc::clone(&registry);
        tokio::spawn(async move {
            registry
                .resolve(&ModelClass::new("Article"))
                .name()
                .to_string()
        })
    };

    assert_eq!(handle.await.expect("task completes"), "default");
}
