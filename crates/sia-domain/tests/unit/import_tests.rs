//! Unit tests for import value objects

use serde_json::json;
use sia_domain::{BulkOperation, Error, ImportOptions};

#[test]
fn test_default_import_options() {
    let options = ImportOptions::default();
    assert_eq!(options.batch_size, 1000);
    assert_eq!(options.scope, None);
    assert!(options.validate().is_ok());
}

#[test]
fn test_import_options_builder() {
    let options = ImportOptions::new()
        .with_batch_size(50)
        .with_scope("published");
    assert_eq!(options.batch_size, 50);
    assert_eq!(options.scope.as_deref(), Some("published"));
}

#[test]
fn test_zero_batch_size_is_rejected() {
    let result = ImportOptions::new().with_batch_size(0).validate();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_index_operation_bulk_shape() {
    let operation = BulkOperation::Index {
        id: "42".to_string(),
        data: json!({"title": "Hello"}),
    };
    let value = serde_json::to_value(&operation).unwrap();
    assert_eq!(
        value,
        json!({"index": {"_id": "42", "data": {"title": "Hello"}}})
    );
    assert_eq!(operation.id(), "42");
}

#[test]
fn test_delete_operation_bulk_shape() {
    let operation = BulkOperation::Delete {
        id: "7".to_string(),
    };
    let value = serde_json::to_value(&operation).unwrap();
    assert_eq!(value, json!({"delete": {"_id": "7"}}));
}
