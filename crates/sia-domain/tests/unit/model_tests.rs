//! Unit tests for the model class descriptor

use sia_domain::ModelClass;

#[test]
fn test_new_model_defaults() {
    let model = ModelClass::new("Article");
    assert_eq!(model.name(), "Article");
    assert!(model.ancestors.is_empty());
    assert_eq!(model.primary_key, "id");
}

#[test]
fn test_descends_from_ancestor() {
    let model = ModelClass::new("Article")
        .with_ancestor("ApplicationRecord")
        .with_ancestor("ActiveRecord::Base");

    assert!(model.descends_from("ApplicationRecord"));
    assert!(model.descends_from("ActiveRecord::Base"));
    assert!(!model.descends_from("Mongoid::Document"));
}

#[test]
fn test_descends_from_itself() {
    let model = ModelClass::new("ActiveRecord::Base");
    assert!(model.descends_from("ActiveRecord::Base"));
}

#[test]
fn test_custom_primary_key() {
    let model = ModelClass::new("Person").with_primary_key("uuid");
    assert_eq!(model.primary_key, "uuid");
}

#[test]
fn test_deserialize_fills_defaults() {
    let model: ModelClass = serde_json::from_str(r#"{"name": "Article"}"#).unwrap();
    assert_eq!(model, ModelClass::new("Article"));
}

#[test]
fn test_display_uses_name() {
    assert_eq!(ModelClass::new("Article").to_string(), "Article");
}
