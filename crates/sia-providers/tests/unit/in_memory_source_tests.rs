//! Tests for the in-memory record source

use serde_json::json;
use sia_domain::{Error, ImportOptions, Record, RecordSource};
use sia_providers::InMemoryRecordSource;

fn numbered(count: usize) -> InMemoryRecordSource {
    InMemoryRecordSource::new().with_records(
        (1..=count).map(|n| Record::new(n.to_string(), json!({"n": n, "published": n % 2 == 0}))),
    )
}

#[test]
fn test_source_name_defaults_to_memory() {
    assert_eq!(InMemoryRecordSource::new().source_name(), "memory");
    assert_eq!(InMemoryRecordSource::named("posts").source_name(), "posts");
}

#[test]
fn test_with_record_replaces_in_place() {
    let source = InMemoryRecordSource::new()
        .with_record(Record::new("a", json!({"v": 1})))
        .with_record(Record::new("b", json!({"v": 2})))
        .with_record(Record::new("a", json!({"v": 3})));

    assert_eq!(source.len(), 2);
    assert!(!source.is_empty());
}

#[tokio::test]
async fn test_find_returns_storage_order() {
    let source = numbered(5);
    let found = source
        .find(&["4".to_string(), "2".to_string(), "9".to_string()])
        .await
        .expect("find never fails");

    let ids: Vec<&str> = found.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "4"]);
}

#[tokio::test]
async fn test_batches_chunk_by_size() {
    let source = numbered(5);
    let batches = source
        .batches(&ImportOptions::new().with_batch_size(2))
        .await
        .expect("batches should load");

    let sizes: Vec<usize> = batches.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![2, 2, 1]);
    assert_eq!(batches[2][0].id, "5");
}

#[tokio::test]
async fn test_batches_of_empty_source() {
    let batches = InMemoryRecordSource::new()
        .batches(&ImportOptions::new())
        .await
        .expect("batches should load");
    assert!(batches.is_empty());
}

#[tokio::test]
async fn test_zero_batch_size_is_rejected() {
    let result = numbered(3)
        .batches(&ImportOptions::new().with_batch_size(0))
        .await;
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[tokio::test]
async fn test_scope_filters_batches() {
    let source = numbered(6).with_scope("published", |record: &Record| {
        record.document["published"] == json!(true)
    });

    let batches = source
        .batches(&ImportOptions::new().with_scope("published"))
        .await
        .expect("scoped batches should load");

    let ids: Vec<&str> = batches
        .iter()
        .flatten()
        .map(|record| record.id.as_str())
        .collect();
    assert_eq!(ids, vec!["2", "4", "6"]);
}

#[tokio::test]
async fn test_unknown_scope_is_not_found() {
    let result = numbered(2)
        .batches(&ImportOptions::new().with_scope("archived"))
        .await;
    assert!(matches!(result, Err(Error::NotFound { .. })));
}
