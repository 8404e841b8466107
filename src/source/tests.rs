//! Tests for the source module

use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use super::*;

// ============================================================================
// VecSource Tests
// ============================================================================

#[test]
fn test_vec_source_count() {
    let source = VecSource::new(vec![1, 2, 3, 4, 5]);
    assert_eq!(source.count().unwrap(), 5);

    let empty: VecSource<i32> = VecSource::new(vec![]);
    assert_eq!(empty.count().unwrap(), 0);
}

#[test_case(0, 2, vec![10, 20] ; "first two")]
#[test_case(3, 2, vec![40, 50] ; "last two")]
#[test_case(4, 10, vec![50] ; "limit past end")]
#[test_case(5, 10, vec![] ; "offset at end")]
#[test_case(100, 10, vec![] ; "offset far past end")]
#[test_case(0, 0, vec![] ; "zero limit")]
fn test_vec_source_slice(offset: u64, limit: u64, expected: Vec<i32>) {
    let source = VecSource::new(vec![10, 20, 30, 40, 50]);
    assert_eq!(source.slice(offset, limit).unwrap(), expected);
}

#[test]
fn test_vec_source_fetch_all() {
    let source = VecSource::from(vec!["a", "b", "c"]);
    assert_eq!(source.fetch_all().unwrap(), vec!["a", "b", "c"]);
}

// ============================================================================
// JsonArraySource Tests
// ============================================================================

#[test]
fn test_json_source_requires_array() {
    assert!(JsonArraySource::new(json!([1, 2, 3])).is_ok());

    let err = JsonArraySource::new(json!({"not": "an array"})).unwrap_err();
    assert!(matches!(err, Error::NotAQuery { .. }));
    assert_eq!(
        err.to_string(),
        "Not a query source: expected a JSON array, got an object"
    );

    let err = JsonArraySource::new(json!("scalar")).unwrap_err();
    assert!(matches!(err, Error::NotAQuery { .. }));
}

#[test]
fn test_json_source_slice() {
    let source = JsonArraySource::new(json!([1, 2, 3, 4, 5])).unwrap();
    assert_eq!(source.slice(1, 2).unwrap(), vec![json!(2), json!(3)]);
    assert_eq!(source.slice(10, 2).unwrap(), Vec::<serde_json::Value>::new());
}

#[test]
fn test_json_source_has_no_native_count() {
    // Counting goes through the default body, which reports unsupported;
    // the paginator is responsible for the fallback.
    let source = JsonArraySource::new(json!([1, 2, 3])).unwrap();
    assert!(matches!(source.count(), Err(Error::CountUnsupported)));
    assert_eq!(source.fetch_all().unwrap().len(), 3);
}
