/// Response tests
///
/// Query metadata extraction and result envelope construction
/// Run with: cargo test --test response_tests
use fauna_response::{
    QueryInfo, QuerySuccess, RawResponse, ResponseError, Session, SessionConfig, Stats, Value,
};
use serde_json::json;

fn raw(body: serde_json::Value) -> RawResponse {
    serde_json::from_value(body).unwrap()
}

#[test]
fn test_stats_default_to_zero() {
    let info = QueryInfo::from_response(&raw(json!({"stats": {"read_ops": 3}})));
    assert_eq!(
        info.stats,
        Some(Stats {
            read_ops: 3,
            ..Stats::default()
        })
    );
}

#[test]
fn test_stats_copied_exactly() {
    let stats = json!({
        "compute_ops": 1,
        "read_ops": 2,
        "write_ops": 3,
        "query_time_ms": 4,
        "contention_retries": 5,
        "storage_bytes_read": 6,
        "storage_bytes_write": 7
    });
    let info = QueryInfo::from_response(&raw(json!({"stats": stats})));
    let stats = info.stats.unwrap();
    assert_eq!(
        [
            stats.compute_ops,
            stats.read_ops,
            stats.write_ops,
            stats.query_time_ms,
            stats.contention_retries,
            stats.storage_bytes_read,
            stats.storage_bytes_write
        ],
        [1, 2, 3, 4, 5, 6, 7]
    );
}

#[test]
fn test_metadata_copied_verbatim() {
    let res = QuerySuccess::from_response(raw(json!({
        "txn_ts": 1702346199930000i64,
        "schema_version": 1702346199930000i64,
        "summary": "warning: deprecated",
        "query_tags": "project=demo,env=ci",
        "data": [1, 2],
        "static_type": "Array<Number>"
    })));

    assert_eq!(res.info.txn_time, 1_702_346_199_930_000);
    assert_eq!(res.info.schema_version, 1_702_346_199_930_000);
    assert_eq!(res.info.summary, "warning: deprecated");
    assert_eq!(res.info.query_tags.len(), 2);
    assert_eq!(res.info.query_tags["project"], "demo");
    assert_eq!(res.info.query_tags["env"], "ci");
    assert!(res.info.stats.is_none());
    assert_eq!(res.data, Value::Array(vec![Value::Integer(1), Value::Integer(2)]));
    assert_eq!(res.static_type, "Array<Number>");
}

#[test]
fn test_malformed_tags_do_not_block_results() {
    let session = Session::default();
    let res = session
        .process_response(raw(json!({
            "txn_ts": 12,
            "schema_version": 2,
            "summary": "ok",
            "query_tags": "this is not a tag list",
            "data": "hello"
        })))
        .unwrap();

    assert!(res.info.query_tags.is_empty());
    assert_eq!(res.info.txn_time, 12);
    assert_eq!(res.info.schema_version, 2);
    assert_eq!(res.info.summary, "ok");
    assert_eq!(res.decode::<String>().unwrap(), "hello");
}

#[test]
fn test_strict_tags_surface_error() {
    let session = Session::new(SessionConfig::new().strict_query_tags(true));
    let err = session
        .process_response(raw(json!({"query_tags": "k=v,=nokey"})))
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid query tags: query tag '=nokey' has an empty key");
}

#[test]
fn test_body_with_bad_wire_tag_is_parse_error() {
    let session = Session::default();
    let err = session
        .process_body(br#"{"data": {"@int": "twelve"}, "txn_ts": 3}"#)
        .unwrap_err();
    assert!(matches!(err, ResponseError::Parse(_)));
    assert_eq!(session.last_txn_time(), None);
}

#[test]
fn test_null_metadata_does_not_block_results() {
    let session = Session::default();
    let res = session
        .process_body(br#"{"data": 1, "txn_ts": 5, "summary": null, "schema_version": null}"#)
        .unwrap();
    assert_eq!(res.info.txn_time, 5);
    assert_eq!(res.info.summary, "");
    assert_eq!(res.info.schema_version, 0);
    assert_eq!(res.decode::<i64>().unwrap(), 1);

    let res = session.process_body(br#"{"data": 2, "txn_ts": null}"#).unwrap();
    assert_eq!(res.info.txn_time, 0);
    assert_eq!(session.last_txn_time(), Some(5));
}

#[test]
fn test_null_counters_read_as_zero() {
    let res = Session::default()
        .process_body(br#"{"data": null, "stats": {"read_ops": null, "write_ops": 4}}"#)
        .unwrap();
    assert_eq!(
        res.info.stats,
        Some(Stats {
            write_ops: 4,
            ..Stats::default()
        })
    );
}

#[test]
fn test_non_text_tags_follow_tag_policy() {
    let body = br#"{"data": "ok", "txn_ts": 9, "query_tags": 7}"#;

    let res = Session::default().process_body(body).unwrap();
    assert!(res.info.query_tags.is_empty());
    assert_eq!(res.decode::<String>().unwrap(), "ok");

    let err = Session::new(SessionConfig::new().strict_query_tags(true))
        .process_body(body)
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid query tags: query tags must be text, found number");
}
