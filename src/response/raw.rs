use super::stats::Stats;
use crate::core::Value;
use serde::Deserialize;

/// Successful query response as delivered by the transport layer.
///
/// Every field is optional on the wire; absent or `null` ones take their zero
/// value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawResponse {
    /// Transaction commit time, microseconds since the epoch.
    #[serde(rename = "txn_ts", deserialize_with = "super::serde_null::deserialize")]
    pub txn_time: i64,

    #[serde(deserialize_with = "super::serde_null::deserialize")]
    pub schema_version: i64,

    #[serde(deserialize_with = "super::serde_null::deserialize")]
    pub summary: String,

    /// Caller tags echoed back, encoded as `key=value,key2=value2`.
    ///
    /// Kept as received; a value that is not text is reported when the tags
    /// are parsed, not here.
    pub query_tags: Option<serde_json::Value>,

    pub stats: Option<Stats>,

    pub data: Value,

    pub static_type: Option<String>,
}

impl RawResponse {
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tag;

    #[test]
    fn test_full_response() {
        let body = br#"{
            "data": {"@time": "2023-01-01T00:00:00Z"},
            "static_type": "Time",
            "summary": "",
            "txn_ts": 1702346199930000,
            "stats": {"compute_ops": 1, "read_ops": 0, "write_ops": 0},
            "schema_version": 17,
            "query_tags": "env=test"
        }"#;
        let raw = RawResponse::from_slice(body).unwrap();
        assert_eq!(raw.txn_time, 1_702_346_199_930_000);
        assert_eq!(raw.schema_version, 17);
        assert_eq!(raw.static_type.as_deref(), Some("Time"));
        assert_eq!(raw.query_tags, Some(serde_json::Value::from("env=test")));
        assert_eq!(raw.stats.unwrap().compute_ops, 1);
        assert_eq!(raw.data, Value::tagged(Tag::Time, "2023-01-01T00:00:00Z"));
    }

    #[test]
    fn test_minimal_response() {
        let raw = RawResponse::from_slice(br#"{"data": null}"#).unwrap();
        assert_eq!(raw, RawResponse::default());
    }

    #[test]
    fn test_null_metadata_takes_zero_values() {
        let body = br#"{
            "data": 1,
            "txn_ts": null,
            "schema_version": null,
            "summary": null,
            "query_tags": null,
            "stats": null,
            "static_type": null
        }"#;
        let raw = RawResponse::from_slice(body).unwrap();
        assert_eq!(
            raw,
            RawResponse {
                data: Value::Integer(1),
                ..RawResponse::default()
            }
        );
    }

    #[test]
    fn test_non_text_query_tags_are_kept() {
        let raw = RawResponse::from_slice(br#"{"query_tags": 7}"#).unwrap();
        assert_eq!(raw.query_tags, Some(serde_json::Value::from(7)));
    }
}
