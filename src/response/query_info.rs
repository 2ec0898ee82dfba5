use super::raw::RawResponse;
use super::stats::Stats;
use crate::core::TagParseError;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use tracing::warn;

/// Metadata about an executed query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInfo {
    /// Transaction commit time in micros since epoch. Feeds the session's
    /// last-seen transaction time for read-your-writes consistency.
    pub txn_time: i64,

    /// Schema version the query executed against.
    pub schema_version: i64,

    /// Human readable summary of any errors, warnings and logs from the query.
    pub summary: String,

    /// Tags supplied with the query, if there were any.
    pub query_tags: HashMap<String, String>,

    pub stats: Option<Stats>,
}

impl QueryInfo {
    /// Build from a raw response, substituting an empty tag map when the
    /// encoded tags are malformed.
    pub fn from_response(res: &RawResponse) -> Self {
        let query_tags = match response_tags(res) {
            Ok(tags) => tags,
            Err(err) => {
                warn!(error = %err, "ignoring malformed query tags");
                HashMap::new()
            }
        };
        Self::with_tags(res, query_tags)
    }

    /// Build from a raw response, failing on malformed tags.
    pub fn try_from_response(res: &RawResponse) -> Result<Self, TagParseError> {
        let query_tags = response_tags(res)?;
        Ok(Self::with_tags(res, query_tags))
    }

    fn with_tags(res: &RawResponse, query_tags: HashMap<String, String>) -> Self {
        Self {
            txn_time: res.txn_time,
            schema_version: res.schema_version,
            summary: res.summary.clone(),
            query_tags,
            stats: res.stats,
        }
    }
}

fn response_tags(res: &RawResponse) -> Result<HashMap<String, String>, TagParseError> {
    match &res.query_tags {
        None | Some(JsonValue::Null) => Ok(HashMap::new()),
        Some(JsonValue::String(encoded)) => parse_query_tags(Some(encoded.as_str())),
        Some(other) => Err(TagParseError::NotText(json_kind(other))),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "text",
        JsonValue::Array(_) => "sequence",
        JsonValue::Object(_) => "mapping",
    }
}

/// Parse `key=value,key2=value2` tag encoding.
///
/// `None` and the empty string are an empty map. Values may contain `=`;
/// keys may not be empty.
pub fn parse_query_tags(encoded: Option<&str>) -> Result<HashMap<String, String>, TagParseError> {
    let mut tags = HashMap::new();
    let Some(encoded) = encoded.filter(|s| !s.is_empty()) else {
        return Ok(tags);
    };

    for pair in encoded.split(',') {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| TagParseError::MissingSeparator(pair.to_string()))?;
        if key.is_empty() {
            return Err(TagParseError::EmptyKey(pair.to_string()));
        }
        tags.insert(key.to_string(), value.to_string());
    }

    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(tags: Option<&str>) -> RawResponse {
        RawResponse {
            txn_time: 42,
            schema_version: 3,
            summary: "info: ok".into(),
            query_tags: tags.map(JsonValue::from),
            stats: Some(Stats {
                read_ops: 3,
                ..Stats::default()
            }),
            ..RawResponse::default()
        }
    }

    #[test]
    fn test_parse_tags() {
        let tags = parse_query_tags(Some("env=prod,team=a=b")).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags["env"], "prod");
        assert_eq!(tags["team"], "a=b");
        assert!(parse_query_tags(None).unwrap().is_empty());
        assert!(parse_query_tags(Some("")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_tags_errors() {
        assert_eq!(
            parse_query_tags(Some("env=prod,broken")),
            Err(TagParseError::MissingSeparator("broken".into()))
        );
        assert_eq!(
            parse_query_tags(Some("=x")),
            Err(TagParseError::EmptyKey("=x".into()))
        );
    }

    #[test]
    fn test_copies_fields_verbatim() {
        let info = QueryInfo::from_response(&response(Some("k=v")));
        assert_eq!(info.txn_time, 42);
        assert_eq!(info.schema_version, 3);
        assert_eq!(info.summary, "info: ok");
        assert_eq!(info.query_tags["k"], "v");
        assert_eq!(info.stats.unwrap().read_ops, 3);
        assert_eq!(info.stats.unwrap().write_ops, 0);
    }

    #[test]
    fn test_malformed_tags_fall_back_to_empty() {
        let raw = response(Some("not a tag list"));
        let info = QueryInfo::from_response(&raw);
        assert!(info.query_tags.is_empty());
        assert_eq!(info.txn_time, 42);
        assert_eq!(info.summary, "info: ok");

        assert!(QueryInfo::try_from_response(&raw).is_err());
    }

    #[test]
    fn test_non_text_tags_fall_back_to_empty() {
        let raw = RawResponse {
            query_tags: Some(JsonValue::from(7)),
            ..response(None)
        };
        let info = QueryInfo::from_response(&raw);
        assert!(info.query_tags.is_empty());
        assert_eq!(info.txn_time, 42);

        assert_eq!(
            QueryInfo::try_from_response(&raw),
            Err(TagParseError::NotText("number"))
        );
    }

    #[test]
    fn test_missing_stats_stays_absent() {
        let raw = RawResponse::default();
        assert_eq!(QueryInfo::from_response(&raw), QueryInfo::default());
    }
}
