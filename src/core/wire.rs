//! Tagged JSON intake for payload values.
//!
//! The service marks values JSON cannot express unambiguously with a
//! single-key object whose key starts with `@`:
//!
//! - `{"@int": "5"}`, `{"@double": "1.5"}` - plain numbers sent as text
//! - `{"@long": "9007199254740993"}` - wide integers, kept as a `Long` wrapper
//! - `{"@time": ...}`, `{"@date": ...}`, `{"@mod": ...}`, `{"@ref": ...}`, `{"@doc": ...}`
//! - `{"@object": {...}}` - a plain mapping whose keys would otherwise look like tags
//!
//! Any other `@` key becomes an unknown-tag wrapper; rejecting it is the
//! decoder's job, not the parser's.

use super::value::{Tag, Value};
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

impl Value {
    pub fn from_tagged_json(json: JsonValue) -> Result<Self, String> {
        match json {
            JsonValue::Null => Ok(Value::Null),
            JsonValue::Bool(b) => Ok(Value::Boolean(b)),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i))
                } else if n.is_u64() {
                    Ok(Value::tagged(Tag::Long, n.to_string()))
                } else {
                    n.as_f64()
                        .map(Value::Float)
                        .ok_or_else(|| format!("unrepresentable number {}", n))
                }
            }
            JsonValue::String(s) => Ok(Value::Text(s)),
            JsonValue::Array(items) => items
                .into_iter()
                .map(Self::from_tagged_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            JsonValue::Object(mut map) => {
                let tag_key = if map.len() == 1 {
                    map.keys().next().filter(|k| k.starts_with('@')).cloned()
                } else {
                    None
                };
                if let Some(key) = tag_key {
                    let inner = map.remove(&key).unwrap_or(JsonValue::Null);
                    return Self::from_tag(&key[1..], inner);
                }
                Self::object_from_json(map)
            }
        }
    }

    fn from_tag(name: &str, inner: JsonValue) -> Result<Self, String> {
        match name {
            "int" => {
                let text = expect_text(name, &inner)?;
                text.parse::<i64>()
                    .map(Value::Integer)
                    .map_err(|e| format!("invalid @int '{}': {}", text, e))
            }
            "double" => {
                let text = expect_text(name, &inner)?;
                text.parse::<f64>()
                    .map(Value::Float)
                    .map_err(|e| format!("invalid @double '{}': {}", text, e))
            }
            "object" => match inner {
                JsonValue::Object(map) => Self::object_from_json(map),
                other => Err(format!("@object must wrap an object, got {}", other)),
            },
            other => Ok(Value::Tagged(
                Tag::from_name(other),
                Box::new(Self::from_tagged_json(inner)?),
            )),
        }
    }

    fn object_from_json(map: serde_json::Map<String, JsonValue>) -> Result<Self, String> {
        let mut fields = BTreeMap::new();
        for (key, value) in map {
            fields.insert(key, Self::from_tagged_json(value)?);
        }
        Ok(Value::Object(fields))
    }
}

fn expect_text<'a>(tag: &str, inner: &'a JsonValue) -> Result<&'a str, String> {
    inner
        .as_str()
        .ok_or_else(|| format!("@{} must wrap a string, got {}", tag, inner))
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = JsonValue::deserialize(deserializer)?;
        Value::from_tagged_json(json).map_err(serde::de::Error::custom)
    }
}
