use std::collections::BTreeMap;
use std::fmt;

/// Semantic tag carried by a wrapper node.
///
/// Wrappers disambiguate values the plain scalar kinds cannot express on
/// their own: integers wider than native precision, instants, calendar dates,
/// module names and document references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Integer that may exceed native precision; payload is digits or an integer.
    Long,
    /// Instant in time; payload is RFC 3339 text.
    Time,
    /// Calendar date; payload is `YYYY-MM-DD` text.
    Date,
    /// Collection or module name; payload is text.
    Module,
    /// Opaque document reference; payload is `{id, coll}`.
    Ref,
    /// Full document; payload is the document's field mapping.
    Document,
    /// Tag this client does not understand.
    Unknown(String),
}

impl Tag {
    /// Resolve a wire tag name (without the leading `@`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "long" => Self::Long,
            "time" => Self::Time,
            "date" => Self::Date,
            "mod" => Self::Module,
            "ref" => Self::Ref,
            "doc" => Self::Document,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Long => "long",
            Self::Time => "time",
            Self::Date => "date",
            Self::Module => "mod",
            Self::Ref => "ref",
            Self::Document => "doc",
            Self::Unknown(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name())
    }
}

/// Dynamically-typed query payload.
///
/// Mappings are key-ordered so that iteration, display and equality do not
/// depend on the order the service emitted fields in.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    Tagged(Tag, Box<Value>),
}

impl Value {
    pub fn tagged(tag: Tag, inner: impl Into<Value>) -> Self {
        Self::Tagged(tag, Box::new(inner.into()))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Array(_) => "sequence",
            Self::Object(_) => "mapping",
            Self::Tagged(..) => "wrapper",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Floats as-is; integers only when `f64` holds them exactly.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => {
                let f = *i as f64;
                (f as i128 == i128::from(*i)).then_some(f)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Field lookup on a mapping; `None` for any other kind.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|fields| fields.get(key))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(fl) => write!(f, "{}", fl),
            Self::Text(s) => write!(f, "{:?}", s),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Object(fields) => {
                write!(f, "{{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Self::Tagged(tag, inner) => write!(f, "{{{:?}: {}}}", tag.to_string(), inner),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self::Object(fields)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names_round_trip() {
        for name in ["long", "time", "date", "mod", "ref", "doc"] {
            let tag = Tag::from_name(name);
            assert!(tag.is_known());
            assert_eq!(tag.name(), name);
        }
        assert_eq!(Tag::from_name("set"), Tag::Unknown("set".into()));
        assert!(!Tag::from_name("set").is_known());
    }

    #[test]
    fn test_object_is_key_ordered() {
        let value: Value = [("b", Value::from(2i64)), ("a", Value::from(1i64))]
            .into_iter()
            .collect();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(value.to_string(), r#"{"a": 1, "b": 2}"#);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from(1.5).type_name(), "float");
        assert_eq!(Value::tagged(Tag::Time, "2023-01-01T00:00:00Z").type_name(), "wrapper");
        assert_eq!(Value::from(vec![Value::Null]).type_name(), "sequence");
    }

    #[test]
    fn test_as_f64_is_exact() {
        assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::from(1i64 << 53).as_f64(), Some(9_007_199_254_740_992.0));
        assert_eq!(Value::from((1i64 << 53) + 1).as_f64(), None);
        assert_eq!(Value::from(i64::MAX).as_f64(), None);
        assert_eq!(Value::from("1").as_f64(), None);
    }
}
