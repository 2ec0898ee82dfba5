use super::{Decode, mismatch};
use crate::core::{DecodePath, DecodeResult, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

impl<T: Decode> Decode for Option<T> {
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::decode(other, path).map(Some),
        }
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
        T::decode(value, path).map(Box::new)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| path.with_index(i, |p| T::decode(item, p)))
                .collect(),
            other => Err(mismatch(other, path, "sequence")),
        }
    }
}

impl<T: Decode, S: BuildHasher + Default> Decode for HashMap<String, T, S> {
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => return Err(mismatch(other, path, "map")),
        };

        let mut out = HashMap::with_capacity_and_hasher(fields.len(), S::default());
        for (key, item) in fields {
            let decoded = path.with_field(key, |p| T::decode(item, p))?;
            out.insert(key.clone(), decoded);
        }
        Ok(out)
    }
}

impl<T: Decode> Decode for BTreeMap<String, T> {
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
        match value {
            Value::Object(fields) => fields
                .iter()
                .map(|(key, item)| {
                    path.with_field(key, |p| T::decode(item, p))
                        .map(|decoded| (key.clone(), decoded))
                })
                .collect(),
            other => Err(mismatch(other, path, "map")),
        }
    }
}

/// Untyped passthrough, for subtrees the caller wants to keep dynamic.
impl Decode for Value {
    fn decode(value: &Value, _path: &mut DecodePath) -> DecodeResult<Self> {
        Ok(value.clone())
    }
}
