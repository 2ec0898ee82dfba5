use super::{Decode, invalid_payload, mismatch};
use crate::core::{Date, DecodePath, DecodeResult, DocumentRef, Module, Tag, Time, Value};

/// Payload of a wrapper that must carry exactly `tag`.
fn payload<'a>(
    value: &'a Value,
    path: &DecodePath,
    tag: Tag,
    expected: &'static str,
) -> DecodeResult<&'a Value> {
    match value {
        Value::Tagged(found, inner) if *found == tag => Ok(inner.as_ref()),
        other => Err(mismatch(other, path, expected)),
    }
}

fn payload_text<'a>(
    value: &'a Value,
    path: &DecodePath,
    tag: Tag,
    expected: &'static str,
) -> DecodeResult<&'a str> {
    let inner = payload(value, path, tag.clone(), expected)?;
    inner.as_str().ok_or_else(|| {
        invalid_payload(path, &tag, format!("expected text, found {}", inner.type_name()))
    })
}

impl Decode for Time {
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
        let text = payload_text(value, path, Tag::Time, "Time")?;
        Time::parse(text).map_err(|e| invalid_payload(path, &Tag::Time, format!("'{}': {}", text, e)))
    }
}

impl Decode for Date {
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
        let text = payload_text(value, path, Tag::Date, "Date")?;
        Date::parse(text).map_err(|e| invalid_payload(path, &Tag::Date, format!("'{}': {}", text, e)))
    }
}

impl Decode for Module {
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
        payload_text(value, path, Tag::Module, "Module").map(Module::new)
    }
}

impl Decode for DocumentRef {
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
        let inner = payload(value, path, Tag::Ref, "DocumentRef")?;
        let fields = inner.as_object().ok_or_else(|| {
            invalid_payload(path, &Tag::Ref, format!("expected mapping, found {}", inner.type_name()))
        })?;

        let id = match fields.get("id") {
            Some(id) => path.with_field("id", |p| String::decode(id, p))?,
            None => return Err(invalid_payload(path, &Tag::Ref, "missing id".to_string())),
        };
        let collection = match fields.get("coll") {
            Some(coll) => path.with_field("coll", |p| Module::decode(coll, p))?,
            None => return Err(invalid_payload(path, &Tag::Ref, "missing coll".to_string())),
        };

        Ok(DocumentRef { id, collection })
    }
}
