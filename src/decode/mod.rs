//! Projection of a [`Value`] tree onto caller-declared Rust types.
//!
//! Every target shape implements [`Decode`]. Scalars, containers and the
//! wrapper types in [`crate::core::types`] are covered here; records get a
//! generated implementation from `#[derive(Decode)]`.
//!
//! Decoding borrows the source tree and never mutates it, so the same payload
//! can be decoded any number of times, into any number of shapes.

mod container;
mod scalar;
mod wrapper;

use crate::core::{DecodeError, DecodeErrorKind, DecodePath, DecodeResult, Tag, Value};
use std::collections::BTreeMap;

/// A type that can be built from a payload value.
pub trait Decode: Sized {
    /// Decode `value`, reporting failures against `path`.
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self>;
}

/// Decode `value` into `T`, starting at the root path.
///
/// # Examples
///
/// ```
/// use fauna_response::{decode, Decode, Value};
///
/// #[derive(Debug, Default, PartialEq, Decode)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// let value: Value = [("x", Value::from(1i64)), ("y", Value::from(2i64))]
///     .into_iter()
///     .collect();
/// assert_eq!(decode::<Point>(&value).unwrap(), Point { x: 1, y: 2 });
/// ```
pub fn decode<T: Decode>(value: &Value) -> DecodeResult<T> {
    T::decode(value, &mut DecodePath::root())
}

/// Error for a value whose kind the target cannot accept.
///
/// Wrappers get a more specific kind than a plain shape mismatch: unknown
/// tags are reported as unrecognized, known ones as an unsupported coercion.
pub fn mismatch(value: &Value, path: &DecodePath, expected: &'static str) -> DecodeError {
    match value {
        Value::Tagged(Tag::Unknown(name), _) => {
            path.error(DecodeErrorKind::UnrecognizedTag(name.clone()))
        }
        Value::Tagged(tag, _) => path.error(DecodeErrorKind::UnsupportedWrapperCoercion {
            tag: tag.name().to_string(),
            expected,
        }),
        other => path.error(DecodeErrorKind::ShapeMismatch {
            expected,
            actual: other.type_name(),
        }),
    }
}

pub(crate) fn invalid_payload(path: &DecodePath, tag: &Tag, reason: String) -> DecodeError {
    path.error(DecodeErrorKind::InvalidWrapperPayload {
        tag: tag.name().to_string(),
        reason,
    })
}

/// Field mapping backing a record target.
///
/// Accepts a plain mapping or a full-document wrapper around one.
#[doc(hidden)]
pub fn record_fields<'a>(
    value: &'a Value,
    path: &DecodePath,
    expected: &'static str,
) -> DecodeResult<&'a BTreeMap<String, Value>> {
    match value {
        Value::Object(fields) => Ok(fields),
        Value::Tagged(Tag::Document, inner) => match inner.as_ref() {
            Value::Object(fields) => Ok(fields),
            other => Err(invalid_payload(
                path,
                &Tag::Document,
                format!("expected mapping, found {}", other.type_name()),
            )),
        },
        other => Err(mismatch(other, path, expected)),
    }
}

/// Decode one record field.
///
/// The key is matched exactly first, then ASCII case-insensitively. A missing
/// key or a `null` leaves the field at its default.
#[doc(hidden)]
pub fn decode_field<T: Decode + Default>(
    fields: &BTreeMap<String, Value>,
    key: &str,
    path: &mut DecodePath,
) -> DecodeResult<T> {
    let found = fields
        .get_key_value(key)
        .or_else(|| fields.iter().find(|(k, _)| k.eq_ignore_ascii_case(key)));

    match found {
        None | Some((_, Value::Null)) => Ok(T::default()),
        Some((source_key, value)) => path.with_field(source_key, |p| T::decode(value, p)),
    }
}
