use super::{Decode, invalid_payload, mismatch};
use crate::core::{DecodeError, DecodeErrorKind, DecodePath, DecodeResult, Tag, Value};
use std::num::IntErrorKind;

impl Decode for bool {
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
        match value {
            Value::Boolean(b) => Ok(*b),
            other => Err(mismatch(other, path, "bool")),
        }
    }
}

impl Decode for String {
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            other => Err(mismatch(other, path, "String")),
        }
    }
}

impl Decode for char {
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
        let text = match value {
            Value::Text(s) => s,
            other => return Err(mismatch(other, path, "char")),
        };
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(path.error(DecodeErrorKind::OutOfRange {
                value: format!("{:?}", text),
                expected: "char",
            })),
        }
    }
}

/// Integer held by `value`, widened to `i128`.
///
/// Accepts plain integers and `@long` wrappers (digits or an integer payload).
/// Floats are rejected: they never narrow into integer targets.
fn integer_source(value: &Value, path: &DecodePath, expected: &'static str) -> DecodeResult<i128> {
    match value {
        Value::Integer(i) => Ok(i128::from(*i)),
        Value::Tagged(Tag::Long, inner) => match inner.as_ref() {
            Value::Integer(i) => Ok(i128::from(*i)),
            Value::Text(digits) => digits.trim().parse::<i128>().map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    path.error(DecodeErrorKind::OutOfRange {
                        value: digits.clone(),
                        expected,
                    })
                }
                _ => invalid_payload(path, &Tag::Long, format!("'{}': {}", digits, e)),
            }),
            other => Err(invalid_payload(
                path,
                &Tag::Long,
                format!("expected digits, found {}", other.type_name()),
            )),
        },
        other => Err(mismatch(other, path, expected)),
    }
}

macro_rules! decode_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Decode for $ty {
                fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
                    let wide = integer_source(value, path, stringify!($ty))?;
                    <$ty>::try_from(wide).map_err(|_| {
                        path.error(DecodeErrorKind::OutOfRange {
                            value: wide.to_string(),
                            expected: stringify!($ty),
                        })
                    })
                }
            }
        )*
    };
}

decode_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Integer that a float target cannot hold exactly.
fn inexact_float(i: i64, path: &DecodePath, expected: &'static str) -> DecodeError {
    path.error(DecodeErrorKind::OutOfRange {
        value: i.to_string(),
        expected,
    })
}

// Integer sources widen into floats only when the round trip is exact. It goes
// through i128 so saturation at the i64 bounds cannot hide a rounded value.

impl Decode for f64 {
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
        match value {
            Value::Float(f) => Ok(*f),
            Value::Integer(i) => value.as_f64().ok_or_else(|| inexact_float(*i, path, "f64")),
            other => Err(mismatch(other, path, "f64")),
        }
    }
}

impl Decode for f32 {
    fn decode(value: &Value, path: &mut DecodePath) -> DecodeResult<Self> {
        match value {
            Value::Float(f) => Ok(*f as f32),
            Value::Integer(i) => {
                let f = *i as f32;
                if f as i128 == i128::from(*i) {
                    Ok(f)
                } else {
                    Err(inexact_float(*i, path, "f32"))
                }
            }
            other => Err(mismatch(other, path, "f32")),
        }
    }
}
