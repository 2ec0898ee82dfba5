pub mod error;
pub mod types;
pub mod value;
mod wire;

pub use error::{
    DecodeError, DecodeErrorKind, DecodePath, DecodeResult, PathSegment, ResponseError,
    ResponseResult, TagParseError,
};
pub use types::{Date, DocumentRef, Module, Time};
pub use value::{Tag, Value};
