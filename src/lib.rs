// ============================================================================
// fauna_response Library
// ============================================================================
//
// Typed results for transactional query responses:
// - core:     payload value tree, wrapper types, errors
// - decode:   projection of payload values onto Rust types
// - response: stats, query metadata and the success envelope
// - session:  read-your-writes tracking across a client's queries
//
// ============================================================================

extern crate self as fauna_response;

pub mod core;
pub mod decode;
pub mod response;
pub mod session;

pub use crate::core::{
    Date, DecodeError, DecodeErrorKind, DecodePath, DecodeResult, DocumentRef, Module,
    ResponseError, ResponseResult, Tag, TagParseError, Time, Value,
};
pub use decode::{Decode, decode};
pub use response::{QueryInfo, QuerySuccess, RawResponse, Stats};
pub use session::{Session, config::SessionConfig, consistency::ConsistencyTracker};

/// Derive [`Decode`] for a struct with named fields.
///
/// Field attributes:
/// - `#[decode(rename = "wire_name")]` reads the field from `wire_name`
/// - `#[decode(skip)]` never reads the field; it stays at its default
///
/// Every field type must implement [`Decode`] and [`Default`].
pub use fauna_response_derive::Decode;
