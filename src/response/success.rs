use super::query_info::QueryInfo;
use super::raw::RawResponse;
use crate::core::{DecodeResult, Value};
use crate::decode::{self, Decode};

/// Result of a query that ran successfully.
///
/// The payload is kept untyped; call [`QuerySuccess::decode`] as often as
/// needed to project it onto concrete types.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySuccess {
    pub info: QueryInfo,

    /// Raw result returned by the query.
    pub data: Value,

    /// Inferred static result type; empty when the query was not typechecked.
    pub static_type: String,
}

impl QuerySuccess {
    pub fn new(info: QueryInfo, data: Value, static_type: impl Into<String>) -> Self {
        Self {
            info,
            data,
            static_type: static_type.into(),
        }
    }

    /// Lenient construction: malformed tags become an empty map.
    pub fn from_response(res: RawResponse) -> Self {
        let info = QueryInfo::from_response(&res);
        Self::from_parts(info, res)
    }

    pub(crate) fn from_parts(info: QueryInfo, res: RawResponse) -> Self {
        Self::new(info, res.data, res.static_type.unwrap_or_default())
    }

    pub fn info(&self) -> &QueryInfo {
        &self.info
    }

    pub fn txn_time(&self) -> i64 {
        self.info.txn_time
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Decode the payload into `T`. Leaves the envelope untouched.
    pub fn decode<T: Decode>(&self) -> DecodeResult<T> {
        decode::decode(&self.data)
    }

    pub fn into_data(self) -> Value {
        self.data
    }
}
