pub mod query_info;
pub mod raw;
mod serde_null;
pub mod stats;
pub mod success;

pub use query_info::{QueryInfo, parse_query_tags};
pub use raw::RawResponse;
pub use stats::Stats;
pub use success::QuerySuccess;
