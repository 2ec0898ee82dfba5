use serde::{Deserialize, Serialize};

/// Resource usage reported for a single query.
///
/// Counters absent from the response, or sent as `null`, decode as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    /// Transactional compute ops consumed by the query.
    #[serde(deserialize_with = "super::serde_null::deserialize")]
    pub compute_ops: u64,

    /// Transactional read ops consumed by the query.
    #[serde(deserialize_with = "super::serde_null::deserialize")]
    pub read_ops: u64,

    /// Transactional write ops consumed by the query.
    #[serde(deserialize_with = "super::serde_null::deserialize")]
    pub write_ops: u64,

    /// Query run time in milliseconds.
    #[serde(deserialize_with = "super::serde_null::deserialize")]
    pub query_time_ms: u64,

    /// Times the transaction was retried due to write contention.
    #[serde(deserialize_with = "super::serde_null::deserialize")]
    pub contention_retries: u64,

    /// Data read from storage, in bytes.
    #[serde(deserialize_with = "super::serde_null::deserialize")]
    pub storage_bytes_read: u64,

    /// Data written to storage, in bytes.
    #[serde(deserialize_with = "super::serde_null::deserialize")]
    pub storage_bytes_write: u64,
}
