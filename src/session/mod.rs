pub mod config;
pub mod consistency;

use crate::core::ResponseResult;
use crate::response::{QueryInfo, QuerySuccess, RawResponse};
use config::SessionConfig;
use consistency::ConsistencyTracker;
use std::sync::Arc;
use tracing::debug;

/// Client session
///
/// Owns the session's consistency state and turns raw responses into
/// [`QuerySuccess`] values. Clones share the same tracker, so a session can be
/// handed to concurrent tasks and every response still advances one clock.
///
/// # Examples
///
/// ```
/// use fauna_response::Session;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let session = Session::default();
/// assert!(session.consistency_header().is_none());
///
/// let res = session.process_body(br#"{"data": 1, "txn_ts": 1700000000000000}"#)?;
/// assert_eq!(res.decode::<i64>()?, 1);
///
/// let (name, value) = session.consistency_header().unwrap();
/// assert_eq!(name, "x-last-txn-ts");
/// assert_eq!(value, "1700000000000000");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SessionConfig,
    tracker: Arc<ConsistencyTracker>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            tracker: Arc::new(ConsistencyTracker::new()),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn tracker(&self) -> &Arc<ConsistencyTracker> {
        &self.tracker
    }

    /// Build the result for a completed query and record its transaction time.
    pub fn process_response(&self, res: RawResponse) -> ResponseResult<QuerySuccess> {
        let info = if self.config.strict_query_tags {
            QueryInfo::try_from_response(&res)?
        } else {
            QueryInfo::from_response(&res)
        };

        debug!(
            txn_time = info.txn_time,
            schema_version = info.schema_version,
            static_type = res.static_type.as_deref().unwrap_or(""),
            "query response processed"
        );

        if self.config.track_consistency {
            self.observe(info.txn_time);
        }

        Ok(QuerySuccess::from_parts(info, res))
    }

    /// Parse a JSON response body, then [`Session::process_response`].
    pub fn process_body(&self, body: &[u8]) -> ResponseResult<QuerySuccess> {
        let res = RawResponse::from_slice(body)?;
        self.process_response(res)
    }

    pub fn last_txn_time(&self) -> Option<i64> {
        self.tracker.current()
    }

    /// Seed the session with a transaction time learned elsewhere.
    ///
    /// Never moves the tracked value backwards.
    pub fn set_last_txn_time(&self, txn_time: i64) {
        self.observe(txn_time);
    }

    /// Header to attach to the next request, once a transaction time is known.
    pub fn consistency_header(&self) -> Option<(&str, String)> {
        self.tracker
            .current()
            .map(|t| (self.config.consistency_header.as_str(), t.to_string()))
    }

    fn observe(&self, txn_time: i64) {
        if self.tracker.observe(txn_time) {
            debug!(txn_time, "last transaction time advanced");
        }
    }
}
