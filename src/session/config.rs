/// Header carrying the last seen transaction time on outgoing requests.
pub const DEFAULT_CONSISTENCY_HEADER: &str = "x-last-txn-ts";

/// Session configuration
///
/// Controls how responses are turned into results and how consistency
/// information is propagated to later requests.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Fail response processing on malformed query tags instead of
    /// substituting an empty tag map
    pub strict_query_tags: bool,

    /// Record each response's transaction time for read-your-writes
    pub track_consistency: bool,

    /// Request header name for the last seen transaction time
    pub consistency_header: String,
}

impl SessionConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            strict_query_tags: false,
            track_consistency: true,
            consistency_header: DEFAULT_CONSISTENCY_HEADER.to_string(),
        }
    }

    /// Set strict query tag parsing
    pub fn strict_query_tags(mut self, strict: bool) -> Self {
        self.strict_query_tags = strict;
        self
    }

    /// Enable or disable transaction time tracking
    pub fn track_consistency(mut self, track: bool) -> Self {
        self.track_consistency = track;
        self
    }

    /// Set the consistency header name
    pub fn consistency_header(mut self, name: &str) -> Self {
        self.consistency_header = name.to_string();
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
