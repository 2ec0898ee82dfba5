// ============================================================================
// Read-your-writes tracking
// ============================================================================
//
// Each completed query reports the commit time of its transaction. The
// session keeps the highest one seen and sends it with the next request so
// the service never answers from a snapshot older than the client's own
// writes.
//
// ============================================================================

use std::sync::atomic::{AtomicI64, Ordering};

/// Highest transaction time observed on a session.
///
/// Zero means nothing has been observed yet. Safe to share across threads;
/// `observe` is a single atomic max, so completion order does not matter.
#[derive(Debug, Default)]
pub struct ConsistencyTracker {
    last_txn_time: AtomicI64,
}

impl ConsistencyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the tracked value to `txn_time` if it is newer.
    ///
    /// Returns `true` when the tracked value advanced.
    pub fn observe(&self, txn_time: i64) -> bool {
        let previous = self.last_txn_time.fetch_max(txn_time, Ordering::SeqCst);
        txn_time > previous
    }

    /// Last observed transaction time, or `None` before the first observation.
    pub fn current(&self) -> Option<i64> {
        match self.last_txn_time.load(Ordering::SeqCst) {
            t if t > 0 => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_unset_until_observed() {
        let tracker = ConsistencyTracker::new();
        assert_eq!(tracker.current(), None);
        assert!(!tracker.observe(0));
        assert_eq!(tracker.current(), None);
        assert!(tracker.observe(5));
        assert_eq!(tracker.current(), Some(5));
    }

    #[test]
    fn test_never_decreases() {
        let tracker = ConsistencyTracker::new();
        assert!(tracker.observe(10));
        assert!(!tracker.observe(3));
        assert!(!tracker.observe(10));
        assert_eq!(tracker.current(), Some(10));
        assert!(tracker.observe(11));
        assert_eq!(tracker.current(), Some(11));
    }

    #[test]
    fn test_concurrent_observe_keeps_max() {
        let tracker = Arc::new(ConsistencyTracker::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let tracker = Arc::clone(&tracker);
                thread::spawn(move || {
                    let mut last = 0;
                    for i in (0..1_000i64).rev().chain(0..1_000) {
                        tracker.observe(i * 8 + t);
                        let now = tracker.current().unwrap_or(0);
                        assert!(now >= last);
                        last = now;
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(tracker.current(), Some(999 * 8 + 7));
    }
}
