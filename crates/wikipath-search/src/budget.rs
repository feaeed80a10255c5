//! Resource bounds and cancellation.
//!
//! The link graph contains unreachable pairs and hub nodes with six-figure
//! fan-out (disambiguation pages, list articles), so every strategy runs
//! under a [`Budget`] and polls a [`CancelToken`] between node expansions.
//! Tripping any bound ends the search with [`Outcome::Budget`] while keeping
//! the counters accumulated so far.
//!
//! [`Outcome::Budget`]: crate::report::Outcome::Budget

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Resource bounds enforced uniformly across all strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    /// Maximum number of nodes ever enqueued, frontier roots included.
    pub node_limit: u64,
    /// Wall-clock limit for the whole search, measured from the first
    /// expansion.
    pub time_limit: Option<Duration>,
    /// Maximum post-filter edges examined per node expansion. Caps the cost
    /// of hub nodes; the rest of the neighbor list is never pulled from the
    /// oracle.
    pub fanout_cap: usize,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            node_limit: 1_000_000,
            time_limit: None,
            fanout_cap: 100_000,
        }
    }
}

impl Budget {
    pub fn with_node_limit(mut self, node_limit: u64) -> Self {
        self.node_limit = node_limit;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn with_fanout_cap(mut self, fanout_cap: usize) -> Self {
        self.fanout_cap = fanout_cap;
        self
    }
}

/// Externally signalled cancellation, shared between the caller and a
/// running search. Cloning hands out another handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal the search to stop at its next expansion boundary.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
