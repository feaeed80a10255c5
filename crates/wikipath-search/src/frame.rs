//! Machinery shared by every strategy: the predecessor map, the
//! reconstruction walk, and the interrupt guard polled between expansions.

use std::time::Instant;

use ahash::AHashMap;
use wikipath_graph::NodeId;

use crate::budget::{Budget, CancelToken};
use crate::report::{SearchCounters, SearchReport};

/// Predecessor map: node → node that discovered it. Frontier roots map to
/// `None`. Written exactly once per node, at enqueue time, so the walk below
/// can never cycle.
pub(crate) type PredMap = AHashMap<NodeId, Option<NodeId>>;

/// Walk predecessors from `start` back to its frontier root.
///
/// Returns `[start, pred(start), ..., root]` in walk order; callers on the
/// forward side reverse it to get root-first order.
pub(crate) fn chain_to_root(pred: &PredMap, start: NodeId) -> Vec<NodeId> {
    let mut chain = vec![start];
    let mut current = start;
    while let Some(Some(parent)) = pred.get(&current) {
        chain.push(*parent);
        current = *parent;
    }
    chain
}

/// The degenerate search `source == target`: every strategy answers without
/// touching an oracle.
pub(crate) fn trivial_report(source: NodeId) -> SearchReport {
    SearchReport::found(vec![source], SearchCounters::default())
}

/// Polled between node expansions; trips on cancellation or on the
/// wall-clock limit.
pub(crate) struct InterruptGuard<'a> {
    cancel: &'a CancelToken,
    deadline: Option<Instant>,
}

impl<'a> InterruptGuard<'a> {
    pub(crate) fn new(budget: &Budget, cancel: &'a CancelToken) -> Self {
        Self {
            cancel,
            deadline: budget.time_limit.map(|limit| Instant::now() + limit),
        }
    }

    pub(crate) fn interrupted(&self) -> bool {
        if self.cancel.is_cancelled() {
            return true;
        }
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }
}
