//! Best-first search guided by semantic relatedness to the target.
//!
//! The frontier is a max-priority queue keyed by `score(n, target)`. The
//! heuristic is not admissible, so this strategy finds *a* path, not a
//! shortest one, and on hub-heavy regions it may find none at all before the
//! budget trips. Every node's score is evaluated once, at enqueue time, and
//! stored in its frontier entry; a node is never re-enqueued, so the queue
//! ordering stays consistent even when the scoring backend is unstable
//! across calls.
//!
//! A failed score does not abort the search: the node joins a single
//! "unknown score" class that sorts below every known score, so a flaky
//! scorer degrades the walk toward plain BFS order instead of killing it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use roaring::RoaringBitmap;
use tracing::{debug, trace};
use wikipath_graph::{LinkOracle, NodeId, ScoreOracle};

use crate::budget::{Budget, CancelToken};
use crate::frame::{chain_to_root, trivial_report, InterruptGuard, PredMap};
use crate::report::{Outcome, SearchCounters, SearchReport};
use crate::SearchError;

/// Memoized similarity, `None` when the scoring oracle failed. Unknowns are
/// one equivalence class below every known score.
#[derive(Debug, Clone, Copy)]
struct ScoreKey(Option<f64>);

impl PartialEq for ScoreKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoreKey {}

impl Ord for ScoreKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.total_cmp(&b),
        }
    }
}

impl PartialOrd for ScoreKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier entry. Higher score wins; equal scores pop in insertion order.
#[derive(Debug)]
struct Entry {
    key: ScoreKey,
    seq: u64,
    node: NodeId,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search from `source` to `target`, ordered by
/// `scorer.score(n, target)`.
pub fn best_first(
    links: &dyn LinkOracle,
    scorer: &dyn ScoreOracle,
    source: NodeId,
    target: NodeId,
    budget: &Budget,
    cancel: &CancelToken,
) -> Result<SearchReport, SearchError> {
    if source == target {
        return Ok(trivial_report(source));
    }

    let guard = InterruptGuard::new(budget, cancel);
    let mut counters = SearchCounters::default();
    let mut frontier: BinaryHeap<Entry> = BinaryHeap::new();
    let mut enqueued = RoaringBitmap::new();
    let mut pred = PredMap::default();
    let mut next_seq = 0u64;

    if budget.node_limit == 0 {
        return Ok(SearchReport::empty(Outcome::Budget, counters));
    }
    frontier.push(Entry {
        key: score_of(scorer, source, target),
        seq: next_seq,
        node: source,
    });
    next_seq += 1;
    enqueued.insert(source.raw());
    pred.insert(source, None);
    counters.nodes_enqueued = 1;

    while let Some(entry) = frontier.pop() {
        if guard.interrupted() {
            return Ok(SearchReport::empty(Outcome::Budget, counters));
        }
        let node = entry.node;
        counters.nodes_expanded += 1;

        if node == target {
            let mut path = chain_to_root(&pred, node);
            path.reverse();
            debug!(
                hops = path.len() - 1,
                expanded = counters.nodes_expanded,
                "best-first found path"
            );
            return Ok(SearchReport::found(path, counters));
        }

        let mut examined_here = 0usize;
        for link in links.outgoing(node)? {
            let link = link?;
            if !link.parseable {
                continue;
            }
            if examined_here == budget.fanout_cap {
                break;
            }
            examined_here += 1;
            counters.edges_examined += 1;

            if enqueued.contains(link.dest.raw()) {
                continue;
            }
            if counters.nodes_enqueued == budget.node_limit {
                return Ok(SearchReport::empty(Outcome::Budget, counters));
            }
            pred.insert(link.dest, Some(node));
            enqueued.insert(link.dest.raw());
            frontier.push(Entry {
                key: score_of(scorer, link.dest, target),
                seq: next_seq,
                node: link.dest,
            });
            next_seq += 1;
            counters.nodes_enqueued += 1;
        }
    }

    debug!(
        expanded = counters.nodes_expanded,
        "best-first exhausted frontier"
    );
    Ok(SearchReport::empty(Outcome::Exhausted, counters))
}

fn score_of(scorer: &dyn ScoreOracle, node: NodeId, target: NodeId) -> ScoreKey {
    match scorer.score(node, target) {
        Ok(s) => ScoreKey(Some(s)),
        Err(e) => {
            trace!(node = node.raw(), error = %e, "score unavailable, demoting node");
            ScoreKey(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_scores_sort_below_known() {
        assert!(ScoreKey(None) < ScoreKey(Some(0.0)));
        assert!(ScoreKey(None) < ScoreKey(Some(-1.0)));
        assert_eq!(ScoreKey(None).cmp(&ScoreKey(None)), Ordering::Equal);
        assert!(ScoreKey(Some(0.2)) < ScoreKey(Some(0.7)));
    }

    #[test]
    fn equal_scores_pop_in_insertion_order() {
        let mut heap = BinaryHeap::new();
        for (seq, node) in [(0u64, 11u32), (1, 22), (2, 33)] {
            heap.push(Entry {
                key: ScoreKey(Some(0.5)),
                seq,
                node: NodeId::new(node),
            });
        }
        let popped: Vec<u32> = std::iter::from_fn(|| heap.pop().map(|e| e.node.raw())).collect();
        assert_eq!(popped, vec![11, 22, 33]);
    }
}
