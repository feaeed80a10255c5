//! Unidirectional breadth-first search over the parseable link subgraph.

use std::collections::VecDeque;

use roaring::RoaringBitmap;
use tracing::debug;
use wikipath_graph::{LinkOracle, NodeId};

use crate::budget::{Budget, CancelToken};
use crate::frame::{chain_to_root, trivial_report, InterruptGuard, PredMap};
use crate::report::{Outcome, SearchCounters, SearchReport};
use crate::SearchError;

/// Forward-only BFS from `source` to `target`.
///
/// The frontier is a FIFO and the target test happens on dequeue, so the
/// returned path length is the shortest-path distance over parseable links.
/// Ties break by enqueue order only.
pub fn bfs(
    links: &dyn LinkOracle,
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
    let mut frontier: VecDeque<NodeId> = VecDeque::new();
    let mut visited = RoaringBitmap::new();
    let mut pred = PredMap::default();

    if budget.node_limit == 0 {
        return Ok(SearchReport::empty(Outcome::Budget, counters));
    }
    frontier.push_back(source);
    visited.insert(source.raw());
    pred.insert(source, None);
    counters.nodes_enqueued = 1;

    while let Some(node) = frontier.pop_front() {
        if guard.interrupted() {
            return Ok(SearchReport::empty(Outcome::Budget, counters));
        }
        counters.nodes_expanded += 1;

        if node == target {
            let mut path = chain_to_root(&pred, node);
            path.reverse();
            debug!(
                hops = path.len() - 1,
                expanded = counters.nodes_expanded,
                "bfs found path"
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

            if visited.contains(link.dest.raw()) {
                continue;
            }
            if counters.nodes_enqueued == budget.node_limit {
                return Ok(SearchReport::empty(Outcome::Budget, counters));
            }
            pred.insert(link.dest, Some(node));
            visited.insert(link.dest.raw());
            frontier.push_back(link.dest);
            counters.nodes_enqueued += 1;
        }
    }

    debug!(expanded = counters.nodes_expanded, "bfs exhausted frontier");
    Ok(SearchReport::empty(Outcome::Exhausted, counters))
}
