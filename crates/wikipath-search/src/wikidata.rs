//! Breadth-first search over the Wikidata item/property statement graph.
//!
//! Structurally the same walk as plain BFS, but each hop is an item-valued
//! statement and the property labelling it is preserved: a second
//! predecessor map records, for every discovered item, the property of the
//! statement that led there. Reconstruction therefore yields the node chain
//! and the matching label chain (`labels.len() == path.len() - 1`).
//! Statements whose value is not an item (strings, quantities, timestamps)
//! are skipped silently. Traversal is forward-only over each item's own
//! statement set.

use std::collections::VecDeque;

use ahash::AHashMap;
use roaring::RoaringBitmap;
use tracing::debug;
use wikipath_graph::{NodeId, PropertyId, StatementOracle};

use crate::budget::{Budget, CancelToken};
use crate::frame::{trivial_report, InterruptGuard, PredMap};
use crate::report::{Outcome, SearchCounters, SearchReport};
use crate::SearchError;

/// BFS from item `source` to item `target` along item-valued statements.
pub fn wikidata_bfs(
    statements: &dyn StatementOracle,
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
    // Property of the statement that discovered each item; roots absent.
    let mut pred_label: AHashMap<NodeId, PropertyId> = AHashMap::new();

    if budget.node_limit == 0 {
        return Ok(SearchReport::empty(Outcome::Budget, counters));
    }
    frontier.push_back(source);
    visited.insert(source.raw());
    pred.insert(source, None);
    counters.nodes_enqueued = 1;

    while let Some(item) = frontier.pop_front() {
        if guard.interrupted() {
            return Ok(SearchReport::empty(Outcome::Budget, counters));
        }
        counters.nodes_expanded += 1;

        if item == target {
            let (path, labels) = reconstruct_labelled(&pred, &pred_label, item);
            debug!(
                hops = path.len() - 1,
                expanded = counters.nodes_expanded,
                "wikidata bfs found path"
            );
            return Ok(SearchReport::found_labelled(path, labels, counters));
        }

        let mut examined_here = 0usize;
        for statement in statements.statements_of(item)? {
            let statement = statement?;
            let Some(neighbor) = statement.value.as_item() else {
                continue;
            };
            if examined_here == budget.fanout_cap {
                break;
            }
            examined_here += 1;
            counters.edges_examined += 1;

            if visited.contains(neighbor.raw()) {
                continue;
            }
            if counters.nodes_enqueued == budget.node_limit {
                return Ok(SearchReport::empty(Outcome::Budget, counters));
            }
            pred.insert(neighbor, Some(item));
            pred_label.insert(neighbor, statement.property);
            visited.insert(neighbor.raw());
            frontier.push_back(neighbor);
            counters.nodes_enqueued += 1;
        }
    }

    debug!(
        expanded = counters.nodes_expanded,
        "wikidata bfs exhausted frontier"
    );
    Ok(SearchReport::empty(Outcome::Exhausted, counters))
}

/// Walk both predecessor maps back from the target, emitting the node chain
/// and the property chain in forward order.
fn reconstruct_labelled(
    pred: &PredMap,
    pred_label: &AHashMap<NodeId, PropertyId>,
    target: NodeId,
) -> (Vec<NodeId>, Vec<PropertyId>) {
    let mut path = vec![target];
    let mut labels = Vec::new();
    let mut current = target;
    while let Some(Some(parent)) = pred.get(&current) {
        if let Some(label) = pred_label.get(&current) {
            labels.push(*label);
        }
        path.push(*parent);
        current = *parent;
    }
    path.reverse();
    labels.reverse();
    (path, labels)
}
