//! Budget enforcement and cancellation across all strategies.

use std::time::Duration;

use wikipath_graph::{MemGraph, NodeId, StatementValue, StoreError};
use wikipath_search::{
    best_first, bfs, bidirectional, wikidata_bfs, Budget, CancelToken, Outcome, SearchReport,
};

fn n(raw: u32) -> NodeId {
    NodeId::new(raw)
}

fn long_chain(len: u32) -> MemGraph {
    let mut g = MemGraph::new();
    for i in 1..len {
        g.add_link(n(i), n(i + 1), true);
    }
    g
}

fn flat_score(_: NodeId, _: NodeId) -> Result<f64, StoreError> {
    Ok(0.5)
}

fn assert_budget_report(report: &SearchReport, node_limit: u64) {
    assert_eq!(report.outcome, Outcome::Budget);
    assert!(report.path.is_empty());
    assert!(report.counters.nodes_enqueued <= node_limit);
}

#[test]
fn node_limit_stops_bfs() {
    let g = long_chain(200);
    let budget = Budget::default().with_node_limit(10);
    let report = bfs(&g, n(1), n(200), &budget, &CancelToken::new()).unwrap();
    assert_budget_report(&report, 10);
    assert_eq!(report.counters.nodes_enqueued, 10);
}

#[test]
fn node_limit_stops_every_strategy() {
    let mut g = long_chain(100);
    for i in 1..100 {
        g.add_statement(n(i), wikipath_graph::PropertyId::new(5), StatementValue::Item(n(i + 1)));
    }
    let budget = Budget::default().with_node_limit(5);
    let cancel = CancelToken::new();

    assert_budget_report(&bfs(&g, n(1), n(100), &budget, &cancel).unwrap(), 5);
    assert_budget_report(&bidirectional(&g, n(1), n(100), &budget, &cancel).unwrap(), 5);
    assert_budget_report(
        &best_first(&g, &flat_score, n(1), n(100), &budget, &cancel).unwrap(),
        5,
    );
    assert_budget_report(&wikidata_bfs(&g, n(1), n(100), &budget, &cancel).unwrap(), 5);
}

#[test]
fn hub_fanout_is_capped() {
    let mut g = MemGraph::new();
    for i in 0..10 {
        g.add_link(n(1), n(10 + i), true);
    }

    let budget = Budget::default().with_fanout_cap(3);
    let report = bfs(&g, n(1), n(99), &budget, &CancelToken::new()).unwrap();
    // The search proceeds past the hub and legitimately exhausts; only the
    // capped number of edges was ever examined.
    assert_eq!(report.outcome, Outcome::Exhausted);
    assert_eq!(report.counters.edges_examined, 3);
    assert_eq!(report.counters.nodes_enqueued, 4);
}

#[test]
fn fanout_cap_counts_post_filter_edges() {
    let mut g = MemGraph::new();
    // Two template links in front, then four parseable ones.
    g.add_link(n(1), n(90), false);
    g.add_link(n(1), n(91), false);
    for i in 0..4 {
        g.add_link(n(1), n(10 + i), true);
    }

    let budget = Budget::default().with_fanout_cap(2);
    let report = bfs(&g, n(1), n(99), &budget, &CancelToken::new()).unwrap();
    assert_eq!(report.counters.edges_examined, 2);
    assert_eq!(report.counters.nodes_enqueued, 3);
}

#[test]
fn zero_time_limit_trips_immediately() {
    let g = long_chain(50);
    let budget = Budget::default().with_time_limit(Duration::ZERO);
    let report = bfs(&g, n(1), n(50), &budget, &CancelToken::new()).unwrap();
    assert_eq!(report.outcome, Outcome::Budget);
    assert!(report.path.is_empty());
    // The root was seeded before the deadline check.
    assert_eq!(report.counters.nodes_enqueued, 1);
    assert_eq!(report.counters.nodes_expanded, 0);
}

#[test]
fn pre_cancelled_token_stops_the_search() {
    let g = long_chain(50);
    let cancel = CancelToken::new();
    cancel.cancel();

    let report = bfs(&g, n(1), n(50), &Budget::default(), &cancel).unwrap();
    assert_eq!(report.outcome, Outcome::Budget);
    assert_eq!(report.counters.nodes_expanded, 0);

    let report = bidirectional(&g, n(1), n(50), &Budget::default(), &cancel).unwrap();
    assert_eq!(report.outcome, Outcome::Budget);

    let report = wikidata_bfs(&g, n(1), n(50), &Budget::default(), &cancel).unwrap();
    assert_eq!(report.outcome, Outcome::Budget);
}

#[test]
fn trivial_search_ignores_cancellation() {
    // source == target answers before the first expansion boundary.
    let g = MemGraph::new();
    let cancel = CancelToken::new();
    cancel.cancel();
    let report = bfs(&g, n(3), n(3), &Budget::default(), &cancel).unwrap();
    assert_eq!(report.outcome, Outcome::Found);
}

#[test]
fn budget_reports_keep_partial_counters() {
    let g = long_chain(200);
    let budget = Budget::default().with_node_limit(7);
    let report = bfs(&g, n(1), n(200), &budget, &CancelToken::new()).unwrap();
    assert_eq!(report.outcome, Outcome::Budget);
    assert!(report.counters.edges_examined > 0);
    assert!(report.counters.nodes_expanded > 0);
}
