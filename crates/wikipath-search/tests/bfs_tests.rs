//! Unidirectional BFS behavior on small fixtures.

use wikipath_graph::{LinkOracle, Links, MemGraph, NodeId, StoreError};
use wikipath_search::{bfs, Budget, CancelToken, Outcome};

fn n(raw: u32) -> NodeId {
    NodeId::new(raw)
}

fn ids(raws: &[u32]) -> Vec<NodeId> {
    raws.iter().copied().map(NodeId::new).collect()
}

#[test]
fn finds_linear_chain() {
    let mut g = MemGraph::new();
    g.add_link(n(1), n(2), true);
    g.add_link(n(2), n(3), true);
    g.add_link(n(3), n(4), true);

    let report = bfs(&g, n(1), n(4), &Budget::default(), &CancelToken::new()).unwrap();
    assert_eq!(report.outcome, Outcome::Found);
    assert_eq!(report.path, ids(&[1, 2, 3, 4]));
    assert_eq!(report.degrees(), Some(3));
    assert!(report.labels.is_empty());
    assert_eq!(report.counters.edges_examined, 3);
    assert_eq!(report.counters.nodes_enqueued, 4);
    assert_eq!(report.counters.nodes_expanded, 4);
}

#[test]
fn unparseable_direct_link_forces_detour() {
    let mut g = MemGraph::new();
    g.add_link(n(1), n(2), false);
    g.add_link(n(1), n(3), true);
    g.add_link(n(3), n(2), true);

    let report = bfs(&g, n(1), n(2), &Budget::default(), &CancelToken::new()).unwrap();
    assert_eq!(report.outcome, Outcome::Found);
    assert_eq!(report.path, ids(&[1, 3, 2]));
}

#[test]
fn source_equals_target() {
    let g = MemGraph::new();
    let report = bfs(&g, n(7), n(7), &Budget::default(), &CancelToken::new()).unwrap();
    assert_eq!(report.outcome, Outcome::Found);
    assert_eq!(report.path, vec![n(7)]);
    assert_eq!(report.counters.edges_examined, 0);
    assert_eq!(report.counters.nodes_enqueued, 0);
    assert_eq!(report.counters.nodes_expanded, 0);
}

#[test]
fn dead_end_source_exhausts_after_one_expansion() {
    let mut g = MemGraph::new();
    g.add_link(n(1), n(2), false); // nothing parseable out of 1

    let report = bfs(&g, n(1), n(2), &Budget::default(), &CancelToken::new()).unwrap();
    assert_eq!(report.outcome, Outcome::Exhausted);
    assert!(report.path.is_empty());
    assert_eq!(report.counters.nodes_expanded, 1);
    assert_eq!(report.counters.edges_examined, 0);
}

#[test]
fn disconnected_pair_is_exhausted_within_budget() {
    let mut g = MemGraph::new();
    // Two components: {1, 3} and {2, 4}.
    g.add_link(n(1), n(3), true);
    g.add_link(n(2), n(4), true);

    let budget = Budget::default().with_node_limit(100);
    let report = bfs(&g, n(1), n(2), &budget, &CancelToken::new()).unwrap();
    assert_eq!(report.outcome, Outcome::Exhausted);
    assert!(report.path.is_empty());
    assert!(report.counters.nodes_enqueued <= 100);
}

#[test]
fn cycles_do_not_cause_revisits() {
    let mut g = MemGraph::new();
    g.add_link(n(1), n(2), true);
    g.add_link(n(2), n(3), true);
    g.add_link(n(3), n(1), true);

    let report = bfs(&g, n(1), n(9), &Budget::default(), &CancelToken::new()).unwrap();
    assert_eq!(report.outcome, Outcome::Exhausted);
    assert_eq!(report.counters.nodes_enqueued, 3);
    assert_eq!(report.counters.nodes_expanded, 3);
}

#[test]
fn reports_are_deterministic() {
    let mut g = MemGraph::new();
    for (s, d) in [(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)] {
        g.add_link(n(s), n(d), true);
    }
    let budget = Budget::default();
    let first = bfs(&g, n(1), n(5), &budget, &CancelToken::new()).unwrap();
    let second = bfs(&g, n(1), n(5), &budget, &CancelToken::new()).unwrap();
    assert_eq!(first, second);
}

/// Oracle whose adjacency stream fails partway through.
struct FlakyLinks;

impl LinkOracle for FlakyLinks {
    fn outgoing(&self, node: NodeId) -> Result<Links<'_>, StoreError> {
        if node == NodeId::new(1) {
            Ok(Box::new(
                [
                    Ok(wikipath_graph::Link::new(node, NodeId::new(2), true)),
                    Err(StoreError::backend("link table vanished")),
                ]
                .into_iter(),
            ))
        } else {
            Err(StoreError::backend("connection lost"))
        }
    }

    fn incoming(&self, _node: NodeId) -> Result<Links<'_>, StoreError> {
        Err(StoreError::backend("connection lost"))
    }
}

#[test]
fn store_errors_abort_the_search() {
    let err = bfs(
        &FlakyLinks,
        n(1),
        n(9),
        &Budget::default(),
        &CancelToken::new(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("link table vanished"));
}
