//! Bidirectional breadth-first search meeting in the middle.
//!
//! Two frontiers grow toward each other, the forward one over `outgoing`
//! links and the reverse one over `incoming` links. Each round expands one
//! complete level of the smaller frontier (classic load balancing). A
//! neighbor found in the opposite side's visited set is a meeting
//! candidate; the level is always scanned to its end and the candidate
//! whose joined path is shortest wins. Expanding whole levels is what keeps
//! the result at shortest-path length on the unit-weight graph: popping
//! single nodes would let one side run a level ahead of the other and
//! declare a meeting through a deeper node while a shorter one is still
//! sitting undiscovered in the same level.

use std::collections::VecDeque;

use roaring::RoaringBitmap;
use tracing::debug;
use wikipath_graph::{LinkOracle, NodeId};

use crate::budget::{Budget, CancelToken};
use crate::frame::{chain_to_root, trivial_report, InterruptGuard, PredMap};
use crate::report::{Outcome, SearchCounters, SearchReport};
use crate::SearchError;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Reverse,
}

struct Side {
    frontier: VecDeque<NodeId>,
    visited: RoaringBitmap,
    pred: PredMap,
}

impl Side {
    fn seeded(root: NodeId) -> Self {
        let mut side = Side {
            frontier: VecDeque::new(),
            visited: RoaringBitmap::new(),
            pred: PredMap::default(),
        };
        side.frontier.push_back(root);
        side.visited.insert(root.raw());
        side.pred.insert(root, None);
        side
    }
}

/// How a level expansion ended.
enum LevelEnd {
    /// At least one meeting candidate was seen; this is the shortest.
    Met(Vec<NodeId>),
    /// No meeting; the next frontier is in place.
    Open,
    /// Budget or cancellation tripped before any meeting.
    Cut,
}

/// Bidirectional BFS from `source` to `target` over parseable links.
pub fn bidirectional(
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

    if budget.node_limit < 2 {
        return Ok(SearchReport::empty(Outcome::Budget, counters));
    }
    let mut fwd = Side::seeded(source);
    let mut rev = Side::seeded(target);
    counters.nodes_enqueued = 2;

    while !fwd.frontier.is_empty() && !rev.frontier.is_empty() {
        let direction = if fwd.frontier.len() < rev.frontier.len() {
            Direction::Forward
        } else {
            Direction::Reverse
        };
        let end = match direction {
            Direction::Forward => {
                expand_level(links, direction, &mut fwd, &rev, budget, &guard, &mut counters)?
            }
            Direction::Reverse => {
                expand_level(links, direction, &mut rev, &fwd, budget, &guard, &mut counters)?
            }
        };
        match end {
            LevelEnd::Met(path) => {
                debug!(
                    hops = path.len() - 1,
                    expanded = counters.nodes_expanded,
                    "bidirectional search met in the middle"
                );
                return Ok(SearchReport::found(path, counters));
            }
            LevelEnd::Cut => {
                return Ok(SearchReport::empty(Outcome::Budget, counters));
            }
            LevelEnd::Open => {}
        }
    }

    debug!(
        expanded = counters.nodes_expanded,
        "bidirectional search exhausted a frontier"
    );
    Ok(SearchReport::empty(Outcome::Exhausted, counters))
}

/// Expand every node currently in `this.frontier` as one BFS level.
///
/// Within a level all expanded nodes sit at the same depth, so meeting
/// candidates differ in length only through the opposite side's depth of
/// the met node; the scan keeps the shortest joined path seen. Once a
/// candidate exists the search is over after this level, so discovery stops
/// growing the next frontier.
fn expand_level(
    links: &dyn LinkOracle,
    direction: Direction,
    this: &mut Side,
    other: &Side,
    budget: &Budget,
    guard: &InterruptGuard<'_>,
    counters: &mut SearchCounters,
) -> Result<LevelEnd, SearchError> {
    let mut best: Option<Vec<NodeId>> = None;
    let width = this.frontier.len();

    for _ in 0..width {
        if guard.interrupted() {
            return Ok(match best {
                Some(path) => LevelEnd::Met(path),
                None => LevelEnd::Cut,
            });
        }
        let Some(node) = this.frontier.pop_front() else {
            break;
        };
        counters.nodes_expanded += 1;

        let stream = match direction {
            Direction::Forward => links.outgoing(node)?,
            Direction::Reverse => links.incoming(node)?,
        };
        let mut examined_here = 0usize;
        for link in stream {
            let link = link?;
            if !link.parseable {
                continue;
            }
            if examined_here == budget.fanout_cap {
                break;
            }
            examined_here += 1;
            counters.edges_examined += 1;

            let neighbor = match direction {
                Direction::Forward => link.dest,
                Direction::Reverse => link.source,
            };
            if this.visited.contains(neighbor.raw()) {
                continue;
            }
            if other.visited.contains(neighbor.raw()) {
                let path = match direction {
                    Direction::Forward => {
                        join_at_meeting(&this.pred, node, &other.pred, neighbor)
                    }
                    Direction::Reverse => {
                        join_at_meeting(&other.pred, neighbor, &this.pred, node)
                    }
                };
                if best.as_ref().map_or(true, |b| path.len() < b.len()) {
                    best = Some(path);
                }
                continue;
            }
            if best.is_some() {
                continue;
            }
            if counters.nodes_enqueued == budget.node_limit {
                return Ok(LevelEnd::Cut);
            }
            this.pred.insert(neighbor, Some(node));
            this.visited.insert(neighbor.raw());
            this.frontier.push_back(neighbor);
            counters.nodes_enqueued += 1;
        }
    }

    Ok(match best {
        Some(path) => LevelEnd::Met(path),
        None => LevelEnd::Open,
    })
}

/// Concatenate the two predecessor walks at the meeting edge.
///
/// `fwd_tail` is the last node known to the forward side, `rev_head` the
/// first node known to the reverse side; the meeting edge runs between them
/// so neither walk shares a node with the other.
fn join_at_meeting(
    fwd_pred: &PredMap,
    fwd_tail: NodeId,
    rev_pred: &PredMap,
    rev_head: NodeId,
) -> Vec<NodeId> {
    let mut path = chain_to_root(fwd_pred, fwd_tail);
    path.reverse(); // source .. fwd_tail
    path.extend(chain_to_root(rev_pred, rev_head)); // rev_head .. target
    path
}
