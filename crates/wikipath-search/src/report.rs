//! Search results.

use serde::{Deserialize, Serialize};
use wikipath_graph::{Language, NameOracle, NodeId, PropertyId, StoreError};

/// Terminal state of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A path was found and reconstructed.
    Found,
    /// The frontier drained without reaching the target: no path exists in
    /// the explored region.
    Exhausted,
    /// A resource bound tripped (node limit, deadline, or cancellation)
    /// before the search could finish.
    Budget,
}

/// Work counters, monotone over the lifetime of one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCounters {
    /// Edges inspected after filtering (parseable links, item-valued
    /// statements). Raw oracle-call counts are not reported.
    pub edges_examined: u64,
    /// Nodes placed on a frontier, roots included.
    pub nodes_enqueued: u64,
    /// Nodes dequeued and expanded.
    pub nodes_expanded: u64,
}

/// Result of one path search.
///
/// `path` is the ordered node chain from source to target, empty unless the
/// outcome is [`Outcome::Found`]. For Wikidata searches `labels[i]` is the
/// property that connects `path[i]` to `path[i + 1]`; link searches leave it
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub outcome: Outcome,
    pub path: Vec<NodeId>,
    pub labels: Vec<PropertyId>,
    pub counters: SearchCounters,
}

impl SearchReport {
    /// A terminal report with no path: `Exhausted` or `Budget`.
    pub(crate) fn empty(outcome: Outcome, counters: SearchCounters) -> Self {
        Self {
            outcome,
            path: Vec::new(),
            labels: Vec::new(),
            counters,
        }
    }

    pub(crate) fn found(path: Vec<NodeId>, counters: SearchCounters) -> Self {
        Self {
            outcome: Outcome::Found,
            path,
            labels: Vec::new(),
            counters,
        }
    }

    pub(crate) fn found_labelled(
        path: Vec<NodeId>,
        labels: Vec<PropertyId>,
        counters: SearchCounters,
    ) -> Self {
        debug_assert!(path.is_empty() || labels.len() == path.len() - 1);
        Self {
            outcome: Outcome::Found,
            path,
            labels,
            counters,
        }
    }

    /// Number of hops in the found path, `None` unless the outcome is
    /// [`Outcome::Found`].
    pub fn degrees(&self) -> Option<usize> {
        match self.outcome {
            Outcome::Found => Some(self.path.len().saturating_sub(1)),
            _ => None,
        }
    }

    /// Render the path as titles, resolving ids through `names`.
    ///
    /// Link paths come out as `A -> B -> C`; labelled paths interleave the
    /// property, `A -(P5)-> B`. Nodes without a registered title fall back
    /// to their numeric id.
    pub fn render(
        &self,
        names: &dyn NameOracle,
        language: &Language,
    ) -> Result<String, StoreError> {
        let mut out = String::new();
        for (i, node) in self.path.iter().enumerate() {
            if i > 0 {
                match self.labels.get(i - 1) {
                    Some(p) => {
                        out.push_str(" -(");
                        out.push_str(&p.to_string());
                        out.push_str(")-> ");
                    }
                    None => out.push_str(" -> "),
                }
            }
            match names.title_of_id(*node, language)? {
                Some(title) => out.push_str(&title),
                None => out.push_str(&node.to_string()),
            }
        }
        Ok(out)
    }
}
