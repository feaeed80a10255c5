//! Oracle contracts the search engine consumes.
//!
//! These traits are the seam between the engine and whatever backend holds
//! the graph (SQL dumps, a live API, or [`MemGraph`](crate::memory::MemGraph)
//! in tests). Adjacency methods return boxed lazy iterators so a caller that
//! stops early (fan-out cap, meeting detection) never pays for the rest of a
//! hub's neighbor list.

use crate::error::StoreError;
use crate::{Language, Link, Namespace, NodeId, Statement};

/// Lazy, fallible stream of links. Items may fail mid-iteration when the
/// backing store does.
pub type Links<'a> = Box<dyn Iterator<Item = Result<Link, StoreError>> + 'a>;

/// Lazy, fallible stream of Wikidata statements.
pub type Statements<'a> = Box<dyn Iterator<Item = Result<Statement, StoreError>> + 'a>;

/// Forward and reverse adjacency of the page-link graph.
pub trait LinkOracle {
    /// Links whose source is `node`.
    fn outgoing(&self, node: NodeId) -> Result<Links<'_>, StoreError>;

    /// Links whose destination is `node`. Needed only for reverse expansion
    /// in bidirectional search.
    fn incoming(&self, node: NodeId) -> Result<Links<'_>, StoreError>;
}

/// The Wikidata statement set of an item.
///
/// Traversal is forward-only: there is no reverse-statement lookup, matching
/// the item graph walk this engine performs.
pub trait StatementOracle {
    /// All statements of `item`, item-valued or not; the engine filters.
    fn statements_of(&self, item: NodeId) -> Result<Statements<'_>, StoreError>;
}

/// Semantic-relatedness scoring between two nodes.
///
/// Scores fall in `[0, 1]`, higher meaning more similar. Callers must not
/// assume `score(a, b)` is stable across calls; the search engine memoizes
/// each node's score for the duration of one search. A failed score is not
/// fatal to a search: the engine demotes the node to an "unknown score"
/// class instead of aborting.
pub trait ScoreOracle {
    fn score(&self, a: NodeId, b: NodeId) -> Result<f64, StoreError>;
}

/// Any closure over two node ids can serve as a scoring oracle; test
/// fixtures and ad-hoc heuristics use this.
impl<F> ScoreOracle for F
where
    F: Fn(NodeId, NodeId) -> Result<f64, StoreError>,
{
    fn score(&self, a: NodeId, b: NodeId) -> Result<f64, StoreError> {
        self(a, b)
    }
}

/// Title ↔ node-id resolution within a language edition.
///
/// Used only to translate the string-based public API into id-based search
/// and to render result paths; never called during frontier expansion.
pub trait NameOracle {
    /// Resolve a title to a node id, `None` when no such page exists.
    fn id_of_title(
        &self,
        title: &str,
        language: &Language,
        namespace: Namespace,
    ) -> Result<Option<NodeId>, StoreError>;

    /// Resolve a node id back to its display title.
    fn title_of_id(&self, node: NodeId, language: &Language)
        -> Result<Option<String>, StoreError>;
}
