//! Graph model and oracle contracts for the wikipath concept-relation finder.
//!
//! The link graph (Wikipedia pages or Wikidata items) is far too large to
//! materialize in memory, so the search engine in `wikipath-search` reaches
//! it exclusively through the pull-based oracle traits defined here:
//!
//! - [`LinkOracle`] — forward/reverse adjacency of the page-link graph
//! - [`StatementOracle`] — the Wikidata item/property statement graph
//! - [`ScoreOracle`] — semantic-relatedness scoring between two nodes
//! - [`NameOracle`] — title ↔ node-id resolution
//!
//! Every oracle call is assumed to be expensive (a database round-trip or a
//! disk read in production backends), so all adjacency methods hand back lazy
//! iterators that the caller can abandon early.
//!
//! [`MemGraph`] is the in-memory backend used by tests and demo drivers.

pub mod error;
pub mod memory;
pub mod oracle;

use serde::{Deserialize, Serialize};

pub use error::StoreError;
pub use memory::{MemGraph, TableScorer};
pub use oracle::{LinkOracle, Links, NameOracle, ScoreOracle, StatementOracle, Statements};

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a node in the link graph: a page id (Wikipedia) or an item
/// id (Wikidata), scoped to one language edition.
///
/// Compared by value everywhere. Ids are assigned by the backing store and
/// never change during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a Wikidata property (the predicate labelling a statement
/// edge, e.g. P31 "instance of").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PropertyId(u32);

impl PropertyId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

// ============================================================================
// Language / namespace scope
// ============================================================================

/// A language edition of Wikipedia ("en", "de", "simple", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language(String);

impl Language {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wiki namespace a title lives in. Only articles participate in link
/// searches; the others exist so title resolution can be scoped correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Namespace {
    Article,
    Category,
    Template,
    Other,
}

// ============================================================================
// Edges
// ============================================================================

/// A directed page link.
///
/// `parseable` distinguishes links authored directly in wiki markup from
/// links materialized by template expansion; only parseable links participate
/// in link-based searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub source: NodeId,
    pub dest: NodeId,
    pub parseable: bool,
}

impl Link {
    pub fn new(source: NodeId, dest: NodeId, parseable: bool) -> Self {
        Self {
            source,
            dest,
            parseable,
        }
    }
}

/// The value slot of a Wikidata statement. Searches follow `Item` values
/// only; the other kinds are carried so backends can expose full statements
/// without pre-filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementValue {
    Item(NodeId),
    Text(String),
    Quantity(f64),
    Time(String),
    Other,
}

impl StatementValue {
    /// The target item id, if this statement points at another item.
    pub fn as_item(&self) -> Option<NodeId> {
        match self {
            StatementValue::Item(id) => Some(*id),
            _ => None,
        }
    }
}

/// One Wikidata statement of an item: a property edge and its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub property: PropertyId,
    pub value: StatementValue,
}

impl Statement {
    pub fn new(property: PropertyId, value: StatementValue) -> Self {
        Self { property, value }
    }
}
