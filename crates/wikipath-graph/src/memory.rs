//! In-memory graph backend.
//!
//! `MemGraph` implements every oracle trait over plain adjacency vectors.
//! Enumeration order is insertion order, so searches against it are fully
//! deterministic. Tests, property fixtures, and doc examples use it where a
//! production deployment would wire SQL- or API-backed oracles.

use ahash::AHashMap;

use crate::error::StoreError;
use crate::oracle::{LinkOracle, Links, NameOracle, ScoreOracle, StatementOracle, Statements};
use crate::{Language, Link, Namespace, NodeId, PropertyId, Statement, StatementValue};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TitleKey {
    language: String,
    namespace: Namespace,
    title: String,
}

/// In-memory link/statement graph with a title registry.
#[derive(Debug, Default)]
pub struct MemGraph {
    out: AHashMap<NodeId, Vec<Link>>,
    inc: AHashMap<NodeId, Vec<Link>>,
    statements: AHashMap<NodeId, Vec<Statement>>,
    id_by_title: AHashMap<TitleKey, NodeId>,
    title_by_id: AHashMap<(NodeId, String), String>,
}

impl MemGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed page link. Both adjacency directions are indexed.
    pub fn add_link(&mut self, source: NodeId, dest: NodeId, parseable: bool) {
        let link = Link::new(source, dest, parseable);
        self.out.entry(source).or_default().push(link);
        self.inc.entry(dest).or_default().push(link);
    }

    /// Add a Wikidata statement to an item.
    pub fn add_statement(&mut self, item: NodeId, property: PropertyId, value: StatementValue) {
        self.statements
            .entry(item)
            .or_default()
            .push(Statement::new(property, value));
    }

    /// Register a title for a node within a language edition.
    pub fn set_title(
        &mut self,
        node: NodeId,
        language: &Language,
        namespace: Namespace,
        title: impl Into<String>,
    ) {
        let title = title.into();
        self.id_by_title.insert(
            TitleKey {
                language: language.code().to_string(),
                namespace,
                title: title.clone(),
            },
            node,
        );
        self.title_by_id
            .insert((node, language.code().to_string()), title);
    }

}

impl LinkOracle for MemGraph {
    fn outgoing(&self, node: NodeId) -> Result<Links<'_>, StoreError> {
        let links = self.out.get(&node).map(Vec::as_slice).unwrap_or(&[]);
        Ok(Box::new(links.iter().copied().map(Ok)))
    }

    fn incoming(&self, node: NodeId) -> Result<Links<'_>, StoreError> {
        let links = self.inc.get(&node).map(Vec::as_slice).unwrap_or(&[]);
        Ok(Box::new(links.iter().copied().map(Ok)))
    }
}

impl StatementOracle for MemGraph {
    fn statements_of(&self, item: NodeId) -> Result<Statements<'_>, StoreError> {
        let stmts = self.statements.get(&item).map(Vec::as_slice).unwrap_or(&[]);
        Ok(Box::new(stmts.iter().cloned().map(Ok)))
    }
}

impl NameOracle for MemGraph {
    fn id_of_title(
        &self,
        title: &str,
        language: &Language,
        namespace: Namespace,
    ) -> Result<Option<NodeId>, StoreError> {
        let key = TitleKey {
            language: language.code().to_string(),
            namespace,
            title: title.to_string(),
        };
        Ok(self.id_by_title.get(&key).copied())
    }

    fn title_of_id(
        &self,
        node: NodeId,
        language: &Language,
    ) -> Result<Option<String>, StoreError> {
        Ok(self
            .title_by_id
            .get(&(node, language.code().to_string()))
            .cloned())
    }
}

/// Fixture scorer over a fixed table, `None` entries fail like a flaky
/// backend would. Only test and demo code constructs this.
#[derive(Debug, Default)]
pub struct TableScorer {
    scores: AHashMap<(NodeId, NodeId), Option<f64>>,
}

impl TableScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, a: NodeId, b: NodeId, score: f64) {
        self.scores.insert((a, b), Some(score));
    }

    /// Make `score(a, b)` fail, simulating a flaky SR backend.
    pub fn set_failing(&mut self, a: NodeId, b: NodeId) {
        self.scores.insert((a, b), None);
    }
}

impl ScoreOracle for TableScorer {
    fn score(&self, a: NodeId, b: NodeId) -> Result<f64, StoreError> {
        match self.scores.get(&(a, b)) {
            Some(Some(s)) => Ok(*s),
            Some(None) => Err(StoreError::backend("sr metric unavailable")),
            None => Ok(0.0),
        }
    }
}
