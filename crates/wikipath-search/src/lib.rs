//! Concept-relation pathfinder.
//!
//! Given two entities in the Wikipedia link graph (or the Wikidata statement
//! graph), find a short connecting path. The graph is reached only through
//! the oracle traits of `wikipath-graph`; every strategy runs under a
//! [`Budget`] and honors a [`CancelToken`].
//!
//! Strategies:
//!
//! - [`bfs`] — forward-only breadth-first; shortest path over parseable links
//! - [`bidirectional`] — alternating bidirectional BFS, meets in the middle;
//!   same path lengths as [`bfs`] at a fraction of the expansions
//! - [`best_first`] — semantic-relatedness-guided best-first; finds *a* path,
//!   not a shortest one
//! - [`wikidata_bfs`] — BFS over item-valued Wikidata statements, reporting
//!   the property label of every hop
//!
//! [`PathFinder`] bundles oracle handles with a budget and dispatches by
//! [`Strategy`], including title-based lookup:
//!
//! ```
//! use wikipath_graph::{Language, MemGraph, Namespace, NodeId};
//! use wikipath_search::{PathFinder, Strategy};
//!
//! let mut graph = MemGraph::new();
//! graph.add_link(NodeId::new(1), NodeId::new(2), true);
//! let en = Language::new("en");
//! graph.set_title(NodeId::new(1), &en, Namespace::Article, "Minneapolis");
//! graph.set_title(NodeId::new(2), &en, Namespace::Article, "Minnesota");
//!
//! let finder = PathFinder::new(&graph).with_names(&graph);
//! let report = finder
//!     .find_path_by_title(Strategy::Bidirectional, "Minneapolis", "Minnesota", &en)
//!     .unwrap();
//! assert_eq!(report.degrees(), Some(1));
//! ```

pub mod budget;
pub mod report;

mod best_first;
mod bfs;
mod bidirectional;
mod frame;
mod wikidata;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wikipath_graph::{
    Language, LinkOracle, NameOracle, Namespace, NodeId, ScoreOracle, StatementOracle, StoreError,
};

pub use best_first::best_first;
pub use bfs::bfs;
pub use bidirectional::bidirectional;
pub use budget::{Budget, CancelToken};
pub use report::{Outcome, SearchCounters, SearchReport};
pub use wikidata::wikidata_bfs;

// ============================================================================
// Errors
// ============================================================================

/// Failures that abort a search. Budget exhaustion and "no path" are not
/// errors; they come back as [`Outcome::Budget`] / [`Outcome::Exhausted`]
/// reports.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A title-based lookup matched no page.
    #[error("no page titled {title:?} in language {language}")]
    TitleNotFound { title: String, language: Language },

    /// The requested strategy needs an oracle this finder was not given.
    #[error("{strategy:?} search requires a {oracle} oracle")]
    OracleMissing {
        strategy: Strategy,
        oracle: &'static str,
    },

    /// An oracle call failed; surfaced unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ============================================================================
// Strategy dispatch
// ============================================================================

/// The available path-search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Unidirectional breadth-first over parseable links.
    Bfs,
    /// Bidirectional breadth-first, meeting in the middle.
    Bidirectional,
    /// Best-first ordered by semantic relatedness to the target.
    BestFirst,
    /// Breadth-first over item-valued Wikidata statements, with labels.
    Wikidata,
}

/// Oracle handles plus resource policy, bundled for dispatch.
///
/// Only the link oracle is mandatory; attach a scorer for
/// [`Strategy::BestFirst`], a statement oracle for [`Strategy::Wikidata`],
/// and a name oracle for the title-based API. The finder borrows its oracles
/// and owns no state between calls, so one finder can serve any number of
/// sequential searches.
pub struct PathFinder<'a> {
    links: &'a dyn LinkOracle,
    names: Option<&'a dyn NameOracle>,
    scorer: Option<&'a dyn ScoreOracle>,
    statements: Option<&'a dyn StatementOracle>,
    budget: Budget,
    cancel: CancelToken,
}

impl<'a> PathFinder<'a> {
    pub fn new(links: &'a dyn LinkOracle) -> Self {
        Self {
            links,
            names: None,
            scorer: None,
            statements: None,
            budget: Budget::default(),
            cancel: CancelToken::new(),
        }
    }

    pub fn with_names(mut self, names: &'a dyn NameOracle) -> Self {
        self.names = Some(names);
        self
    }

    pub fn with_scorer(mut self, scorer: &'a dyn ScoreOracle) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn with_statements(mut self, statements: &'a dyn StatementOracle) -> Self {
        self.statements = Some(statements);
        self
    }

    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// A handle that cancels searches run by this finder.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Run `strategy` from `source` to `target`.
    pub fn find_path(
        &self,
        strategy: Strategy,
        source: NodeId,
        target: NodeId,
    ) -> Result<SearchReport, SearchError> {
        match strategy {
            Strategy::Bfs => bfs(self.links, source, target, &self.budget, &self.cancel),
            Strategy::Bidirectional => {
                bidirectional(self.links, source, target, &self.budget, &self.cancel)
            }
            Strategy::BestFirst => {
                let scorer = self.scorer.ok_or(SearchError::OracleMissing {
                    strategy,
                    oracle: "scoring",
                })?;
                best_first(self.links, scorer, source, target, &self.budget, &self.cancel)
            }
            Strategy::Wikidata => {
                let statements = self.statements.ok_or(SearchError::OracleMissing {
                    strategy,
                    oracle: "statement",
                })?;
                wikidata_bfs(statements, source, target, &self.budget, &self.cancel)
            }
        }
    }

    /// Resolve both titles in `language` (article namespace), then run
    /// `strategy` between them.
    pub fn find_path_by_title(
        &self,
        strategy: Strategy,
        source_title: &str,
        target_title: &str,
        language: &Language,
    ) -> Result<SearchReport, SearchError> {
        let names = self.names.ok_or(SearchError::OracleMissing {
            strategy,
            oracle: "name",
        })?;
        let source = self.resolve(names, source_title, language)?;
        let target = self.resolve(names, target_title, language)?;
        self.find_path(strategy, source, target)
    }

    fn resolve(
        &self,
        names: &dyn NameOracle,
        title: &str,
        language: &Language,
    ) -> Result<NodeId, SearchError> {
        names
            .id_of_title(title, language, Namespace::Article)?
            .ok_or_else(|| SearchError::TitleNotFound {
                title: title.to_string(),
                language: language.clone(),
            })
    }
}
