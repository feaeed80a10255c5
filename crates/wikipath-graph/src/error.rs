//! Storage-layer errors surfaced by oracle implementations.

use thiserror::Error;

/// Failure of a backing store during an oracle call.
///
/// Production oracles sit on databases, memory-mapped files, or remote APIs;
/// any call can fail mid-iteration. The search engine aborts on the first
/// store error and surfaces it unchanged (scoring errors are the one
/// exception, see `ScoreOracle`).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {message}")]
    Backend {
        message: String,
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("unknown node id {0}")]
    UnknownNode(u32),
}

impl StoreError {
    /// A backend failure with a plain message and no underlying cause.
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend {
            message: message.into(),
            cause: None,
        }
    }

    /// A backend failure wrapping an underlying error.
    pub fn backend_caused_by(
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StoreError::Backend {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }
}
