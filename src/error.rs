//! Error types for every stage of the pipeline.
//!
//! Each seam gets its own enum so callers can match on exactly the failures
//! that stage can produce: validation problems are rejected before any state
//! changes, capability failures abort the operation with nothing committed,
//! and a missing port is caught at construction time.

use thiserror::Error;

use crate::models::DocumentId;

/// Failure reported by an [`EmbeddingPort`](crate::ports::EmbeddingPort)
/// implementation (model not ready, backend error, timeout).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct EmbeddingError {
    pub message: String,
}

impl EmbeddingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure reported by a [`CompletionPort`](crate::ports::CompletionPort)
/// implementation.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CompletionError {
    pub message: String,
}

impl CompletionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors from [`ChunkStore::insert`](crate::store::ChunkStore::insert).
///
/// In every case the store is left untouched.
#[derive(Debug, Clone, Error)]
pub enum InsertError {
    /// The document body was blank, or it produced no non-empty chunks.
    #[error("document content is empty")]
    EmptyContent,
    /// A chunk carried a zero-length embedding. An empty vector cannot fix
    /// the store's dimension.
    #[error("chunk embedding is empty")]
    EmptyEmbedding,
    /// A chunk embedding did not match the dimension fixed by the store's
    /// first insert.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Errors from [`Indexer`](crate::indexer::Indexer) operations.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The document body was blank; nothing was embedded or stored.
    #[error("document content is empty")]
    EmptyContent,
    /// The embedding capability failed; the document was not stored.
    #[error("embedding failed: {0}")]
    EmbeddingFailed(#[from] EmbeddingError),
    /// A generated id collided with a stored document. The id counter only
    /// moves forward, so this indicates an internal fault, not caller error.
    #[error("generated document id '{0}' already exists")]
    IdCollision(DocumentId),
    #[error(transparent)]
    Store(#[from] InsertError),
}

/// Errors from [`SearchEngine::search`](crate::search::SearchEngine::search).
#[derive(Debug, Error)]
pub enum SearchError {
    /// `limit` was zero.
    #[error("limit must be >= 1")]
    InvalidLimit,
    /// The embedding capability failed for the query.
    #[error("embedding failed: {0}")]
    EmbeddingFailed(#[from] EmbeddingError),
    /// The query embedding's dimension differs from the store's.
    #[error("dimension mismatch: query has {actual} dimensions, store expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Errors from [`RagEngine::ask`](crate::engine::RagEngine::ask).
///
/// A query that matches nothing is NOT an error; see
/// [`Answer`](crate::engine::Answer).
#[derive(Debug, Error)]
pub enum AskError {
    #[error(transparent)]
    Search(#[from] SearchError),
    /// The completion capability failed after retrieval succeeded.
    #[error("generation failed: {0}")]
    GenerationFailed(#[from] CompletionError),
}

/// Errors from [`RagEngineBuilder::build`](crate::engine::RagEngineBuilder::build).
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required collaborator was not wired before `build()`.
    #[error("engine is not initialized: missing {0}")]
    NotInitialized(&'static str),
}
