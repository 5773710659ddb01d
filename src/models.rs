//! Core data models used throughout the engine.
//!
//! These types represent the documents, chunks, and chat messages that flow
//! through the indexing and retrieval pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique name identifying a document within a [`ChunkStore`](crate::store::ChunkStore).
///
/// Callers may supply their own names (a path, a record key); otherwise the
/// [`Indexer`](crate::indexer::Indexer) generates one from a monotone counter,
/// so the same insert sequence always produces the same ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A stored document: raw content plus bookkeeping.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    /// Original content as given to the indexer, untouched.
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Read-only view of a stored document, as returned by
/// [`ChunkStore::documents`](crate::store::ChunkStore::documents).
///
/// `content` is reconstructed by joining the document's chunks in sequence
/// order, so it matches the original input modulo chunk-boundary whitespace.
#[derive(Debug, Clone)]
pub struct DocumentSummary {
    pub id: DocumentId,
    /// Reconstructed content length in bytes.
    pub size: usize,
    pub chunk_count: usize,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A contiguous, non-empty slice of a document's text paired with its
/// embedding vector.
///
/// A chunk belongs to exactly one document; `chunk_index` is its zero-based
/// position within that document and is used only for ordering, never for
/// identity across documents.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub document_id: DocumentId,
    pub chunk_index: usize,
    pub content: String,
    pub embedding: Vec<f32>,
}

/// One message in a completion conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `"system"`, `"user"`, or `"assistant"`.
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}
