//! In-memory chunk store with snapshot reads.
//!
//! Documents and their embedded chunks live in insertion-ordered `Vec`s
//! behind a single `std::sync::RwLock`, giving the single-writer /
//! multiple-reader discipline the engine relies on: `insert` takes the
//! write lock, scans clone a consistent snapshot under the read lock, and
//! no reader can ever observe a partially inserted document.
//!
//! The embedding dimension is fixed by the first successful insert and
//! every later insert must match it.

use std::sync::{Arc, RwLock};

use crate::error::InsertError;
use crate::models::{Chunk, Document, DocumentId, DocumentSummary};

#[derive(Default)]
struct StoreInner {
    docs: Vec<Document>,
    chunks: Vec<Arc<Chunk>>,
    dimension: Option<usize>,
}

/// Insertion-ordered in-memory store for documents and chunks.
pub struct ChunkStore {
    inner: RwLock<StoreInner>,
}

impl ChunkStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// Insert a document and its chunks as one atomic unit.
    ///
    /// Fails with [`InsertError::EmptyContent`] when the document body is
    /// blank, when `chunks` is empty, or when any chunk's content is blank.
    /// Fails with [`InsertError::EmptyEmbedding`] when a chunk carries a
    /// zero-length embedding. Fails with [`InsertError::DimensionMismatch`]
    /// when an embedding's length differs from the dimension fixed by the
    /// first insert. In every case the store is unchanged.
    ///
    /// Re-inserting an existing id replaces the old document: its chunks
    /// leave the scan order and the new ones are appended at the end.
    pub fn insert(&self, document: Document, chunks: Vec<Chunk>) -> Result<(), InsertError> {
        if document.content.trim().is_empty() || chunks.is_empty() {
            return Err(InsertError::EmptyContent);
        }
        if chunks.iter().any(|c| c.content.trim().is_empty()) {
            return Err(InsertError::EmptyContent);
        }

        let mut inner = self.inner.write().unwrap();

        let expected = inner
            .dimension
            .unwrap_or_else(|| chunks[0].embedding.len());
        // A zero-length first embedding would fix the dimension at 0 and
        // rank every chunk at distance 0.0 from then on.
        if expected == 0 {
            return Err(InsertError::EmptyEmbedding);
        }
        for chunk in &chunks {
            if chunk.embedding.len() != expected {
                return Err(InsertError::DimensionMismatch {
                    expected,
                    actual: chunk.embedding.len(),
                });
            }
        }

        inner.docs.retain(|d| d.id != document.id);
        inner.chunks.retain(|c| c.document_id != document.id);
        inner.docs.push(document);
        for chunk in chunks {
            inner.chunks.push(Arc::new(chunk));
        }
        inner.dimension = Some(expected);
        Ok(())
    }

    /// Whether a document with this id is stored.
    pub fn contains(&self, id: &DocumentId) -> bool {
        self.inner.read().unwrap().docs.iter().any(|d| &d.id == id)
    }

    /// The stored document with this id, if any.
    pub fn get_document(&self, id: &DocumentId) -> Option<Document> {
        self.inner
            .read()
            .unwrap()
            .docs
            .iter()
            .find(|d| &d.id == id)
            .cloned()
    }

    /// Summaries of all documents in insertion order (oldest first).
    ///
    /// Each summary's `content` is reconstructed by joining the document's
    /// chunks in sequence order, so it equals the original input modulo
    /// chunk-boundary whitespace.
    pub fn documents(&self) -> Vec<DocumentSummary> {
        let inner = self.inner.read().unwrap();
        inner
            .docs
            .iter()
            .map(|doc| {
                let mut pieces: Vec<&Arc<Chunk>> = inner
                    .chunks
                    .iter()
                    .filter(|c| c.document_id == doc.id)
                    .collect();
                pieces.sort_by_key(|c| c.chunk_index);
                let content = pieces
                    .iter()
                    .map(|c| c.content.as_str())
                    .collect::<Vec<_>>()
                    .join("\n\n");
                DocumentSummary {
                    id: doc.id.clone(),
                    size: content.len(),
                    chunk_count: pieces.len(),
                    content,
                    created_at: doc.created_at,
                }
            })
            .collect()
    }

    /// Snapshot of all chunks in insertion order.
    ///
    /// The snapshot is taken under a single read lock, so it is internally
    /// consistent no matter what writers do afterwards. Each call takes a
    /// fresh snapshot; `Arc` keeps the copy cheap.
    pub fn chunks(&self) -> Vec<Arc<Chunk>> {
        self.inner.read().unwrap().chunks.clone()
    }

    pub fn document_count(&self) -> usize {
        self.inner.read().unwrap().docs.len()
    }

    pub fn chunk_count(&self) -> usize {
        self.inner.read().unwrap().chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().docs.is_empty()
    }

    /// Embedding dimension fixed by the first insert, if any yet.
    pub fn dimension(&self) -> Option<usize> {
        self.inner.read().unwrap().dimension
    }

    /// Remove a document and its chunks. Returns whether anything was
    /// removed. The dimension stays fixed even when the store empties.
    pub fn remove_document(&self, id: &DocumentId) -> bool {
        let mut inner = self.inner.write().unwrap();
        let before = inner.docs.len();
        inner.docs.retain(|d| &d.id != id);
        inner.chunks.retain(|c| &c.document_id != id);
        inner.docs.len() != before
    }

    /// Drop all documents and chunks and unfix the dimension.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.docs.clear();
        inner.chunks.clear();
        inner.dimension = None;
    }
}

impl Default for ChunkStore {
    fn default() -> Self {
        Self::new()
    }
}
