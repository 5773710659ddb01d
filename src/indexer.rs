//! Document ingestion: validate, chunk, embed, commit.
//!
//! Each document is embedded completely before anything is stored, then
//! committed to the [`ChunkStore`] in a single insert; a failing embedding
//! call never leaves a partial document behind, and never burns a
//! generated id.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::chunk::chunk_text;
use crate::error::IndexError;
use crate::models::{Chunk, Document, DocumentId};
use crate::ports::EmbeddingPort;
use crate::store::ChunkStore;

/// Turns raw text into embedded chunks inside a [`ChunkStore`].
///
/// Generated document ids come from a monotone counter (`doc-1`, `doc-2`,
/// ...) drawn only after a document has embedded successfully, so the same
/// sequence of successful inserts always produces the same ids no matter
/// how many rejected or failed attempts land in between.
pub struct Indexer {
    store: Arc<ChunkStore>,
    embedder: Arc<dyn EmbeddingPort>,
    max_chunk_chars: Option<usize>,
    next_id: AtomicU64,
}

impl Indexer {
    pub fn new(
        store: Arc<ChunkStore>,
        embedder: Arc<dyn EmbeddingPort>,
        max_chunk_chars: Option<usize>,
    ) -> Self {
        Self {
            store,
            embedder,
            max_chunk_chars,
            next_id: AtomicU64::new(1),
        }
    }

    /// Chunk, embed, and store one document under a generated id.
    pub async fn store_document(&self, content: &str) -> Result<DocumentId, IndexError> {
        let (pieces, embeddings) = self.embed_content(content).await?;
        // The id is drawn only once every embedding has succeeded, so
        // rejected input and failed port calls never consume one.
        let id = DocumentId(format!("doc-{}", self.next_id.fetch_add(1, Ordering::Relaxed)));
        // A fresh id colliding with a stored one means the counter went
        // backwards somehow; surface it instead of silently replacing.
        if self.store.contains(&id) {
            return Err(IndexError::IdCollision(id));
        }
        self.commit(id, content, pieces, embeddings)
    }

    /// Chunk, embed, and store one document under a caller-chosen name.
    ///
    /// Re-using a name replaces the previous document, per
    /// [`ChunkStore::insert`].
    pub async fn store_document_named(
        &self,
        name: &str,
        content: &str,
    ) -> Result<DocumentId, IndexError> {
        let (pieces, embeddings) = self.embed_content(content).await?;
        self.commit(DocumentId::from(name), content, pieces, embeddings)
    }

    /// Store a batch, one outcome per input, in input order.
    ///
    /// Best-effort: a failing item is recorded and skipped, never blocking
    /// the rest of the batch. Items run sequentially.
    pub async fn store_documents<S: AsRef<str>>(
        &self,
        contents: &[S],
    ) -> Vec<Result<DocumentId, IndexError>> {
        let mut outcomes = Vec::with_capacity(contents.len());
        for (position, content) in contents.iter().enumerate() {
            let outcome = self.store_document(content.as_ref()).await;
            if let Err(err) = &outcome {
                warn!("skipping batch document at position {}: {}", position, err);
            }
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Validate and chunk the content, then embed every chunk up front;
    /// any failure aborts before an id is drawn or the store is touched.
    async fn embed_content(
        &self,
        content: &str,
    ) -> Result<(Vec<String>, Vec<Vec<f32>>), IndexError> {
        if content.trim().is_empty() {
            return Err(IndexError::EmptyContent);
        }

        let pieces = chunk_text(content, self.max_chunk_chars);

        let mut embeddings = Vec::with_capacity(pieces.len());
        for piece in &pieces {
            embeddings.push(self.embedder.embed(piece).await?);
        }
        Ok((pieces, embeddings))
    }

    fn commit(
        &self,
        id: DocumentId,
        content: &str,
        pieces: Vec<String>,
        embeddings: Vec<Vec<f32>>,
    ) -> Result<DocumentId, IndexError> {
        let document = Document {
            id: id.clone(),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        let chunks: Vec<Chunk> = pieces
            .into_iter()
            .zip(embeddings)
            .enumerate()
            .map(|(index, (text, embedding))| Chunk {
                document_id: id.clone(),
                chunk_index: index,
                content: text,
                embedding,
            })
            .collect();

        let chunk_count = chunks.len();
        self.store.insert(document, chunks)?;
        debug!("stored document {} with {} chunks", id, chunk_count);
        Ok(id)
    }
}
