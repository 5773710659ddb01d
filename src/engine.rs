//! End-to-end orchestration: index, retrieve, assemble, generate.
//!
//! [`RagEngine`] composes the [`Indexer`], [`SearchEngine`], and context
//! assembly around the two capability ports. It is built through
//! [`RagEngineBuilder`], which refuses to produce an engine with a missing
//! collaborator. A constructed engine is ready by construction; there is
//! no runtime "not initialized yet" state to trip over.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::RagConfig;
use crate::context::assemble;
use crate::error::{AskError, EngineError, IndexError, SearchError};
use crate::indexer::Indexer;
use crate::models::{ChatMessage, DocumentId, DocumentSummary};
use crate::ports::{CompletionPort, EmbeddingPort};
use crate::search::{SearchEngine, SearchHit, SearchOptions};
use crate::store::ChunkStore;

const SYSTEM_PROMPT: &str = "You are a helpful assistant. Answer the question using only the \
provided context. If the context does not contain the answer, say that you do not know.";

/// Outcome of [`RagEngine::ask`].
///
/// The three variants let callers render three different states instead of
/// one generic failure: nothing ingested yet, nothing relevant found, and
/// an actual grounded answer. Backend failures are errors, never one of
/// these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The store holds no documents at all.
    NoDocuments,
    /// Documents exist, but nothing was retrieved within the distance
    /// threshold.
    NoMatch,
    /// A grounded answer produced by the completion port.
    Answered(String),
}

/// Builder wiring the capability ports and configuration into a
/// [`RagEngine`].
///
/// # Example
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use recall_engine::{RagEngine, RagConfig};
/// # fn wire(embedder: Arc<dyn recall_engine::EmbeddingPort>,
/// #         completer: Arc<dyn recall_engine::CompletionPort>) -> anyhow::Result<()> {
/// let engine = RagEngine::builder()
///     .embedding_port(embedder)
///     .completion_port(completer)
///     .config(RagConfig::default())
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct RagEngineBuilder {
    embedder: Option<Arc<dyn EmbeddingPort>>,
    completer: Option<Arc<dyn CompletionPort>>,
    config: RagConfig,
}

impl RagEngineBuilder {
    pub fn new() -> Self {
        Self {
            embedder: None,
            completer: None,
            config: RagConfig::default(),
        }
    }

    pub fn embedding_port(mut self, port: Arc<dyn EmbeddingPort>) -> Self {
        self.embedder = Some(port);
        self
    }

    pub fn completion_port(mut self, port: Arc<dyn CompletionPort>) -> Self {
        self.completer = Some(port);
        self
    }

    pub fn config(mut self, config: RagConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the wiring and produce a ready engine.
    ///
    /// Fails fast with [`EngineError::NotInitialized`] naming the missing
    /// port, so a half-wired engine can never serve a request.
    pub fn build(self) -> Result<RagEngine, EngineError> {
        let embedder = self
            .embedder
            .ok_or(EngineError::NotInitialized("embedding port"))?;
        let completer = self
            .completer
            .ok_or(EngineError::NotInitialized("completion port"))?;

        let store = Arc::new(ChunkStore::new());
        let indexer = Indexer::new(
            store.clone(),
            embedder.clone(),
            self.config.chunking.max_chars,
        );
        let searcher = SearchEngine::new(store.clone(), embedder);

        Ok(RagEngine {
            store,
            indexer,
            searcher,
            completer,
            config: self.config,
        })
    }
}

impl Default for RagEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully wired retrieval-augmented generation engine.
pub struct RagEngine {
    store: Arc<ChunkStore>,
    indexer: Indexer,
    searcher: SearchEngine,
    completer: Arc<dyn CompletionPort>,
    config: RagConfig,
}

// Manual impl: the `dyn` port fields make `#[derive(Debug)]` impossible.
impl std::fmt::Debug for RagEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RagEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RagEngine {
    pub fn builder() -> RagEngineBuilder {
        RagEngineBuilder::new()
    }

    /// The underlying chunk store, for direct reads.
    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    /// Ingest one document under a generated id.
    pub async fn store_document(&self, content: &str) -> Result<DocumentId, IndexError> {
        self.indexer.store_document(content).await
    }

    /// Ingest one document under a caller-chosen name.
    pub async fn store_document_named(
        &self,
        name: &str,
        content: &str,
    ) -> Result<DocumentId, IndexError> {
        self.indexer.store_document_named(name, content).await
    }

    /// Ingest a batch, returning one outcome per input in input order.
    pub async fn store_documents<S: AsRef<str>>(
        &self,
        contents: &[S],
    ) -> Vec<Result<DocumentId, IndexError>> {
        self.indexer.store_documents(contents).await
    }

    /// Summaries of everything stored, in insertion order.
    pub fn documents(&self) -> Vec<DocumentSummary> {
        self.store.documents()
    }

    /// Remove a document and its chunks. Returns whether anything was
    /// removed.
    pub fn remove_document(&self, id: &DocumentId) -> bool {
        self.store.remove_document(id)
    }

    /// Run retrieval only, with the engine's configured limit, threshold,
    /// and policy.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        self.searcher.search(query, &self.search_options()).await
    }

    /// Answer a question grounded in the stored documents.
    ///
    /// Retrieval runs first; when it produces no usable context the call
    /// short-circuits with [`Answer::NoDocuments`] or [`Answer::NoMatch`]
    /// and the completion port is never invoked; finding nothing is a
    /// designed outcome, not an error. A completion failure surfaces as
    /// [`AskError::GenerationFailed`], so callers can always tell "found
    /// nothing" apart from "generation broke".
    pub async fn ask(&self, query: &str) -> Result<Answer, AskError> {
        if self.store.is_empty() {
            debug!("ask with no documents stored, skipping retrieval");
            return Ok(Answer::NoDocuments);
        }

        let hits = self.searcher.search(query, &self.search_options()).await?;
        let context = match assemble(&hits, &self.config.generation.separator) {
            Some(context) => context,
            None => {
                debug!("no chunks within distance threshold, skipping generation");
                return Ok(Answer::NoMatch);
            }
        };

        let messages = [
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(format!("Context:\n{}\n\nQuestion: {}", context, query)),
        ];
        let reply = self.completer.complete(&messages).await?;

        let answer = if self.config.generation.strip_reasoning {
            strip_reasoning_block(&reply)
        } else {
            reply.trim().to_string()
        };
        Ok(Answer::Answered(answer))
    }

    fn search_options(&self) -> SearchOptions {
        SearchOptions {
            limit: self.config.retrieval.limit,
            max_distance: Some(self.config.retrieval.max_distance),
            policy: self.config.retrieval.threshold_policy,
        }
    }
}

/// Strip a leading `<think>...</think>` block from a model reply.
///
/// Reasoning-capable models prepend their deliberation inside think tags;
/// the grounded answer follows the closing tag. The result is trimmed. An
/// unterminated opening tag strips nothing, so malformed replies pass
/// through unchanged rather than losing the whole answer.
pub fn strip_reasoning_block(reply: &str) -> String {
    let trimmed = reply.trim();
    if let Some(rest) = trimmed.strip_prefix("<think>") {
        match rest.find("</think>") {
            Some(pos) => return rest[pos + "</think>".len()..].trim().to_string(),
            None => warn!("reply opened a <think> block without closing it"),
        }
    }
    trimmed.to_string()
}
