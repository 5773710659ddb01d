//! # Recall Engine
//!
//! An embeddable retrieval-augmented generation engine with pluggable
//! model backends.
//!
//! Recall Engine keeps the whole pipeline local and in-process: documents
//! are chunked, embedded through a caller-supplied [`EmbeddingPort`], and
//! held in an in-memory store. Questions are answered by ranking chunks
//! with plain L2 distance, assembling the survivors into a context block,
//! and handing that to a caller-supplied [`CompletionPort`]. No network,
//! no database, no bundled model weights.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   ┌─────────────┐   ┌────────────┐
//! │ Documents │──▶│ Chunk+Embed │──▶│ ChunkStore │
//! └───────────┘   └─────────────┘   └─────┬──────┘
//!                                         │
//!                      ┌──────────────────┤
//!                      ▼                  ▼
//!                 ┌──────────┐       ┌──────────┐
//!                 │  search  │       │   ask    │
//!                 │ (ranked) │       │ (answer) │
//!                 └──────────┘       └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use recall_engine::{
//!     Answer, ChatMessage, CompletionError, CompletionPort, EmbeddingError, EmbeddingPort,
//!     RagEngine,
//! };
//!
//! struct MyEmbedder;
//!
//! #[async_trait]
//! impl EmbeddingPort for MyEmbedder {
//!     async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
//!         // Call your embedding model here.
//!         Ok(vec![text.len() as f32])
//!     }
//! }
//!
//! struct MyCompleter;
//!
//! #[async_trait]
//! impl CompletionPort for MyCompleter {
//!     async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, CompletionError> {
//!         // Call your chat model here.
//!         Ok("Stand-up is at 9:30.".to_string())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = RagEngine::builder()
//!         .embedding_port(Arc::new(MyEmbedder))
//!         .completion_port(Arc::new(MyCompleter))
//!         .build()?;
//!
//!     engine
//!         .store_document("The team stand-up is at 9:30 every morning.")
//!         .await?;
//!
//!     match engine.ask("When is stand-up?").await? {
//!         Answer::Answered(reply) => println!("{}", reply),
//!         Answer::NoMatch => println!("nothing relevant stored"),
//!         Answer::NoDocuments => println!("store is empty"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`error`] | Error taxonomy |
//! | [`ports`] | Embedding and completion capability traits |
//! | [`chunk`] | Text chunking |
//! | [`store`] | In-memory chunk store |
//! | [`search`] | Vector similarity search |
//! | [`context`] | Context assembly |
//! | [`indexer`] | Document ingestion |
//! | [`engine`] | End-to-end orchestration |

pub mod chunk;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod indexer;
pub mod models;
pub mod ports;
pub mod search;
pub mod store;

pub use config::{ChunkingConfig, GenerationConfig, load_config, RagConfig, RetrievalConfig};
pub use context::assemble;
pub use engine::{Answer, RagEngine, RagEngineBuilder, strip_reasoning_block};
pub use error::{
    AskError, CompletionError, EmbeddingError, EngineError, IndexError, InsertError, SearchError,
};
pub use indexer::Indexer;
pub use models::{ChatMessage, Chunk, Document, DocumentId, DocumentSummary};
pub use ports::{CompletionPort, EmbeddingPort};
pub use search::{euclidean_distance, SearchEngine, SearchHit, SearchOptions, ThresholdPolicy};
pub use store::ChunkStore;
