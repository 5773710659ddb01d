//! Capability ports implemented by the host application.
//!
//! The engine never talks to a model itself. Hosts wire an [`EmbeddingPort`]
//! and a [`CompletionPort`] into the [`RagEngineBuilder`](crate::engine::RagEngineBuilder),
//! keeping model and vendor choices out of the retrieval core. Ports are
//! supplied at construction and never reassigned, so an in-flight operation
//! always sees the collaborator it started with.

use async_trait::async_trait;

use crate::error::{CompletionError, EmbeddingError};
use crate::models::ChatMessage;

/// Maps text to a fixed-length embedding vector.
///
/// Implementations must return non-empty vectors of the same length for
/// every call within one engine lifetime; the store rejects inconsistent
/// lengths with a dimension error. The engine compares raw vectors by
/// Euclidean distance and never normalizes them itself.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use recall_engine::{EmbeddingError, EmbeddingPort};
///
/// struct CharFrequencyEmbedder;
///
/// #[async_trait]
/// impl EmbeddingPort for CharFrequencyEmbedder {
///     async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
///         let vowels = text.chars().filter(|c| "aeiou".contains(*c)).count();
///         let total = text.chars().count().max(1);
///         let x = vowels as f32 / total as f32;
///         Ok(vec![x, 1.0 - x])
///     }
/// }
/// ```
#[async_trait]
pub trait EmbeddingPort: Send + Sync {
    /// Embed a single text. A capability failure (model not ready, backend
    /// error, timeout) is reported as [`EmbeddingError`]; timeouts from
    /// network-backed implementations should be retryable by the caller.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Generates a chat completion from an ordered message list.
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Produce the assistant reply for the given conversation.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError>;
}
