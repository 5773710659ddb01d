//! Brute-force semantic search over the chunk store.
//!
//! Every query is embedded through the [`EmbeddingPort`], then ranked
//! against every stored chunk by Euclidean (L2) distance. The scan is
//! exact and linear over a consistent snapshot of the store.
//!
//! # Algorithm
//!
//! 1. Reject `limit == 0`; an empty store returns an empty result set
//!    without touching the embedding capability.
//! 2. Embed the query (before any lock is taken, so a slow port never
//!    holds up writers).
//! 3. Compute `sqrt(sum((q_i - c_i)^2))` against a consistent chunk
//!    snapshot.
//! 4. Stable ascending sort by distance; equal distances keep insertion
//!    order, so identical inputs always rank identically.
//! 5. Apply the limit and the distance threshold in the order chosen by
//!    [`ThresholdPolicy`].

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::error::SearchError;
use crate::models::Chunk;
use crate::ports::EmbeddingPort;
use crate::store::ChunkStore;

/// Relative order of the `limit` truncation and the `max_distance` filter.
///
/// The engine sorts all hits ascending by distance before either step runs,
/// and an upper-bound filter on a sorted list keeps a prefix, so both
/// policies select the same hits. The policy exists to make the pipeline
/// order explicit and pinned by tests instead of an accident of code layout:
/// [`AfterLimit`](ThresholdPolicy::AfterLimit) preserves the historical
/// truncate-then-filter order, [`BeforeLimit`](ThresholdPolicy::BeforeLimit)
/// is the filter-then-truncate alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdPolicy {
    /// Truncate to `limit` first, then drop hits beyond `max_distance`.
    #[default]
    AfterLimit,
    /// Drop hits beyond `max_distance` first, then truncate to `limit`.
    BeforeLimit,
}

/// Tuning for one search invocation.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum hits to return. Must be at least 1.
    pub limit: usize,
    /// Hits farther than this are dropped. `None` disables the filter.
    pub max_distance: Option<f32>,
    /// When the threshold runs relative to the limit truncation.
    pub policy: ThresholdPolicy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            max_distance: Some(1.2),
            policy: ThresholdPolicy::AfterLimit,
        }
    }
}

/// A chunk matched by a search, paired with its distance from the query.
///
/// The chunk is a read-only view into the store's snapshot; lower distance
/// means more similar.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub chunk: Arc<Chunk>,
    pub distance: f32,
}

/// Executes embed-and-rank queries against a [`ChunkStore`].
pub struct SearchEngine {
    store: Arc<ChunkStore>,
    embedder: Arc<dyn EmbeddingPort>,
}

impl SearchEngine {
    pub fn new(store: Arc<ChunkStore>, embedder: Arc<dyn EmbeddingPort>) -> Self {
        Self { store, embedder }
    }

    /// Rank every stored chunk by L2 distance to the embedded query.
    ///
    /// An empty store yields `Ok` with no hits, never an error, and skips
    /// the embedding call entirely. A query whose embedding does not match
    /// the store's dimension fails with
    /// [`SearchError::DimensionMismatch`] rather than producing garbage
    /// distances.
    pub async fn search(
        &self,
        query: &str,
        opts: &SearchOptions,
    ) -> Result<Vec<SearchHit>, SearchError> {
        if opts.limit == 0 {
            return Err(SearchError::InvalidLimit);
        }
        if self.store.is_empty() {
            return Ok(Vec::new());
        }

        let query_vec = self.embedder.embed(query).await?;
        if let Some(expected) = self.store.dimension() {
            if query_vec.len() != expected {
                return Err(SearchError::DimensionMismatch {
                    expected,
                    actual: query_vec.len(),
                });
            }
        }

        let mut hits: Vec<SearchHit> = self
            .store
            .chunks()
            .into_iter()
            .map(|chunk| {
                let distance = euclidean_distance(&query_vec, &chunk.embedding);
                SearchHit { chunk, distance }
            })
            .collect();

        // Stable sort keeps insertion order for equal distances.
        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        match opts.policy {
            ThresholdPolicy::AfterLimit => {
                hits.truncate(opts.limit);
                if let Some(max) = opts.max_distance {
                    hits.retain(|h| h.distance <= max);
                }
            }
            ThresholdPolicy::BeforeLimit => {
                if let Some(max) = opts.max_distance {
                    hits.retain(|h| h.distance <= max);
                }
                hits.truncate(opts.limit);
            }
        }

        debug!("search returned {} hits (limit {})", hits.len(), opts.limit);
        Ok(hits)
    }
}

/// Euclidean (L2) distance between two equal-length vectors.
///
/// Callers are responsible for checking dimensions first; [`SearchEngine`]
/// rejects mismatched queries before scoring.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}
