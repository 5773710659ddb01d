use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::search::ThresholdPolicy;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RagConfig {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChunkingConfig {
    /// Maximum characters per chunk. Absent means the whole document
    /// becomes a single chunk.
    #[serde(default)]
    pub max_chars: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_max_distance")]
    pub max_distance: f32,
    #[serde(default)]
    pub threshold_policy: ThresholdPolicy,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            max_distance: default_max_distance(),
            threshold_policy: ThresholdPolicy::default(),
        }
    }
}

fn default_limit() -> usize {
    5
}
fn default_max_distance() -> f32 {
    1.2
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_strip_reasoning")]
    pub strip_reasoning: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            strip_reasoning: default_strip_reasoning(),
        }
    }
}

fn default_separator() -> String {
    "\n\n---\n\n".to_string()
}
fn default_strip_reasoning() -> bool {
    true
}

pub fn load_config(path: &Path) -> Result<RagConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: RagConfig =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate chunking
    if config.chunking.max_chars == Some(0) {
        anyhow::bail!("chunking.max_chars must be > 0 when set");
    }

    // Validate retrieval
    if config.retrieval.limit == 0 {
        anyhow::bail!("retrieval.limit must be >= 1");
    }

    if !config.retrieval.max_distance.is_finite() || config.retrieval.max_distance <= 0.0 {
        anyhow::bail!("retrieval.max_distance must be > 0");
    }

    // Validate generation
    if config.generation.separator.is_empty() {
        anyhow::bail!("generation.separator must not be empty");
    }

    Ok(config)
}
