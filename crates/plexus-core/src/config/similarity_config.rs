use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Similarity blend configuration. Loaded once at startup, validated with
/// [`validate`](Self::validate), immutable thereafter and injected into the
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Weight of the embedding cosine component. Must be >= 0.
    pub embedding_weight: f64,
    /// Weight of the contextual keyword Jaccard component. Must be >= 0.
    pub keyword_weight: f64,
    /// Edges are persisted iff combined similarity is strictly above this.
    pub threshold: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            embedding_weight: defaults::DEFAULT_EMBEDDING_WEIGHT,
            keyword_weight: defaults::DEFAULT_KEYWORD_WEIGHT,
            threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl SimilarityConfig {
    /// Fail-fast validation: the blend is undefined when both weights are
    /// zero, and a threshold outside [0, 1] can never be crossed or is
    /// always crossed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.embedding_weight < 0.0 {
            return Err(ConfigError::NegativeWeight {
                name: "embedding_weight".to_string(),
                value: self.embedding_weight,
            });
        }
        if self.keyword_weight < 0.0 {
            return Err(ConfigError::NegativeWeight {
                name: "keyword_weight".to_string(),
                value: self.keyword_weight,
            });
        }
        if self.embedding_weight == 0.0 && self.keyword_weight == 0.0 {
            return Err(ConfigError::ZeroWeights);
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                value: self.threshold,
            });
        }
        Ok(())
    }
}
