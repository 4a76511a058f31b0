use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_GRAPH_DEPTH;
use crate::errors::ConfigError;

/// Hybrid retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Nearest-neighbor budget for the primary path, and the result cap
    /// applied by the lexical fallback.
    pub semantic_top_k: usize,
    /// Maximum hops when expanding semantic hits into their neighborhood.
    pub graph_depth: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            semantic_top_k: defaults::DEFAULT_SEMANTIC_TOP_K,
            graph_depth: defaults::DEFAULT_GRAPH_DEPTH,
        }
    }
}

impl RetrievalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.semantic_top_k == 0 {
            return Err(ConfigError::ZeroTopK);
        }
        if self.graph_depth > MAX_GRAPH_DEPTH {
            return Err(ConfigError::GraphDepthTooLarge {
                value: self.graph_depth,
                max: MAX_GRAPH_DEPTH,
            });
        }
        Ok(())
    }
}
