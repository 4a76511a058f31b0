//! Configuration for the Plexus workspace: TOML-loadable, validated at
//! startup, immutable afterwards.

pub mod defaults;
mod retrieval_config;
mod similarity_config;

pub use retrieval_config::RetrievalConfig;
pub use similarity_config::SimilarityConfig;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EMBEDDING_DIMENSIONS;
use crate::errors::ConfigError;

/// Embedding provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Dimensionality every embedding in the deployment must have.
    pub dimensions: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}

impl EmbeddingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions == 0 {
            return Err(ConfigError::ZeroDimensions);
        }
        Ok(())
    }
}

/// Aggregate configuration for the whole workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlexusConfig {
    pub similarity: SimilarityConfig,
    pub retrieval: RetrievalConfig,
    pub embedding: EmbeddingConfig,
}

impl PlexusConfig {
    /// Parse from a TOML string and validate every section.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.similarity.validate()?;
        self.retrieval.validate()?;
        self.embedding.validate()?;
        Ok(())
    }
}
