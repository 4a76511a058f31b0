//! Hashed TF-IDF embedding source.

use std::collections::HashMap;

use plexus_core::errors::{ConfigError, PlexusResult};
use plexus_core::traits::IEmbeddingSource;

/// Hashed TF-IDF embedding source.
///
/// Produces L2-normalized dense vectors by hashing terms into fixed
/// buckets and weighting by term frequency with a length-based IDF
/// approximation. Deterministic for a given input and dimensionality.
#[derive(Debug)]
pub struct TfIdfEmbedder {
    dimensions: usize,
}

impl TfIdfEmbedder {
    /// Construction fails on a zero dimensionality; bucket hashing needs at
    /// least one bucket, and misconfiguration must not surface mid-query.
    pub fn new(dimensions: usize) -> Result<Self, ConfigError> {
        if dimensions == 0 {
            return Err(ConfigError::ZeroDimensions);
        }
        Ok(Self { dimensions })
    }

    /// FNV-1a bucket index for a term. `dims` is nonzero by construction.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    /// Lowercase alphanumeric terms, single characters dropped.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut tf: HashMap<String, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.clone()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];

        for (term, count) in &tf {
            let freq = count / total;
            // Length stands in for inverse document frequency here: short
            // terms skew toward stopwords.
            let idf = 1.0 + (term.len() as f32).ln();
            let bucket = Self::hash_term(term, self.dimensions);
            vec[bucket] += freq * idf;
        }

        // Scale to unit length so downstream cosine scores stay comparable.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl IEmbeddingSource for TfIdfEmbedder {
    fn embed_query(&self, text: &str) -> PlexusResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf-hashed"
    }

    fn is_available(&self) -> bool {
        true
    }
}
