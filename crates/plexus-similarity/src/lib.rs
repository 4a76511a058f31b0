//! # plexus-similarity
//!
//! Decides which extracted entities represent the same real-world concept
//! across diagrams. Pairs are scored with a weighted blend of embedding
//! cosine similarity and contextual keyword Jaccard similarity; pairs above
//! the configured threshold become [`SimilarityEdge`]s for the store.
//!
//! [`SimilarityEdge`]: plexus_core::models::SimilarityEdge

pub mod cosine;
pub mod engine;
pub mod keyset;

pub use cosine::cosine_similarity;
pub use engine::SimilarityEngine;
pub use keyset::{contextual_key_set, jaccard};
