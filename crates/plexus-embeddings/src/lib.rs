//! # plexus-embeddings
//!
//! A deterministic embedding source for deployments without a neural
//! provider: terms are hashed into fixed-dimension buckets and weighted by
//! term frequency. Not as semantically rich as a hosted model, but always
//! available and reproducible, which is what tests and air-gapped
//! installations need.

mod tfidf;

pub use tfidf::TfIdfEmbedder;
