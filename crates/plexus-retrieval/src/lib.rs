//! # plexus-retrieval
//!
//! Answers "which known entities are relevant to this query text".
//! The primary path pairs vector nearest-neighbor search with graph
//! neighborhood expansion; any failure along it degrades, within the same
//! call, to lexical keyword scoring over the full entity list.

pub mod fallback;
pub mod retriever;

pub use retriever::HybridRetriever;
