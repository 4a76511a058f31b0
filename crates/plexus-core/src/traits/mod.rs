//! Collaborator contracts. Engines receive these by reference, never through
//! ambient globals, so tests can swap in fakes.

mod embedding;
mod store;

pub use embedding::IEmbeddingSource;
pub use store::IEntityStore;
