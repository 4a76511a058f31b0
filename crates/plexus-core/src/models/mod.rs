//! Domain records shared across the workspace.

mod entity;
mod retrieval;
mod similarity;

pub use entity::Entity;
pub use retrieval::{EntityLexicon, RetrievedEntity, ScoredHit};
pub use similarity::SimilarityEdge;
