//! # plexus-core
//!
//! Foundation crate for the Plexus knowledge-graph linker.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PlexusConfig;
pub use errors::{PlexusError, PlexusResult};
pub use models::{Entity, EntityLexicon, RetrievedEntity, ScoredHit, SimilarityEdge};
