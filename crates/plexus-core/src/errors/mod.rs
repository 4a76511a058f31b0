//! Error taxonomy for the Plexus workspace.
//!
//! One enum per subsystem, aggregated into [`PlexusError`]. Per-pair
//! similarity issues are logged and skipped at the call site, never raised;
//! persistence and configuration failures surface loudly.

mod config_error;
mod embedding_error;
mod store_error;
mod validation_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use store_error::StoreError;
pub use validation_error::ValidationError;

/// Top-level error for the Plexus workspace.
#[derive(Debug, thiserror::Error)]
pub enum PlexusError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience result alias used across all Plexus crates.
pub type PlexusResult<T> = Result<T, PlexusError>;
