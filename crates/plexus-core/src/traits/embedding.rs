use crate::errors::PlexusResult;

/// Text-to-vector embedding provider.
pub trait IEmbeddingSource: Send + Sync {
    /// Embed a query text, returning a vector of floats.
    ///
    /// Fails with [`EmbeddingError`](crate::errors::EmbeddingError) on
    /// provider failure; retrieval treats that as a reason to fall back.
    fn embed_query(&self, text: &str) -> PlexusResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
