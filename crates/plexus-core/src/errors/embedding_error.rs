/// Embedding provider errors. In the retriever these trigger the lexical
/// fallback rather than propagating to the caller.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("embedding generation failed: {reason}")]
    GenerationFailed { reason: String },
}
