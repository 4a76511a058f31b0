/// Configuration errors. Fatal at construction time, never at call time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("embedding_weight and keyword_weight cannot both be zero")]
    ZeroWeights,

    #[error("{name} must be non-negative, got {value}")]
    NegativeWeight { name: String, value: f64 },

    #[error("threshold must be in [0, 1], got {value}")]
    ThresholdOutOfRange { value: f64 },

    #[error("semantic_top_k must be greater than zero")]
    ZeroTopK,

    #[error("embedding dimensions must be greater than zero")]
    ZeroDimensions,

    #[error("graph_depth {value} exceeds the maximum of {max}")]
    GraphDepthTooLarge { value: usize, max: usize },

    #[error("config parse failed: {reason}")]
    ParseFailed { reason: String },
}
