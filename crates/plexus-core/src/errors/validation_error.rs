/// Entity validation errors. Engines skip the offending entity and
/// continue; these never abort a whole similarity pass.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("entity '{entity_id}' has no embedding")]
    MissingEmbedding { entity_id: String },

    #[error("entity '{entity_id}' embedding has {actual} dimensions, expected {expected}")]
    DimensionMismatch {
        entity_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("entity '{entity_id}' embedding is a zero vector")]
    ZeroVector { entity_id: String },
}
