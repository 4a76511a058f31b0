/// Entity-store errors: connectivity loss and query failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store is not connected")]
    Disconnected,

    #[error("query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("vector index '{index}' is missing")]
    IndexMissing { index: String },

    #[error("similarity edge upsert failed: {reason}")]
    UpsertFailed { reason: String },
}
