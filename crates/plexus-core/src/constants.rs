/// Embedding dimensionality agreed for the deployment.
/// Matches the vector index the store is provisioned with.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;

/// Maximum neighborhood expansion depth a retriever will request.
pub const MAX_GRAPH_DEPTH: usize = 10;
