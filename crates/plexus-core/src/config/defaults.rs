//! Default values shared by the config structs.

/// Weight given to embedding cosine similarity in the blended score.
pub const DEFAULT_EMBEDDING_WEIGHT: f64 = 0.7;

/// Weight given to contextual keyword Jaccard similarity.
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.3;

/// Blended-score threshold above which an edge is persisted (strict).
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;

/// Nearest-neighbor budget for the primary retrieval path; also the result
/// cap for the lexical fallback.
pub const DEFAULT_SEMANTIC_TOP_K: usize = 5;

/// Maximum hops for graph-neighborhood expansion.
pub const DEFAULT_GRAPH_DEPTH: usize = 2;
