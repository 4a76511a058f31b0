use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted similarity link between two entities from different diagrams.
///
/// The pair is canonically ordered (`id1 <= id2`) so that recomputation
/// overwrites rather than duplicates: the store upserts by the unordered
/// pair key. Both component scores are kept alongside the blend so
/// downstream consumers can audit how a link was scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityEdge {
    pub id1: String,
    pub id2: String,
    /// Cosine similarity of the two embeddings, in [-1, 1].
    pub embedding_similarity: f64,
    /// Jaccard similarity of the two contextual key sets, in [0, 1].
    pub keyword_similarity: f64,
    /// Weighted blend of the two components, in [0, 1] for normalized inputs.
    pub combined_similarity: f64,
    /// When this edge was last computed. Overwritten on recompute.
    pub computed_at: DateTime<Utc>,
}

impl SimilarityEdge {
    /// Build an edge with canonical id ordering.
    pub fn new(
        id1: impl Into<String>,
        id2: impl Into<String>,
        embedding_similarity: f64,
        keyword_similarity: f64,
        combined_similarity: f64,
    ) -> Self {
        let (mut a, mut b) = (id1.into(), id2.into());
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        Self {
            id1: a,
            id2: b,
            embedding_similarity,
            keyword_similarity,
            combined_similarity,
            computed_at: Utc::now(),
        }
    }

    /// The unordered pair key the store deduplicates on.
    pub fn pair_key(&self) -> (String, String) {
        (self.id1.clone(), self.id2.clone())
    }
}
