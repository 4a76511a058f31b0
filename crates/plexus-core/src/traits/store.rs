use crate::errors::PlexusResult;
use crate::models::{Entity, EntityLexicon, RetrievedEntity, ScoredHit, SimilarityEdge};

/// Narrow query/update surface over the graph-shaped entity store.
///
/// The store's internals (which graph database, which index) are out of
/// scope; engines depend only on this contract.
pub trait IEntityStore: Send + Sync {
    /// Cheap liveness probe, no side effects.
    fn is_connected(&self) -> bool;

    /// Nearest-neighbor lookup against the vector index.
    ///
    /// Fails with [`StoreError`](crate::errors::StoreError) when the index
    /// is missing or the store is unreachable.
    fn vector_search(&self, k: usize, query_vector: &[f32]) -> PlexusResult<Vec<ScoredHit>>;

    /// Expand seed entities into their connected neighborhood, following
    /// relationships forward only, up to `max_depth` hops. Best-effort: an
    /// empty result is not an error.
    fn expand_neighborhood(
        &self,
        seed_names: &[String],
        max_depth: usize,
    ) -> PlexusResult<Vec<RetrievedEntity>>;

    /// Every stored entity in its lexical view. Used only by the keyword
    /// fallback; must be safe to call when the vector index is absent.
    fn list_all_entities(&self) -> PlexusResult<Vec<EntityLexicon>>;

    /// Upsert similarity edges, idempotent by the unordered `(id1, id2)` key.
    /// Recomputing overwrites, never duplicates.
    fn upsert_similarity_edges(&self, edges: &[SimilarityEdge]) -> PlexusResult<()>;

    /// Entities eligible for similarity computation: non-null embeddings
    /// only. `scope` filters to one project; `None` spans all projects.
    fn get_entities_for_similarity(&self, scope: Option<&str>) -> PlexusResult<Vec<Entity>>;
}
