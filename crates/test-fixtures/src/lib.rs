//! Shared fakes and builders for Plexus integration tests.
//!
//! Provides scripted implementations of the collaborator traits so engine
//! tests can run against deterministic stores and embedders, plus entity
//! builders for common shapes.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use plexus_core::errors::{EmbeddingError, PlexusResult, StoreError};
use plexus_core::models::{Entity, EntityLexicon, RetrievedEntity, ScoredHit, SimilarityEdge};
use plexus_core::traits::{IEmbeddingSource, IEntityStore};

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build an entity with keywords and no embedding.
pub fn entity(project: &str, diagram: &str, name: &str, keywords: &[&str]) -> Entity {
    Entity::new(
        project,
        diagram,
        name,
        "component",
        format!("{name} description"),
        keywords.iter().map(|s| s.to_string()).collect(),
    )
}

/// A unit vector of the given dimensionality with a single hot axis.
pub fn unit_vec(dims: usize, axis: usize) -> Vec<f32> {
    let mut v = vec![0.0; dims];
    v[axis % dims] = 1.0;
    v
}

// ---------------------------------------------------------------------------
// Embedders
// ---------------------------------------------------------------------------

/// Embedder that always returns the same fixed vector.
pub struct FixedEmbedder {
    vector: Vec<f32>,
}

impl FixedEmbedder {
    pub fn new(vector: Vec<f32>) -> Self {
        Self { vector }
    }
}

impl IEmbeddingSource for FixedEmbedder {
    fn embed_query(&self, _text: &str) -> PlexusResult<Vec<f32>> {
        Ok(self.vector.clone())
    }

    fn dimensions(&self) -> usize {
        self.vector.len()
    }

    fn name(&self) -> &str {
        "fixed"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Embedder whose every call fails with a provider error.
pub struct FailingEmbedder;

impl IEmbeddingSource for FailingEmbedder {
    fn embed_query(&self, _text: &str) -> PlexusResult<Vec<f32>> {
        Err(EmbeddingError::GenerationFailed {
            reason: "scripted failure".to_string(),
        }
        .into())
    }

    fn dimensions(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn is_available(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Scripted store
// ---------------------------------------------------------------------------

/// A store whose query surface is scripted per test.
///
/// Call counters record which paths the engine under test actually took;
/// `set_connected` and `fail_vector_search` steer it between them.
#[derive(Default)]
pub struct ScriptedStore {
    connected: AtomicBool,
    fail_vector_search: bool,
    semantic_hits: Vec<ScoredHit>,
    expansion: Vec<RetrievedEntity>,
    lexicon: Vec<EntityLexicon>,
    similarity_pool: Vec<Entity>,
    pub vector_search_calls: AtomicUsize,
    pub expand_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub upserted: Mutex<Vec<SimilarityEdge>>,
}

impl ScriptedStore {
    /// A connected store with empty scripted results.
    pub fn connected() -> Self {
        let store = Self::default();
        store.connected.store(true, Ordering::SeqCst);
        store
    }

    /// A store that reports itself disconnected.
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    pub fn with_semantic_hits(mut self, hits: Vec<ScoredHit>) -> Self {
        self.semantic_hits = hits;
        self
    }

    pub fn with_expansion(mut self, expansion: Vec<RetrievedEntity>) -> Self {
        self.expansion = expansion;
        self
    }

    pub fn with_lexicon(mut self, lexicon: Vec<EntityLexicon>) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_similarity_pool(mut self, pool: Vec<Entity>) -> Self {
        self.similarity_pool = pool;
        self
    }

    /// Make every `vector_search` call fail with a store error.
    pub fn with_failing_vector_search(mut self) -> Self {
        self.fail_vector_search = true;
        self
    }
}

impl IEntityStore for ScriptedStore {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn vector_search(&self, k: usize, _query_vector: &[f32]) -> PlexusResult<Vec<ScoredHit>> {
        self.vector_search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_vector_search {
            return Err(StoreError::IndexMissing {
                index: "entity_embeddings".to_string(),
            }
            .into());
        }
        Ok(self.semantic_hits.iter().take(k).cloned().collect())
    }

    fn expand_neighborhood(
        &self,
        _seed_names: &[String],
        _max_depth: usize,
    ) -> PlexusResult<Vec<RetrievedEntity>> {
        self.expand_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.expansion.clone())
    }

    fn list_all_entities(&self) -> PlexusResult<Vec<EntityLexicon>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.lexicon.clone())
    }

    fn upsert_similarity_edges(&self, edges: &[SimilarityEdge]) -> PlexusResult<()> {
        self.upserted
            .lock()
            .expect("upserted lock poisoned")
            .extend_from_slice(edges);
        Ok(())
    }

    fn get_entities_for_similarity(&self, scope: Option<&str>) -> PlexusResult<Vec<Entity>> {
        Ok(self
            .similarity_pool
            .iter()
            .filter(|e| scope.map_or(true, |s| e.project == s))
            .filter(|e| e.embedding.is_some())
            .cloned()
            .collect())
    }
}

/// A store whose every query fails with a connectivity error.
pub struct BrokenStore;

impl IEntityStore for BrokenStore {
    fn is_connected(&self) -> bool {
        false
    }

    fn vector_search(&self, _k: usize, _query_vector: &[f32]) -> PlexusResult<Vec<ScoredHit>> {
        Err(StoreError::Disconnected.into())
    }

    fn expand_neighborhood(
        &self,
        _seed_names: &[String],
        _max_depth: usize,
    ) -> PlexusResult<Vec<RetrievedEntity>> {
        Err(StoreError::Disconnected.into())
    }

    fn list_all_entities(&self) -> PlexusResult<Vec<EntityLexicon>> {
        Err(StoreError::Disconnected.into())
    }

    fn upsert_similarity_edges(&self, _edges: &[SimilarityEdge]) -> PlexusResult<()> {
        Err(StoreError::UpsertFailed {
            reason: "store unreachable".to_string(),
        }
        .into())
    }

    fn get_entities_for_similarity(&self, _scope: Option<&str>) -> PlexusResult<Vec<Entity>> {
        Err(StoreError::Disconnected.into())
    }
}
