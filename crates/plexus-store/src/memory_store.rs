use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use plexus_core::errors::{PlexusResult, StoreError};
use plexus_core::models::{Entity, EntityLexicon, RetrievedEntity, ScoredHit, SimilarityEdge};
use plexus_core::traits::IEntityStore;
use plexus_similarity::cosine_similarity;
use tracing::debug;

#[derive(Default)]
struct Tables {
    /// Insertion-ordered entity table; fallback scans rely on this order.
    entities: Vec<Entity>,
    /// Forward adjacency by entity name.
    adjacency: HashMap<String, Vec<String>>,
    /// Similarity edges keyed by the canonical unordered pair.
    edges: HashMap<(String, String), SimilarityEdge>,
}

/// In-memory entity store.
///
/// Interior mutex keeps concurrent callers safe; `set_connected(false)`
/// simulates an outage so tests can drive the retriever's fallback path.
pub struct MemoryStore {
    tables: Mutex<Tables>,
    connected: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            connected: AtomicBool::new(true),
        }
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    /// Insert or replace an entity, keyed by id.
    pub fn insert_entity(&self, entity: Entity) {
        let mut tables = self.lock();
        match tables.entities.iter_mut().find(|e| e.id == entity.id) {
            Some(existing) => *existing = entity,
            None => tables.entities.push(entity),
        }
    }

    /// Add a directed relationship between two entity names.
    pub fn add_relationship(&self, source: impl Into<String>, target: impl Into<String>) {
        self.lock()
            .adjacency
            .entry(source.into())
            .or_default()
            .push(target.into());
    }

    /// Snapshot of all persisted similarity edges, for inspection.
    pub fn similarity_edges(&self) -> Vec<SimilarityEdge> {
        self.lock().edges.values().cloned().collect()
    }

    pub fn edge_count(&self) -> usize {
        self.lock().edges.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().expect("store lock poisoned")
    }

    fn ensure_connected(&self) -> Result<(), StoreError> {
        if self.connected.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Disconnected)
        }
    }
}

impl IEntityStore for MemoryStore {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn vector_search(&self, k: usize, query_vector: &[f32]) -> PlexusResult<Vec<ScoredHit>> {
        self.ensure_connected()?;
        let tables = self.lock();

        let mut hits: Vec<ScoredHit> = tables
            .entities
            .iter()
            .filter_map(|e| {
                let embedding = e.embedding.as_ref()?;
                let score = cosine_similarity(embedding, query_vector);
                Some(ScoredHit {
                    name: e.name.clone(),
                    description: e.description.clone(),
                    score,
                })
            })
            .collect();

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(k);
        debug!(k, hits = hits.len(), "vector search complete");
        Ok(hits)
    }

    fn expand_neighborhood(
        &self,
        seed_names: &[String],
        max_depth: usize,
    ) -> PlexusResult<Vec<RetrievedEntity>> {
        self.ensure_connected()?;
        let tables = self.lock();

        // Forward BFS from every seed, bounded by max_depth hops.
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
        for seed in seed_names {
            if visited.insert(seed.as_str()) {
                queue.push_back((seed.as_str(), 0));
            }
        }
        while let Some((name, depth)) = queue.pop_front() {
            if depth >= max_depth {
                continue;
            }
            if let Some(targets) = tables.adjacency.get(name) {
                for target in targets {
                    if visited.insert(target.as_str()) {
                        queue.push_back((target.as_str(), depth + 1));
                    }
                }
            }
        }

        // Resolve visited names against the entity table, name-ordered.
        let resolved: BTreeMap<&str, &Entity> = tables
            .entities
            .iter()
            .filter(|e| visited.contains(e.name.as_str()))
            .map(|e| (e.name.as_str(), e))
            .collect();

        Ok(resolved
            .into_values()
            .map(|e| RetrievedEntity::new(&e.name, &e.description))
            .collect())
    }

    fn list_all_entities(&self) -> PlexusResult<Vec<EntityLexicon>> {
        self.ensure_connected()?;
        Ok(self
            .lock()
            .entities
            .iter()
            .map(|e| EntityLexicon {
                name: e.name.clone(),
                description: e.description.clone(),
                keywords: e.keywords.clone(),
            })
            .collect())
    }

    fn upsert_similarity_edges(&self, edges: &[SimilarityEdge]) -> PlexusResult<()> {
        self.ensure_connected().map_err(|_| StoreError::UpsertFailed {
            reason: "store is not connected".to_string(),
        })?;
        let mut tables = self.lock();
        for edge in edges {
            tables.edges.insert(edge.pair_key(), edge.clone());
        }
        debug!(upserted = edges.len(), total = tables.edges.len(), "edges upserted");
        Ok(())
    }

    fn get_entities_for_similarity(&self, scope: Option<&str>) -> PlexusResult<Vec<Entity>> {
        self.ensure_connected()?;
        Ok(self
            .lock()
            .entities
            .iter()
            .filter(|e| e.embedding.is_some())
            .filter(|e| scope.map_or(true, |s| e.project == s))
            .cloned()
            .collect())
    }
}
