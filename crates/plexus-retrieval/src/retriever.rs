//! HybridRetriever: primary vector + graph path with lexical fallback.

use std::collections::BTreeSet;

use plexus_core::config::RetrievalConfig;
use plexus_core::constants::MAX_GRAPH_DEPTH;
use plexus_core::errors::{ConfigError, PlexusResult};
use plexus_core::models::RetrievedEntity;
use plexus_core::traits::{IEmbeddingSource, IEntityStore};
use tracing::{debug, error, info, warn};

use crate::fallback::keyword_search;

/// Finds entities relevant to a free-text query.
///
/// Collaborators are injected at construction; the retriever holds no other
/// state, so each call decides Primary vs Fallback fresh from live
/// connectivity. The fallback transition is within-call only — nothing
/// sticks between searches, and there are no internal retries.
pub struct HybridRetriever<'a> {
    embedder: &'a dyn IEmbeddingSource,
    store: &'a dyn IEntityStore,
    config: RetrievalConfig,
}

impl<'a> HybridRetriever<'a> {
    pub fn new(
        embedder: &'a dyn IEmbeddingSource,
        store: &'a dyn IEntityStore,
        config: RetrievalConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            embedder,
            store,
            config,
        })
    }

    /// Search with the configured `semantic_top_k` and `graph_depth`.
    pub fn search_with_defaults(&self, query: &str) -> Vec<RetrievedEntity> {
        self.search(query, self.config.semantic_top_k, self.config.graph_depth)
    }

    /// Search for entities relevant to `query`.
    ///
    /// Primary: embed the query, take the `semantic_top_k` nearest entities,
    /// expand them `graph_depth` hops through the relationship graph, and
    /// return the deduplicated union sorted by name. Any failure — store
    /// disconnected, embedding failure, index error — falls back to lexical
    /// keyword scoring under the same result budget. The caller never sees
    /// those errors; a failure of the fallback itself yields an empty list.
    pub fn search(
        &self,
        query: &str,
        semantic_top_k: usize,
        graph_depth: usize,
    ) -> Vec<RetrievedEntity> {
        // Unbounded expansion can walk the whole graph; cap the hop count.
        let graph_depth = graph_depth.min(MAX_GRAPH_DEPTH);

        if !self.store.is_connected() {
            warn!("store disconnected, using keyword fallback");
            return self.fallback(query, semantic_top_k);
        }

        match self.primary(query, semantic_top_k, graph_depth) {
            Ok(results) => {
                info!(results = results.len(), "hybrid search complete");
                results
            }
            Err(e) => {
                warn!(error = %e, "primary search failed, using keyword fallback");
                self.fallback(query, semantic_top_k)
            }
        }
    }

    fn primary(
        &self,
        query: &str,
        semantic_top_k: usize,
        graph_depth: usize,
    ) -> PlexusResult<Vec<RetrievedEntity>> {
        let query_embedding = self.embedder.embed_query(query)?;
        let semantic_hits = self.store.vector_search(semantic_top_k, &query_embedding)?;

        // Distinct seed names, preserving hit order.
        let mut seed_names: Vec<String> = Vec::new();
        for hit in &semantic_hits {
            if !seed_names.contains(&hit.name) {
                seed_names.push(hit.name.clone());
            }
        }

        let expansion = self.store.expand_neighborhood(&seed_names, graph_depth)?;
        debug!(
            semantic = semantic_hits.len(),
            expanded = expansion.len(),
            "primary search gathered candidates"
        );

        // Union, deduplicated by (name, description); the BTreeSet gives a
        // stable name-sorted order within a process run.
        let mut results: BTreeSet<RetrievedEntity> = semantic_hits
            .into_iter()
            .map(|hit| RetrievedEntity::new(hit.name, hit.description))
            .collect();
        results.extend(expansion);

        Ok(results.into_iter().collect())
    }

    fn fallback(&self, query: &str, limit: usize) -> Vec<RetrievedEntity> {
        match self.store.list_all_entities() {
            Ok(entities) => {
                let results = keyword_search(&entities, query, limit);
                info!(
                    scanned = entities.len(),
                    results = results.len(),
                    "keyword fallback complete"
                );
                results
            }
            Err(e) => {
                error!(error = %e, "keyword fallback could not list entities");
                Vec::new()
            }
        }
    }
}
