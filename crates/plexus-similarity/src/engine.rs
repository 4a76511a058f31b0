//! SimilarityEngine: all-pairs cross-diagram scoring and edge persistence.
//!
//! The engine is pure over its input pool; persistence is a separate
//! explicit step so the scoring logic stays independently testable.

use plexus_core::config::SimilarityConfig;
use plexus_core::errors::{ConfigError, PlexusResult};
use plexus_core::models::{Entity, SimilarityEdge};
use plexus_core::traits::IEntityStore;
use tracing::{debug, info, warn};

use crate::cosine::cosine_similarity;
use crate::keyset::{contextual_key_set, jaccard};

/// Scores entity pairs and decides which become persisted edges.
///
/// Construction fails fast on invalid config; the engine never mutates
/// shared state, so concurrent calls over different pools are safe.
pub struct SimilarityEngine {
    config: SimilarityConfig,
    /// Deployment-agreed embedding dimensionality; entities that disagree
    /// are skipped, not fatal.
    dimensions: usize,
}

impl SimilarityEngine {
    pub fn new(config: SimilarityConfig, dimensions: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, dimensions })
    }

    /// Full recompute: every unordered cross-diagram pair in the pool.
    ///
    /// Entities are pre-bucketed by diagram type and only compared across
    /// buckets: same-diagram duplication is structural, not semantic, so
    /// those pairs are never candidates for merging. Entities with missing,
    /// malformed, or zero embeddings are logged and excluded. An empty pool
    /// yields an empty edge list, not an error.
    pub fn calculate_similarities(&self, entities: &[Entity]) -> Vec<SimilarityEdge> {
        let comparable = self.filter_comparable(entities);

        // Bucket by diagram type, preserving pool order within each bucket.
        let mut buckets: Vec<(&str, Vec<&Entity>)> = Vec::new();
        for &entity in &comparable {
            match buckets.iter_mut().find(|(t, _)| *t == entity.diagram_type) {
                Some((_, bucket)) => bucket.push(entity),
                None => buckets.push((entity.diagram_type.as_str(), vec![entity])),
            }
        }

        let mut edges = Vec::new();
        for (i, (_, bucket_a)) in buckets.iter().enumerate() {
            for (_, bucket_b) in buckets.iter().skip(i + 1) {
                for e1 in bucket_a {
                    for e2 in bucket_b {
                        if let Some(edge) = self.edge_above_threshold(e1, e2) {
                            edges.push(edge);
                        }
                    }
                }
            }
        }

        info!(
            pool = entities.len(),
            comparable = comparable.len(),
            edges = edges.len(),
            "full similarity recompute complete"
        );
        edges
    }

    /// Incremental recompute: new batch against the existing pool only.
    ///
    /// Skips new-vs-new pairs entirely; an extraction batch comes from a
    /// single diagram, where the cross-diagram rule excludes them anyway.
    /// Use [`calculate_similarities`](Self::calculate_similarities) when the
    /// whole pool needs rescoring.
    pub fn calculate_incremental(
        &self,
        new_entities: &[Entity],
        existing: &[Entity],
    ) -> Vec<SimilarityEdge> {
        let new_comparable = self.filter_comparable(new_entities);
        let existing_comparable = self.filter_comparable(existing);

        let mut edges = Vec::new();
        for &e1 in &new_comparable {
            for &e2 in &existing_comparable {
                if e1.diagram_type == e2.diagram_type || e1.id == e2.id {
                    continue;
                }
                if let Some(edge) = self.edge_above_threshold(e1, e2) {
                    edges.push(edge);
                }
            }
        }

        debug!(
            new = new_comparable.len(),
            existing = existing_comparable.len(),
            edges = edges.len(),
            "incremental similarity pass complete"
        );
        edges
    }

    /// Fetch the scoped pool from the store, recompute, and persist.
    ///
    /// Store failures during fetch or upsert propagate unchanged so the
    /// caller can decide on retry or rollback; silent loss of computed
    /// edges is worse than a loud failure.
    pub fn process_full(
        &self,
        store: &dyn IEntityStore,
        scope: Option<&str>,
    ) -> PlexusResult<Vec<SimilarityEdge>> {
        let entities = store.get_entities_for_similarity(scope)?;
        let edges = self.calculate_similarities(&entities);
        if !edges.is_empty() {
            store.upsert_similarity_edges(&edges)?;
        }
        Ok(edges)
    }

    /// Score a single pair without applying the threshold.
    ///
    /// Symmetric in its arguments; the returned edge carries both component
    /// scores alongside the blend.
    pub fn score_pair(&self, e1: &Entity, e2: &Entity) -> SimilarityEdge {
        let embedding_similarity = match (&e1.embedding, &e2.embedding) {
            (Some(a), Some(b)) => cosine_similarity(a, b),
            _ => 0.0,
        };
        let keyword_similarity = jaccard(&contextual_key_set(e1), &contextual_key_set(e2));

        let w_emb = self.config.embedding_weight;
        let w_kw = self.config.keyword_weight;
        let combined =
            (w_emb * embedding_similarity + w_kw * keyword_similarity) / (w_emb + w_kw);

        SimilarityEdge::new(
            &e1.id,
            &e2.id,
            embedding_similarity,
            keyword_similarity,
            combined,
        )
    }

    fn edge_above_threshold(&self, e1: &Entity, e2: &Entity) -> Option<SimilarityEdge> {
        let edge = self.score_pair(e1, e2);
        // Strict inequality: a blend exactly at the threshold is excluded.
        (edge.combined_similarity > self.config.threshold).then_some(edge)
    }

    fn filter_comparable<'a>(&self, entities: &'a [Entity]) -> Vec<&'a Entity> {
        entities
            .iter()
            .filter(|e| {
                let valid = e.has_valid_embedding(self.dimensions);
                if !valid {
                    warn!(entity = %e.id, "skipping entity without a valid embedding");
                }
                valid
            })
            .collect()
    }
}
