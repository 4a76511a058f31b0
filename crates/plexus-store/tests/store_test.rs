//! Contract tests for the in-memory store: vector search ordering,
//! bounded BFS expansion, idempotent upsert, scope filtering, outage
//! behavior.

use plexus_core::models::SimilarityEdge;
use plexus_core::traits::IEntityStore;
use plexus_store::MemoryStore;
use test_fixtures::{entity, unit_vec};

const DIMS: usize = 4;

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert_entity(
        entity("alpha", "requirements", "pump", &["pump", "flow"])
            .with_embedding(unit_vec(DIMS, 0)),
    );
    store.insert_entity(
        entity("alpha", "components", "valve", &["valve"]).with_embedding(unit_vec(DIMS, 1)),
    );
    store.insert_entity(
        entity("beta", "requirements", "rotor", &["rotor"]).with_embedding(unit_vec(DIMS, 2)),
    );
    store
}

#[test]
fn vector_search_ranks_by_cosine_and_truncates() {
    let store = seeded_store();
    let hits = store.vector_search(2, &unit_vec(DIMS, 0)).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].name, "pump");
    assert!((hits[0].score - 1.0).abs() < 1e-9);
    assert!(hits[1].score < hits[0].score);
}

#[test]
fn vector_search_skips_entities_without_embeddings() {
    let store = MemoryStore::new();
    store.insert_entity(entity("p", "requirements", "bare", &[]));
    assert!(store.vector_search(5, &unit_vec(DIMS, 0)).unwrap().is_empty());
}

#[test]
fn expansion_follows_relationships_forward_up_to_depth() {
    let store = seeded_store();
    store.insert_entity(entity("alpha", "components", "seal", &[]));
    store.add_relationship("pump", "valve");
    store.add_relationship("valve", "seal");
    // Reverse edge; forward-only traversal must not follow it.
    store.add_relationship("rotor", "pump");

    let depth1 = store
        .expand_neighborhood(&["pump".to_string()], 1)
        .unwrap();
    let names: Vec<&str> = depth1.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["pump", "valve"]);

    let depth2 = store
        .expand_neighborhood(&["pump".to_string()], 2)
        .unwrap();
    let names: Vec<&str> = depth2.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["pump", "seal", "valve"]);
}

#[test]
fn expansion_of_unknown_seed_returns_empty() {
    let store = seeded_store();
    assert!(store
        .expand_neighborhood(&["ghost".to_string()], 3)
        .unwrap()
        .is_empty());
}

#[test]
fn upsert_overwrites_by_unordered_pair_key() {
    let store = MemoryStore::new();
    let first = SimilarityEdge::new("a", "b", 0.9, 0.2, 0.7);
    let second = SimilarityEdge::new("b", "a", 0.8, 0.3, 0.65);
    store.upsert_similarity_edges(&[first]).unwrap();
    store.upsert_similarity_edges(&[second.clone()]).unwrap();

    assert_eq!(store.edge_count(), 1);
    let edges = store.similarity_edges();
    assert!((edges[0].combined_similarity - second.combined_similarity).abs() < 1e-12);
}

#[test]
fn get_entities_for_similarity_filters_scope_and_embeddings() {
    let store = seeded_store();
    store.insert_entity(entity("alpha", "sequence", "bare", &[]));

    let all = store.get_entities_for_similarity(None).unwrap();
    assert_eq!(all.len(), 3);

    let alpha = store.get_entities_for_similarity(Some("alpha")).unwrap();
    assert_eq!(alpha.len(), 2);
    assert!(alpha.iter().all(|e| e.project == "alpha"));
}

#[test]
fn insert_entity_replaces_by_id() {
    let store = MemoryStore::new();
    store.insert_entity(entity("p", "requirements", "pump", &["old"]));
    store.insert_entity(entity("p", "requirements", "pump", &["new"]));
    let all = store.list_all_entities().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].keywords, vec!["new"]);
}

#[test]
fn disconnected_store_fails_queries_but_reports_liveness() {
    let store = seeded_store();
    store.set_connected(false);
    assert!(!store.is_connected());
    assert!(store.vector_search(5, &unit_vec(DIMS, 0)).is_err());
    assert!(store.list_all_entities().is_err());
    assert!(store
        .upsert_similarity_edges(&[SimilarityEdge::new("a", "b", 0.1, 0.1, 0.1)])
        .is_err());

    store.set_connected(true);
    assert!(store.list_all_entities().is_ok());
}
