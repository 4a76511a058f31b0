//! End-to-end flow over the real in-memory store: embed entity
//! descriptions, compute and persist similarity edges, then retrieve with
//! the hybrid path and degrade to the keyword fallback on outage.

use plexus_core::config::{RetrievalConfig, SimilarityConfig};
use plexus_core::traits::IEmbeddingSource;
use plexus_embeddings::TfIdfEmbedder;
use plexus_retrieval::HybridRetriever;
use plexus_similarity::SimilarityEngine;
use plexus_store::MemoryStore;
use test_fixtures::entity;

const DIMS: usize = 64;

fn seeded() -> (MemoryStore, TfIdfEmbedder) {
    let embedder = TfIdfEmbedder::new(DIMS).expect("nonzero dimensions");
    let store = MemoryStore::new();

    let specs = [
        ("requirements", "cdc_pump", "hydraulic pump providing coolant flow", vec!["pump", "flow"]),
        ("components", "part_pump", "hydraulic pump with mechanical seal", vec!["pump", "seal"]),
        ("components", "gearbox", "gearbox assembly transmitting torque", vec!["gearbox", "torque"]),
        ("sequence", "controller", "plc controller sequencing the gearbox", vec!["plc", "gearbox"]),
    ];
    for (diagram, name, description, keywords) in specs {
        let mut e = entity(
            "turbine",
            diagram,
            name,
            &keywords.iter().map(|s| &**s).collect::<Vec<_>>(),
        );
        e.description = description.to_string();
        let embedding = embedder.embed_query(description).unwrap();
        e.set_embedding(embedding, DIMS).unwrap();
        store.insert_entity(e);
    }
    store.add_relationship("gearbox", "controller");
    (store, embedder)
}

#[test]
fn similarity_pass_links_the_two_pumps() {
    let (store, _) = seeded();
    let engine = SimilarityEngine::new(
        SimilarityConfig {
            embedding_weight: 0.7,
            keyword_weight: 0.3,
            threshold: 0.25,
        },
        DIMS,
    )
    .unwrap();

    let edges = engine.process_full(&store, Some("turbine")).unwrap();
    let pump_edge = edges
        .iter()
        .find(|e| e.id1.contains("part_pump") && e.id2.contains("cdc_pump"))
        .expect("pump entities should link");
    assert!(pump_edge.embedding_similarity > 0.2);
    assert!(pump_edge.keyword_similarity > 0.0);
    assert_eq!(store.edge_count(), edges.len());

    // Recompute overwrites, never duplicates.
    engine.process_full(&store, Some("turbine")).unwrap();
    assert_eq!(store.edge_count(), edges.len());
}

#[test]
fn hybrid_search_reaches_expansion_neighbors() {
    let (store, embedder) = seeded();
    let retriever =
        HybridRetriever::new(&embedder, &store, RetrievalConfig::default()).unwrap();

    let results = retriever.search("gearbox assembly torque", 2, 1);
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    // The gearbox is a semantic hit; the controller only arrives through
    // the forward relationship expansion.
    assert!(names.contains(&"gearbox"));
    assert!(names.contains(&"controller"));
}

#[test]
fn outage_degrades_to_keyword_fallback_and_recovers() {
    let (store, embedder) = seeded();
    let retriever =
        HybridRetriever::new(&embedder, &store, RetrievalConfig::default()).unwrap();

    store.set_connected(false);
    assert!(retriever.search("gearbox", 5, 2).is_empty());

    store.set_connected(true);
    let results = retriever.search("gearbox", 5, 2);
    assert!(!results.is_empty());
}
