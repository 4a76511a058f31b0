//! Property tests for the similarity layer.

use proptest::prelude::*;

use plexus_core::config::SimilarityConfig;
use plexus_similarity::{contextual_key_set, cosine_similarity, jaccard, SimilarityEngine};
use test_fixtures::entity;

fn small_vec() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-10.0f32..10.0, 4)
}

fn keywords() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..5)
}

proptest! {
    #[test]
    fn cosine_is_symmetric_and_bounded(a in small_vec(), b in small_vec()) {
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-12);
        prop_assert!((-1.0..=1.0).contains(&ab));
    }

    #[test]
    fn cosine_of_self_is_one_or_zero(a in small_vec()) {
        let sim = cosine_similarity(&a, &a);
        // Zero vectors hit the guard; everything else is ~1.
        if a.iter().all(|x| *x == 0.0) {
            prop_assert_eq!(sim, 0.0);
        } else {
            prop_assert!((sim - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn jaccard_is_symmetric_and_bounded(kw_a in keywords(), kw_b in keywords()) {
        let a = contextual_key_set(&entity(
            "p", "d1", "a",
            &kw_a.iter().map(String::as_str).collect::<Vec<_>>(),
        ));
        let b = contextual_key_set(&entity(
            "p", "d2", "b",
            &kw_b.iter().map(String::as_str).collect::<Vec<_>>(),
        ));
        let ab = jaccard(&a, &b);
        prop_assert!((ab - jaccard(&b, &a)).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn blended_score_is_symmetric(
        v1 in small_vec(),
        v2 in small_vec(),
        kw_a in keywords(),
        kw_b in keywords(),
    ) {
        let engine = SimilarityEngine::new(SimilarityConfig::default(), 4).unwrap();
        let a = entity(
            "p", "requirements", "a",
            &kw_a.iter().map(String::as_str).collect::<Vec<_>>(),
        )
        .with_embedding(v1);
        let b = entity(
            "p", "components", "b",
            &kw_b.iter().map(String::as_str).collect::<Vec<_>>(),
        )
        .with_embedding(v2);
        let ab = engine.score_pair(&a, &b);
        let ba = engine.score_pair(&b, &a);
        prop_assert!((ab.combined_similarity - ba.combined_similarity).abs() < 1e-12);
    }

    #[test]
    fn no_edge_ever_at_or_below_threshold(
        v1 in small_vec(),
        v2 in small_vec(),
        threshold in 0.0f64..1.0,
    ) {
        let engine = SimilarityEngine::new(
            SimilarityConfig { threshold, ..Default::default() },
            4,
        )
        .unwrap();
        let pool = vec![
            entity("p", "requirements", "a", &["x"]).with_embedding(v1),
            entity("p", "components", "b", &["x"]).with_embedding(v2),
        ];
        for edge in engine.calculate_similarities(&pool) {
            prop_assert!(edge.combined_similarity > threshold);
        }
    }
}
