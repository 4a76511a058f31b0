//! Contextual key sets: the tagged token sets Jaccard comparison runs on.
//!
//! Raw keyword overlap conflates identically-named generic keywords across
//! unrelated domains. Tagging every token with its origin axis (project,
//! diagram, entity name, keyword) makes the Jaccard score sensitive to
//! contextual overlap, not just shared vocabulary.

use std::collections::BTreeSet;

use plexus_core::models::Entity;

/// Build the tagged token set for one entity.
///
/// Pure and deterministic: `project:<p>`, `diagram:<d>`, `entity:<name>`,
/// and one `keyword:<kw>` per keyword.
pub fn contextual_key_set(entity: &Entity) -> BTreeSet<String> {
    let mut set = BTreeSet::new();
    set.insert(format!("project:{}", entity.project));
    set.insert(format!("diagram:{}", entity.diagram_type));
    set.insert(format!("entity:{}", entity.name));
    for kw in &entity.keywords {
        set.insert(format!("keyword:{kw}"));
    }
    set
}

/// Jaccard similarity of two token sets: |a ∩ b| / |a ∪ b|.
/// Returns 0.0 when either set is empty.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}
