//! Lexical keyword fallback: scores stored entities against the query by
//! word overlap. Always available — needs no vector index and no embedder.

use std::collections::HashSet;
use std::sync::OnceLock;

use plexus_core::models::{EntityLexicon, RetrievedEntity};
use regex::Regex;

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w+").expect("static word pattern"))
}

/// Split text into its lowercase word set.
pub fn tokenize(text: &str) -> HashSet<String> {
    word_pattern()
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Score all entities against the query and return the best `limit` of them.
///
/// Per entity: `score = |query ∩ keywords| + |query ∩ tokens(name + " " +
/// description)|`. Only positive scores survive; the sort is stable so ties
/// keep store order, and `limit` is the same budget the primary path uses.
pub fn keyword_search(
    entities: &[EntityLexicon],
    query: &str,
    limit: usize,
) -> Vec<RetrievedEntity> {
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(usize, &EntityLexicon)> = entities
        .iter()
        .filter_map(|entity| {
            let keyword_matches = entity
                .keywords
                .iter()
                .filter(|kw| query_tokens.contains(kw.as_str()))
                .count();
            let text_tokens = tokenize(&format!("{} {}", entity.name, entity.description));
            let text_matches = query_tokens.intersection(&text_tokens).count();

            let score = keyword_matches + text_matches;
            (score > 0).then_some((score, entity))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, entity)| RetrievedEntity::new(&entity.name, &entity.description))
        .collect()
}
