use serde::{Deserialize, Serialize};

/// A `(name, description)` pair returned by retrieval. Produced per call,
/// consumed by the prompt builder, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RetrievedEntity {
    pub name: String,
    pub description: String,
}

impl RetrievedEntity {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A vector-search hit: a retrieved entity plus its index score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredHit {
    pub name: String,
    pub description: String,
    pub score: f64,
}

/// The lexical view of a stored entity used by the keyword fallback path.
/// Deliberately embedding-free so it stays valid when the vector index is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityLexicon {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}
