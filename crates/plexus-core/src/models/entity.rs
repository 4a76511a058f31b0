use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// An extracted concept node from a generated diagram.
///
/// The id is the composite `{project}_{diagram_type}_{name}` and is unique
/// within a deployment. The embedding is populated in a second pass once the
/// vector has been computed; until then it is `None` and the entity is
/// excluded from similarity comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub entity_type: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
    pub project: String,
    pub diagram_type: String,
}

impl Entity {
    /// Create an entity with the canonical composite id and no embedding.
    pub fn new(
        project: impl Into<String>,
        diagram_type: impl Into<String>,
        name: impl Into<String>,
        entity_type: impl Into<String>,
        description: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        let project = project.into();
        let diagram_type = diagram_type.into();
        let name = name.into();
        let id = format!("{project}_{diagram_type}_{name}");
        Self {
            id,
            name,
            description: description.into(),
            entity_type: entity_type.into(),
            keywords,
            embedding: None,
            project,
            diagram_type,
        }
    }

    /// Attach an embedding, validating its dimensionality.
    ///
    /// Rejecting the vector here removes the malformed-embedding class of
    /// bugs before anything reaches a similarity pass.
    pub fn set_embedding(
        &mut self,
        embedding: Vec<f32>,
        expected_dims: usize,
    ) -> Result<(), ValidationError> {
        if embedding.len() != expected_dims {
            return Err(ValidationError::DimensionMismatch {
                entity_id: self.id.clone(),
                expected: expected_dims,
                actual: embedding.len(),
            });
        }
        self.embedding = Some(embedding);
        Ok(())
    }

    /// Builder-style variant of [`set_embedding`](Self::set_embedding) for tests
    /// and fixtures.
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Whether the embedding is present, of the expected dimensionality, and
    /// not all-zero. Entities failing this check are skipped, not fatal.
    pub fn has_valid_embedding(&self, expected_dims: usize) -> bool {
        match &self.embedding {
            Some(v) => v.len() == expected_dims && v.iter().any(|x| *x != 0.0),
            None => false,
        }
    }
}
