//! Read-only repository over the catalyst knowledge-base artifact.

use crate::core::models::catalyst::CatalystRecord;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

/// Default artifact compiled into the crate.
const BUNDLED_DATABASE: &str = include_str!("../../../data/catalyst_database.toml");

#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: Box<toml::de::Error>,
    },
    #[error("Invalid knowledge base: {0}")]
    Validation(String),
}

#[derive(Debug, Deserialize)]
struct KnowledgeBaseData {
    reaction_types: HashMap<String, String>,
    catalysts: Vec<CatalystRecord>,
}

/// In-memory view of the catalyst records and the canonical reaction-type
/// vocabulary.
///
/// Constructed once, schema-validated, and never mutated afterwards, so a
/// single instance may serve concurrent requests without synchronization.
/// Catalyst iteration order is the artifact order; the scoring engine uses
/// it as the deterministic tie-break.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    catalysts: Vec<CatalystRecord>,
    reaction_types: HashMap<String, String>,
}

impl KnowledgeBase {
    /// Loads the artifact bundled into the crate.
    pub fn bundled() -> Result<Self, KnowledgeBaseError> {
        Self::from_toml_str(BUNDLED_DATABASE, "<bundled>")
    }

    /// Loads and validates an artifact from disk.
    pub fn load(path: &Path) -> Result<Self, KnowledgeBaseError> {
        let content = std::fs::read_to_string(path).map_err(|e| KnowledgeBaseError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content, &path.to_string_lossy())
    }

    fn from_toml_str(content: &str, origin: &str) -> Result<Self, KnowledgeBaseError> {
        let data: KnowledgeBaseData =
            toml::from_str(content).map_err(|e| KnowledgeBaseError::Toml {
                path: origin.to_string(),
                source: Box::new(e),
            })?;
        Self::validate(&data)?;
        Ok(Self {
            catalysts: data.catalysts,
            reaction_types: data.reaction_types,
        })
    }

    fn validate(data: &KnowledgeBaseData) -> Result<(), KnowledgeBaseError> {
        if data.reaction_types.is_empty() {
            return Err(KnowledgeBaseError::Validation(
                "reaction-type vocabulary is empty".to_string(),
            ));
        }

        let mut seen_ids = HashSet::new();
        for catalyst in &data.catalysts {
            if !seen_ids.insert(catalyst.id.as_str()) {
                return Err(KnowledgeBaseError::Validation(format!(
                    "duplicate catalyst id '{}'",
                    catalyst.id
                )));
            }
            for reaction in &catalyst.reaction_types {
                if !data.reaction_types.contains_key(reaction) {
                    return Err(KnowledgeBaseError::Validation(format!(
                        "catalyst '{}' references unknown reaction type '{}'",
                        catalyst.id, reaction
                    )));
                }
            }
            let [min, max] = catalyst.typical_loading_mol_pct;
            if min > max || min < 0.0 {
                return Err(KnowledgeBaseError::Validation(format!(
                    "catalyst '{}' has invalid loading range [{}, {}]",
                    catalyst.id, min, max
                )));
            }
        }
        Ok(())
    }

    /// All records in artifact order.
    pub fn catalysts(&self) -> &[CatalystRecord] {
        &self.catalysts
    }

    /// The closed reaction-type vocabulary (key to description).
    pub fn reaction_types(&self) -> &HashMap<String, String> {
        &self.reaction_types
    }

    pub fn find(&self, id: &str) -> Option<&CatalystRecord> {
        self.catalysts.iter().find(|c| c.id == id)
    }

    /// Registered ligand structure reference for a catalyst, if any.
    pub fn ligand_structure(&self, id: &str) -> Option<&str> {
        self.find(id)?.ligand_smiles.as_deref()
    }
}
