//! Catalyst recommendation workflow.

use crate::core::kb::KnowledgeBase;
use crate::core::models::constraints::Constraints;
use crate::core::models::report::ReportStatus;
use crate::engine::normalize::normalize;
use crate::engine::scoring::{self, ScoredResult};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub reaction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substrate: Option<String>,
    #[serde(default, skip_serializing_if = "Constraints::is_empty")]
    pub constraints: Constraints,
    #[serde(default)]
    pub enantioselective: bool,
}

/// Echo of the request alongside the normalized reaction-type set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryEcho {
    pub reaction: String,
    /// Sorted canonical keys the descriptor resolved to.
    pub normalized_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substrate: Option<String>,
    /// Omitted from serialized reports when no constraint was set.
    #[serde(default, skip_serializing_if = "Constraints::is_empty")]
    pub constraints: Constraints,
    pub enantioselective: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub query: QueryEcho,
    pub results: Vec<ScoredResult>,
    pub total_matches: usize,
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Recommendation {
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn top(&self) -> Option<&ScoredResult> {
        self.results.first()
    }
}

/// Normalizes the reaction descriptor, scores every catalyst in the
/// repository, and returns the ranked recommendation.
///
/// An unknown descriptor is not an error: the normalizer falls back to the
/// literal token, scoring yields no matches, and the report carries a
/// suggestion to broaden the search terms.
#[instrument(skip_all, name = "recommend_workflow", fields(reaction = %request.reaction))]
pub fn run(kb: &KnowledgeBase, request: &RecommendRequest) -> Recommendation {
    let normalized = normalize(&request.reaction, kb.reaction_types());
    let results = scoring::rank(
        kb,
        &normalized,
        &request.constraints,
        request.enantioselective,
    );
    info!(
        normalized = normalized.len(),
        matches = results.len(),
        "scored catalyst repository"
    );

    let total_matches = results.len();
    let (status, suggestion) = if results.is_empty() {
        (
            ReportStatus::NoMatches,
            Some(format!(
                "No catalysts found for '{}'. Try broader terms like 'coupling' or 'hydrogenation'.",
                request.reaction
            )),
        )
    } else {
        (ReportStatus::Success, None)
    };

    Recommendation {
        query: QueryEcho {
            reaction: request.reaction.clone(),
            normalized_types: normalized.into_iter().collect(),
            substrate: request.substrate.clone(),
            constraints: request.constraints.clone(),
            enantioselective: request.enantioselective,
        },
        results,
        total_matches,
        status,
        suggestion,
    }
}
