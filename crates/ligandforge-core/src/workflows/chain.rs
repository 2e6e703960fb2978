//! Chain orchestrator: routes a unified request to the recommendation and
//! ligand-design workflows and assembles the combined report.

use super::{design, recommend};
use crate::core::chem::ChemToolkit;
use crate::core::kb::KnowledgeBase;
use crate::core::models::constraints::Constraints;
use crate::core::models::report::ReportStatus;
use crate::core::models::variant::Strategy;
use crate::workflows::design::{DesignRequest, LigandDesign};
use crate::workflows::recommend::{Recommendation, RecommendRequest};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

pub const AGENT_NAME: &str = "catalyst-design";

/// Unified request accepted by the orchestrator. The field aliases mirror
/// the external request surface (`reaction_type`, `smiles`, `ligand`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainRequest {
    #[serde(default, alias = "reaction_type", skip_serializing_if = "Option::is_none")]
    pub reaction: Option<String>,
    #[serde(default, alias = "smiles", skip_serializing_if = "Option::is_none")]
    pub substrate: Option<String>,
    #[serde(default, alias = "ligand", skip_serializing_if = "Option::is_none")]
    pub scaffold: Option<String>,
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default, skip_serializing_if = "Constraints::is_empty")]
    pub constraints: Constraints,
    #[serde(default)]
    pub enantioselective: bool,
    #[serde(default = "default_context")]
    pub context: String,
}

fn default_context() -> String {
    "user".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainSections {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ligand_design: Option<LigandDesign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ligand_optimization: Option<LigandDesign>,
}

impl ChainSections {
    fn is_empty(&self) -> bool {
        self.recommendation.is_none()
            && self.ligand_design.is_none()
            && self.ligand_optimization.is_none()
    }
}

/// The unified report returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainReport {
    pub agent: String,
    pub version: String,
    pub context: String,
    pub status: ReportStatus,
    pub report: ChainSections,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Sorted follow-on hints derived from the produced sections.
    pub recommend_next: Vec<String>,
    pub timestamp: String,
}

/// Routes the request: a reaction field runs the recommendation workflow, a
/// scaffold field runs ligand design, and a reaction-only request with at
/// least one result auto-chains ligand optimization onto the top catalyst's
/// registered ligand structure (best-effort, skipped silently when none is
/// registered).
#[instrument(skip_all, name = "chain_workflow", fields(context = %request.context))]
pub fn run<T: ChemToolkit>(kb: &KnowledgeBase, toolkit: &T, request: &ChainRequest) -> ChainReport {
    let mut sections = ChainSections::default();

    if let Some(reaction) = &request.reaction {
        sections.recommendation = Some(recommend::run(
            kb,
            &RecommendRequest {
                reaction: reaction.clone(),
                substrate: request.substrate.clone(),
                constraints: request.constraints.clone(),
                enantioselective: request.enantioselective,
            },
        ));
    }

    if let Some(scaffold) = &request.scaffold {
        sections.ligand_design = Some(design::run(
            toolkit,
            &DesignRequest {
                scaffold: scaffold.clone(),
                strategy: request.strategy,
            },
        ));
    }

    // Auto-chain: optimize the top recommendation's ligand when the caller
    // did not bring a scaffold of their own.
    if request.scaffold.is_none()
        && let Some(recommendation) = &sections.recommendation
        && let Some(top) = recommendation.top()
    {
        match kb.ligand_structure(&top.catalyst_id) {
            Some(ligand_smiles) => {
                info!(catalyst = %top.catalyst_id, "auto-chaining ligand optimization");
                sections.ligand_optimization = Some(design::run(
                    toolkit,
                    &DesignRequest {
                        scaffold: ligand_smiles.to_string(),
                        strategy: Strategy::All,
                    },
                ));
            }
            None => {
                debug!(
                    catalyst = %top.catalyst_id,
                    "no ligand structure registered; skipping auto-chain"
                );
            }
        }
    }

    let (status, error) = if sections.is_empty() {
        (
            ReportStatus::Error,
            Some("request must include a reaction or a scaffold".to_string()),
        )
    } else {
        (ReportStatus::Success, None)
    };

    ChainReport {
        agent: AGENT_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        context: request.context.clone(),
        status,
        recommend_next: recommend_next(&sections),
        report: sections,
        error,
        timestamp: Utc::now().to_rfc3339(),
    }
}

fn recommend_next(sections: &ChainSections) -> Vec<String> {
    let mut hints = BTreeSet::new();
    if sections
        .recommendation
        .as_ref()
        .is_some_and(Recommendation::has_results)
    {
        hints.insert("chemistry-query");
        hints.insert("pharmacology");
    }
    if sections
        .ligand_design
        .as_ref()
        .is_some_and(LigandDesign::has_variants)
    {
        hints.insert("ip-expansion");
        hints.insert("chemistry-query");
    }
    hints.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chem::LexicalToolkit;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::bundled().unwrap()
    }

    fn reaction_request(reaction: &str) -> ChainRequest {
        ChainRequest {
            reaction: Some(reaction.to_string()),
            ..ChainRequest::default()
        }
    }

    #[test]
    fn reaction_only_request_auto_chains_ligand_optimization() {
        let report = run(&kb(), &LexicalToolkit, &reaction_request("suzuki"));
        assert_eq!(report.status, ReportStatus::Success);
        let recommendation = report.report.recommendation.as_ref().unwrap();
        assert!(recommendation.has_results());
        // The top suzuki catalyst registers a ligand structure, so the
        // optimization section must be present and populated.
        let optimization = report.report.ligand_optimization.as_ref().unwrap();
        assert_eq!(optimization.status, ReportStatus::Success);
        assert!(optimization.has_variants());
        assert!(report.report.ligand_design.is_none());
    }

    #[test]
    fn scaffold_only_request_produces_no_recommendation() {
        let report = run(
            &kb(),
            &LexicalToolkit,
            &ChainRequest {
                scaffold: Some("PPh3".to_string()),
                strategy: Strategy::Bioisosteric,
                ..ChainRequest::default()
            },
        );
        assert_eq!(report.status, ReportStatus::Success);
        assert!(report.report.recommendation.is_none());
        assert!(report.report.ligand_optimization.is_none());
        let design = report.report.ligand_design.as_ref().unwrap();
        assert_eq!(design.total_variants, 4);
    }

    #[test]
    fn scaffold_request_suppresses_the_auto_chain() {
        let report = run(
            &kb(),
            &LexicalToolkit,
            &ChainRequest {
                reaction: Some("suzuki".to_string()),
                scaffold: Some("PPh3".to_string()),
                ..ChainRequest::default()
            },
        );
        assert!(report.report.recommendation.is_some());
        assert!(report.report.ligand_design.is_some());
        assert!(report.report.ligand_optimization.is_none());
    }

    #[test]
    fn empty_request_is_an_error_report() {
        let report = run(&kb(), &LexicalToolkit, &ChainRequest::default());
        assert_eq!(report.status, ReportStatus::Error);
        assert!(report.error.is_some());
        assert!(report.report.recommendation.is_none());
        assert!(report.recommend_next.is_empty());
    }

    #[test]
    fn unknown_reaction_still_yields_a_success_report_with_no_matches() {
        let report = run(
            &kb(),
            &LexicalToolkit,
            &reaction_request("zzz_unknown_reaction"),
        );
        // A section was produced, so the chain itself succeeded.
        assert_eq!(report.status, ReportStatus::Success);
        let recommendation = report.report.recommendation.as_ref().unwrap();
        assert_eq!(recommendation.status, ReportStatus::NoMatches);
        assert!(recommendation.suggestion.is_some());
        assert!(report.report.ligand_optimization.is_none());
        assert!(report.recommend_next.is_empty());
    }

    #[test]
    fn recommend_next_hints_are_sorted_and_deduplicated() {
        let report = run(
            &kb(),
            &LexicalToolkit,
            &ChainRequest {
                reaction: Some("suzuki".to_string()),
                scaffold: Some("PPh3".to_string()),
                ..ChainRequest::default()
            },
        );
        assert_eq!(
            report.recommend_next,
            ["chemistry-query", "ip-expansion", "pharmacology"]
        );
    }

    #[test]
    fn request_deserializes_the_external_field_aliases() {
        let request: ChainRequest = serde_json::from_str(
            r#"{"reaction_type": "heck", "smiles": "C=Cc1ccccc1", "context": "retrosynthesis"}"#,
        )
        .unwrap();
        assert_eq!(request.reaction.as_deref(), Some("heck"));
        assert_eq!(request.substrate.as_deref(), Some("C=Cc1ccccc1"));
        assert_eq!(request.context, "retrosynthesis");
        assert_eq!(request.strategy, Strategy::All);

        let request: ChainRequest =
            serde_json::from_str(r#"{"ligand": "PCy3", "strategy": "steric"}"#).unwrap();
        assert_eq!(request.scaffold.as_deref(), Some("PCy3"));
        assert_eq!(request.strategy, Strategy::Steric);
        assert_eq!(request.context, "user");
    }

    #[test]
    fn report_echoes_agent_and_context() {
        let report = run(
            &kb(),
            &LexicalToolkit,
            &ChainRequest {
                reaction: Some("suzuki".to_string()),
                context: "retrosynthesis".to_string(),
                ..ChainRequest::default()
            },
        );
        assert_eq!(report.agent, AGENT_NAME);
        assert_eq!(report.context, "retrosynthesis");
        assert!(!report.timestamp.is_empty());
    }
}
