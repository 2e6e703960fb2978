//! Multi-factor deterministic catalyst scoring.

use super::rules::{
    CHIRAL_LIGAND_MARKER, CHIRAL_NAME_MARKER, EARTH_ABUNDANT_METALS, ENANTIOSELECTIVE_REACTIONS,
};
use crate::core::kb::KnowledgeBase;
use crate::core::models::catalyst::{CatalystRecord, CostTier};
use crate::core::models::constraints::Constraints;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One ranked catalyst with its score and the display fields the report
/// carries through from the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub catalyst_id: String,
    pub name: String,
    pub abbreviation: String,
    pub metal: String,
    pub ligand: String,
    /// Match-quality score in (0, 100], rounded to one decimal.
    pub score: f64,
    /// Requested reaction types this catalyst covers, sorted.
    pub matched_reactions: Vec<String>,
    pub conditions: String,
    pub loading_mol_pct: [f64; 2],
    pub advantages: Vec<String>,
    pub limitations: Vec<String>,
    pub cost: CostTier,
    pub references: Vec<String>,
}

/// Scores one catalyst against the requested reaction types and constraints.
///
/// Sub-scores are additive and independently capped: reaction coverage 0-50,
/// cost proximity 0-15, metal preference 0-10, earth-abundance 0-5,
/// enantioselectivity 0-10, advantages 0-5, low loading 0-5. An empty
/// reaction intersection short-circuits to 0 (the catalyst is excluded).
pub fn score_catalyst(
    catalyst: &CatalystRecord,
    requested: &BTreeSet<String>,
    constraints: &Constraints,
    enantioselective: bool,
) -> f64 {
    let matched = matched_reactions(catalyst, requested);
    if matched.is_empty() {
        return 0.0;
    }
    let mut score = 50.0 * matched.len() as f64 / requested.len() as f64;

    let max_cost = constraints.max_cost.unwrap_or(CostTier::VeryHigh);
    if catalyst.cost_relative <= max_cost {
        score += catalyst.cost_relative.points();
    }

    if let Some(metal) = &constraints.prefer_metal
        && metal.eq_ignore_ascii_case(&catalyst.metal)
    {
        score += 10.0;
    }

    if constraints.prefer_earth_abundant.unwrap_or(false)
        && EARTH_ABUNDANT_METALS.contains(catalyst.metal.as_str())
    {
        score += 5.0;
    }

    if enantioselective {
        let intrinsically_enantioselective = catalyst
            .reaction_types
            .iter()
            .any(|t| ENANTIOSELECTIVE_REACTIONS.contains(t.as_str()));
        if intrinsically_enantioselective {
            score += 10.0;
        } else if catalyst.ligand.contains(CHIRAL_LIGAND_MARKER)
            || catalyst.name.to_lowercase().contains(CHIRAL_NAME_MARKER)
        {
            score += 5.0;
        }
    }

    score += (catalyst.advantages.len() as f64).min(5.0);

    let min_loading = catalyst.typical_loading_mol_pct[0];
    if min_loading <= 1.0 {
        score += 5.0;
    } else if min_loading <= 2.0 {
        score += 3.0;
    }

    score.min(100.0)
}

fn matched_reactions(catalyst: &CatalystRecord, requested: &BTreeSet<String>) -> BTreeSet<String> {
    catalyst
        .reaction_types
        .iter()
        .filter(|t| requested.contains(*t))
        .cloned()
        .collect()
}

/// Scores every catalyst in the repository and returns the ranked results.
///
/// Zero scores are discarded. Ranking is a stable descending sort by score,
/// so ties keep the repository's native (first-seen) order; identical
/// requests therefore always produce identical rankings.
pub fn rank(
    kb: &KnowledgeBase,
    requested: &BTreeSet<String>,
    constraints: &Constraints,
    enantioselective: bool,
) -> Vec<ScoredResult> {
    let mut results: Vec<ScoredResult> = kb
        .catalysts()
        .iter()
        .filter_map(|catalyst| {
            let score = score_catalyst(catalyst, requested, constraints, enantioselective);
            if score <= 0.0 {
                return None;
            }
            Some(ScoredResult {
                catalyst_id: catalyst.id.clone(),
                name: catalyst.name.clone(),
                abbreviation: catalyst.abbreviation.clone(),
                metal: catalyst.metal.clone(),
                ligand: catalyst.ligand.clone(),
                score: (score * 10.0).round() / 10.0,
                matched_reactions: matched_reactions(catalyst, requested)
                    .into_iter()
                    .collect(),
                conditions: catalyst.conditions.clone(),
                loading_mol_pct: catalyst.typical_loading_mol_pct,
                advantages: catalyst.advantages.clone(),
                limitations: catalyst.limitations.clone(),
                cost: catalyst.cost_relative,
                references: catalyst.references.clone(),
            })
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, metal: &str, reactions: &[&str]) -> CatalystRecord {
        CatalystRecord {
            id: id.to_string(),
            name: format!("Test catalyst {}", id),
            abbreviation: id.to_uppercase(),
            metal: metal.to_string(),
            ligand: "Triphenylphosphine (PPh3)".to_string(),
            ligand_smiles: None,
            reaction_types: reactions.iter().map(|r| r.to_string()).collect(),
            conditions: "RT".to_string(),
            typical_loading_mol_pct: [5.0, 10.0],
            advantages: Vec::new(),
            limitations: Vec::new(),
            cost_relative: CostTier::Medium,
            references: Vec::new(),
        }
    }

    fn requested(types: &[&str]) -> BTreeSet<String> {
        types.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn no_reaction_overlap_scores_zero() {
        let catalyst = record("pd_a", "Pd", &["suzuki"]);
        let score = score_catalyst(
            &catalyst,
            &requested(&["heck"]),
            &Constraints::default(),
            false,
        );
        assert_eq!(score, 0.0);
    }

    #[test]
    fn full_coverage_earns_fifty_points() {
        let catalyst = record("pd_a", "Pd", &["suzuki", "heck"]);
        let score = score_catalyst(
            &catalyst,
            &requested(&["suzuki", "heck"]),
            &Constraints::default(),
            false,
        );
        // 50 coverage + 9 medium-cost points.
        assert_eq!(score, 59.0);
    }

    #[test]
    fn partial_coverage_scales_linearly() {
        let catalyst = record("pd_a", "Pd", &["suzuki"]);
        let score = score_catalyst(
            &catalyst,
            &requested(&["suzuki", "heck"]),
            &Constraints::default(),
            false,
        );
        assert_eq!(score, 25.0 + 9.0);
    }

    #[test]
    fn cost_gate_blocks_tiers_above_the_constraint() {
        let mut catalyst = record("rh_a", "Rh", &["hydrogenation"]);
        catalyst.cost_relative = CostTier::VeryHigh;
        let constraints = Constraints {
            max_cost: Some(CostTier::Medium),
            ..Constraints::default()
        };
        let score = score_catalyst(&catalyst, &requested(&["hydrogenation"]), &constraints, false);
        // Coverage only; the tier points are withheld.
        assert_eq!(score, 50.0);
    }

    #[test]
    fn cheaper_or_equal_tier_passes_the_gate() {
        let mut catalyst = record("ni_a", "Ni", &["kumada"]);
        catalyst.cost_relative = CostTier::Low;
        let constraints = Constraints {
            max_cost: Some(CostTier::Low),
            ..Constraints::default()
        };
        let score = score_catalyst(&catalyst, &requested(&["kumada"]), &constraints, false);
        assert_eq!(score, 50.0 + 12.0);
    }

    #[test]
    fn metal_preference_matches_case_insensitively() {
        let catalyst = record("pd_a", "Pd", &["suzuki"]);
        let constraints = Constraints {
            prefer_metal: Some("pd".to_string()),
            ..Constraints::default()
        };
        let score = score_catalyst(&catalyst, &requested(&["suzuki"]), &constraints, false);
        assert_eq!(score, 50.0 + 9.0 + 10.0);
    }

    #[test]
    fn earth_abundant_bonus_applies_to_listed_metals_only() {
        let constraints = Constraints {
            prefer_earth_abundant: Some(true),
            ..Constraints::default()
        };
        let nickel = record("ni_a", "Ni", &["kumada"]);
        assert_eq!(
            score_catalyst(&nickel, &requested(&["kumada"]), &constraints, false),
            50.0 + 9.0 + 5.0
        );
        let palladium = record("pd_a", "Pd", &["kumada"]);
        assert_eq!(
            score_catalyst(&palladium, &requested(&["kumada"]), &constraints, false),
            50.0 + 9.0
        );
    }

    #[test]
    fn enantioselective_reaction_types_earn_the_full_bonus() {
        let catalyst = record("rh_a", "Rh", &["asymmetric_hydrogenation"]);
        let score = score_catalyst(
            &catalyst,
            &requested(&["asymmetric_hydrogenation"]),
            &Constraints::default(),
            true,
        );
        assert_eq!(score, 50.0 + 9.0 + 10.0);
    }

    #[test]
    fn chiral_ligand_marker_earns_the_reduced_bonus() {
        let mut catalyst = record("ru_a", "Ru", &["hydrogenation"]);
        catalyst.ligand = "(S)-BINAP".to_string();
        let score = score_catalyst(
            &catalyst,
            &requested(&["hydrogenation"]),
            &Constraints::default(),
            true,
        );
        assert_eq!(score, 50.0 + 9.0 + 5.0);
    }

    #[test]
    fn advantages_bonus_caps_at_five() {
        let mut catalyst = record("pd_a", "Pd", &["suzuki"]);
        catalyst.advantages = (0..8).map(|i| format!("advantage {}", i)).collect();
        let score = score_catalyst(
            &catalyst,
            &requested(&["suzuki"]),
            &Constraints::default(),
            false,
        );
        assert_eq!(score, 50.0 + 9.0 + 5.0);
    }

    #[test]
    fn low_loading_bonus_has_two_brackets() {
        let mut catalyst = record("pd_a", "Pd", &["suzuki"]);
        catalyst.typical_loading_mol_pct = [0.5, 2.0];
        assert_eq!(
            score_catalyst(&catalyst, &requested(&["suzuki"]), &Constraints::default(), false),
            50.0 + 9.0 + 5.0
        );
        catalyst.typical_loading_mol_pct = [2.0, 5.0];
        assert_eq!(
            score_catalyst(&catalyst, &requested(&["suzuki"]), &Constraints::default(), false),
            50.0 + 9.0 + 3.0
        );
        catalyst.typical_loading_mol_pct = [5.0, 10.0];
        assert_eq!(
            score_catalyst(&catalyst, &requested(&["suzuki"]), &Constraints::default(), false),
            50.0 + 9.0
        );
    }

    #[test]
    fn score_never_exceeds_one_hundred() {
        let mut catalyst = record("ni_a", "Ni", &["asymmetric_hydrogenation"]);
        catalyst.cost_relative = CostTier::VeryLow;
        catalyst.advantages = (0..6).map(|i| format!("advantage {}", i)).collect();
        catalyst.typical_loading_mol_pct = [0.1, 1.0];
        catalyst.ligand = "(R)-BINAP".to_string();
        let constraints = Constraints {
            prefer_metal: Some("Ni".to_string()),
            prefer_earth_abundant: Some(true),
            ..Constraints::default()
        };
        let score = score_catalyst(
            &catalyst,
            &requested(&["asymmetric_hydrogenation"]),
            &constraints,
            true,
        );
        assert_eq!(score, 100.0);
    }
}
