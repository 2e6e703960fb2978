use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relative cost tier of a catalyst system.
///
/// The tiers form a fixed total order (`VeryLow < ... < VeryHigh`) that the
/// scoring engine relies on both for the cost-proximity gate and for the
/// per-tier point value, so the variant order here is load-bearing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum CostTier {
    VeryLow,
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl CostTier {
    /// Point value awarded by the scoring engine when a catalyst's tier
    /// passes the `max_cost` gate. Cheaper tiers earn more points.
    pub fn points(self) -> f64 {
        match self {
            CostTier::VeryLow => 15.0,
            CostTier::Low => 12.0,
            CostTier::Medium => 9.0,
            CostTier::High => 5.0,
            CostTier::VeryHigh => 2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CostTier::VeryLow => "very_low",
            CostTier::Low => "low",
            CostTier::Medium => "medium",
            CostTier::High => "high",
            CostTier::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostTier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "very_low" | "very-low" => Ok(CostTier::VeryLow),
            "low" => Ok(CostTier::Low),
            "medium" => Ok(CostTier::Medium),
            "high" => Ok(CostTier::High),
            "very_high" | "very-high" => Ok(CostTier::VeryHigh),
            _ => Err(()),
        }
    }
}

/// A curated catalyst entry from the knowledge-base artifact.
///
/// Records are immutable after load; `reaction_types` is validated against
/// the closed reaction vocabulary when the repository is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalystRecord {
    /// Unique identifier within the repository (e.g. "pd_pph3_4").
    pub id: String,
    /// Full systematic or common name.
    pub name: String,
    /// Short form used in reports (e.g. "Pd(PPh3)4").
    pub abbreviation: String,
    /// Element symbol of the catalytic metal center.
    pub metal: String,
    /// Human-readable ligand name.
    pub ligand: String,
    /// SMILES of the ligand scaffold, when one is registered. Drives the
    /// auto-chained ligand optimization in the chain workflow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ligand_smiles: Option<String>,
    /// Canonical reaction keys this catalyst is known to serve.
    pub reaction_types: Vec<String>,
    /// Typical operating conditions, free text.
    pub conditions: String,
    /// Typical catalyst loading range in mol%, as `[min, max]`.
    pub typical_loading_mol_pct: [f64; 2],
    pub advantages: Vec<String>,
    pub limitations: Vec<String>,
    pub cost_relative: CostTier,
    pub references: Vec<String>,
}
