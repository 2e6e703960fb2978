//! Ligand design workflow.

use crate::core::chem::{ChemToolkit, aliases};
use crate::core::models::report::ReportStatus;
use crate::core::models::variant::{LigandProperties, Strategy, Variant};
use crate::engine::variants::{SkippedEdit, VariantGenerator};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignRequest {
    /// Ligand alias name (e.g. "PPh3") or a raw structure descriptor.
    pub scaffold: String,
    #[serde(default)]
    pub strategy: Strategy,
}

/// The resolved scaffold with its computed base properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldReport {
    pub input: String,
    pub smiles: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<LigandProperties>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LigandDesign {
    pub scaffold: ScaffoldReport,
    pub strategy: Strategy,
    pub variants: Vec<Variant>,
    pub total_variants: usize,
    /// Structural edit attempts that were skipped, kept for observability.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedEdit>,
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LigandDesign {
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

/// Resolves the scaffold, computes base properties, and generates variants
/// under the requested strategy.
///
/// A scaffold the toolkit cannot parse is fatal for this sub-operation only:
/// the report carries `status = error` with a message and no variants.
/// Individual substitution failures are recoverable and merely skipped.
#[instrument(skip_all, name = "design_workflow", fields(scaffold = %request.scaffold))]
pub fn run<T: ChemToolkit>(toolkit: &T, request: &DesignRequest) -> LigandDesign {
    let scaffold = aliases::resolve_scaffold(&request.scaffold);

    let molecule = match toolkit.parse(&scaffold.smiles) {
        Ok(molecule) => molecule,
        Err(e) => {
            warn!(error = %e, "scaffold failed to parse");
            return LigandDesign {
                scaffold: ScaffoldReport {
                    input: scaffold.input,
                    smiles: scaffold.smiles.clone(),
                    properties: None,
                },
                strategy: request.strategy,
                variants: Vec::new(),
                total_variants: 0,
                skipped: Vec::new(),
                status: ReportStatus::Error,
                error: Some(format!("Could not parse scaffold SMILES: {}", scaffold.smiles)),
            };
        }
    };

    let generator = VariantGenerator::new(toolkit);
    let properties = generator.properties(&molecule);
    let generated = generator.generate(&molecule, request.strategy);
    info!(
        variants = generated.variants.len(),
        skipped = generated.skipped.len(),
        "generated ligand variants"
    );

    LigandDesign {
        scaffold: ScaffoldReport {
            input: scaffold.input,
            smiles: scaffold.smiles,
            properties: Some(properties),
        },
        strategy: request.strategy,
        total_variants: generated.variants.len(),
        variants: generated.variants,
        skipped: generated.skipped,
        status: ReportStatus::Success,
        error: None,
    }
}
