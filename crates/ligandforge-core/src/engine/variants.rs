//! Rule-driven generation of ligand scaffold variants.

use super::rules::{ELECTRONIC_SUBSTITUENTS, STERIC_SUBSTITUENTS, SubstituentRule};
use crate::core::chem::{AtomQuery, AtomRef, ChemToolkit, ToolkitError};
use crate::core::models::variant::{LigandProperties, Strategy, Variant};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A structural edit attempt that was skipped. Recoverable by design: the
/// remaining candidates are still attempted, and the reasons are kept for
/// observability rather than surfaced as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedEdit {
    pub modification: String,
    pub reason: String,
}

/// Variants plus the edit attempts that did not produce one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedVariants {
    pub variants: Vec<Variant>,
    pub skipped: Vec<SkippedEdit>,
}

/// Applies steric, electronic, and bioisosteric modification strategies to a
/// parsed ligand scaffold through the chemistry toolkit seam.
pub struct VariantGenerator<'a, T: ChemToolkit> {
    toolkit: &'a T,
}

impl<'a, T: ChemToolkit> VariantGenerator<'a, T> {
    pub fn new(toolkit: &'a T) -> Self {
        Self { toolkit }
    }

    /// Runs the requested strategy (or all three, in steric, electronic,
    /// bioisosteric order) against the scaffold.
    pub fn generate(&self, scaffold: &T::Molecule, strategy: Strategy) -> GeneratedVariants {
        let mut out = GeneratedVariants::default();
        if strategy.includes(Strategy::Steric) {
            self.steric(scaffold, &mut out);
        }
        if strategy.includes(Strategy::Electronic) {
            self.electronic(scaffold, &mut out);
        }
        if strategy.includes(Strategy::Bioisosteric) {
            out.variants.extend(self.bioisosteric(scaffold));
        }
        out
    }

    /// Computes the reported property set for a molecule handle.
    pub fn properties(&self, molecule: &T::Molecule) -> LigandProperties {
        let d = self.toolkit.descriptors(molecule);
        LigandProperties {
            smiles: self.toolkit.smiles(molecule),
            molecular_weight: round2(d.molecular_weight),
            log_p: round2(d.log_p),
            hba: d.hba,
            hbd: d.hbd,
            rotatable_bonds: d.rotatable_bonds,
            aromatic_rings: d.aromatic_rings,
            heavy_atoms: d.heavy_atoms,
            has_phosphorus: self.toolkit.has_element(molecule, "P"),
            has_nitrogen: self.toolkit.has_element(molecule, "N"),
            num_stereocenters: d.stereocenters,
        }
    }

    /// Steric tuning: attach each bulk substituent at the first aromatic
    /// carbon still carrying a hydrogen.
    fn steric(&self, scaffold: &T::Molecule, out: &mut GeneratedVariants) {
        let site = self
            .toolkit
            .find_atoms(scaffold, &AtomQuery::AromaticCarbonWithHydrogen)
            .into_iter()
            .next();
        for rule in STERIC_SUBSTITUENTS {
            let modification = format!("steric_{}", rule.name);
            match site {
                Some(site) => {
                    match self.substituted(scaffold, rule, site, &modification, Strategy::Steric) {
                        Ok(variant) => out.variants.push(variant),
                        Err(e) => out.skip(modification, e),
                    }
                }
                None => out.skip(modification, no_site("aromatic C-H")),
            }
        }
    }

    /// Electronic tuning: attach each substituent at the last aromatic
    /// carbon not bonded to phosphorus. The "last matching atom" rule is a
    /// deterministic stand-in for a para position, not real regiochemistry.
    fn electronic(&self, scaffold: &T::Molecule, out: &mut GeneratedVariants) {
        let site = self
            .toolkit
            .find_atoms(scaffold, &AtomQuery::AromaticCarbonNotBondedTo("P"))
            .into_iter()
            .next_back();
        for rule in ELECTRONIC_SUBSTITUENTS {
            let modification = rule.name.to_string();
            match site {
                Some(site) => {
                    match self.substituted(scaffold, rule, site, &modification, Strategy::Electronic)
                    {
                        Ok(variant) => out.variants.push(variant),
                        Err(e) => out.skip(modification, e),
                    }
                }
                None => out.skip(modification, no_site("aromatic carbon away from P")),
            }
        }
    }

    fn substituted(
        &self,
        scaffold: &T::Molecule,
        rule: &SubstituentRule,
        site: AtomRef,
        modification: &str,
        strategy: Strategy,
    ) -> Result<Variant, ToolkitError> {
        let edited = self.toolkit.attach_fragment(scaffold, rule.fragment, site)?;
        Ok(Variant {
            modification: modification.to_string(),
            description: rule.effect.to_string(),
            strategy,
            properties: Some(self.properties(&edited)),
            rationale: None,
            literature: Vec::new(),
        })
    }

    /// Qualitative replacement suggestions gated purely on feature presence
    /// in the base structure; no toolkit edit is attempted.
    fn bioisosteric(&self, scaffold: &T::Molecule) -> Vec<Variant> {
        let mut suggestions = Vec::new();

        if self.toolkit.has_element(scaffold, "P") {
            suggestions.push(Variant {
                modification: "P->NHC replacement".to_string(),
                description: "Replace phosphine with an N-heterocyclic carbene (NHC). \
                              NHCs are stronger sigma-donors with no pi-acceptor character, \
                              often giving more active and stable catalysts. Well-proven in \
                              Pd, Ru, and Au catalysis."
                    .to_string(),
                strategy: Strategy::Bioisosteric,
                properties: None,
                rationale: Some(
                    "NHC ligands form stronger M-C bonds than M-P, resist oxidation, and \
                     provide a tunable steric environment via the N-substituents."
                        .to_string(),
                ),
                literature: vec!["Chem. Rev. 2009, 109, 3612 (Diez-Gonzalez et al.)".to_string()],
            });
            suggestions.push(Variant {
                modification: "Phosphine -> phosphite (P(OR)3)".to_string(),
                description: "Replace PR3 with P(OR)3. Phosphites are stronger pi-acceptors, \
                              making the metal more electrophilic. Useful when oxidative \
                              addition is easy but reductive elimination is slow."
                    .to_string(),
                strategy: Strategy::Bioisosteric,
                properties: None,
                rationale: Some(
                    "Lower sigma-donation and higher pi-acceptance shift the electronic \
                     balance toward electron-rich substrates."
                        .to_string(),
                ),
                literature: Vec::new(),
            });
        }

        if self.toolkit.descriptors(scaffold).aromatic_rings > 0 {
            suggestions.push(Variant {
                modification: "Phenyl -> 2-pyridyl (hemilabile)".to_string(),
                description: "Replace one phenyl ring with 2-pyridyl to create a hemilabile \
                              coordination site. The pyridyl nitrogen can coordinate and \
                              dissociate dynamically, opening a binding site for the substrate."
                    .to_string(),
                strategy: Strategy::Bioisosteric,
                properties: None,
                rationale: Some(
                    "Hemilabile ligands improve catalyst longevity and substrate turnover \
                     in challenging reactions."
                        .to_string(),
                ),
                literature: Vec::new(),
            });
            suggestions.push(Variant {
                modification: "Phenyl -> mesityl (steric + electronic)".to_string(),
                description: "Replace phenyl with 2,4,6-trimethylphenyl (mesityl). Adds steric \
                              protection around the metal center while keeping the aromatic \
                              framework."
                    .to_string(),
                strategy: Strategy::Bioisosteric,
                properties: None,
                rationale: Some(
                    "Mesityl groups suppress catalyst dimerization pathways and donate \
                     moderate electron density."
                        .to_string(),
                ),
                literature: Vec::new(),
            });
        }

        suggestions
    }
}

impl GeneratedVariants {
    fn skip(&mut self, modification: String, error: ToolkitError) {
        debug!(%modification, %error, "skipping failed substitution candidate");
        self.skipped.push(SkippedEdit {
            modification,
            reason: error.to_string(),
        });
    }
}

fn no_site(kind: &str) -> ToolkitError {
    ToolkitError::Edit {
        reason: format!("no {} site available", kind),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
