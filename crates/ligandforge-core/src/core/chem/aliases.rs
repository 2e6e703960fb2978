use crate::core::models::variant::ScaffoldDescriptor;
use phf::{Map, phf_map};

/// Common ligand names mapped to their SMILES shortcuts. Inputs not found
/// here are treated literally as structure descriptors.
static LIGAND_ALIASES: Map<&'static str, &'static str> = phf_map! {
    "PPh3" => "c1ccc(cc1)P(c1ccccc1)c1ccccc1",
    "triphenylphosphine" => "c1ccc(cc1)P(c1ccccc1)c1ccccc1",
    "PCy3" => "C1(CCCCC1)P(C1CCCCC1)C1CCCCC1",
    "tricyclohexylphosphine" => "C1(CCCCC1)P(C1CCCCC1)C1CCCCC1",
    "dppe" => "c1ccc(cc1)P(CCP(c1ccccc1)c1ccccc1)c1ccccc1",
    "dppp" => "c1ccc(cc1)P(CCCP(c1ccccc1)c1ccccc1)c1ccccc1",
    "NHC_IMes" => "Cc1cc(C)cc(c1)N1C=CN(c2cc(C)cc(C)c2)C1",
    "NHC_IPr" => "CC(C)c1cccc(C(C)C)c1N1C=CN(c2c(C(C)C)cccc2C(C)C)C1",
};

/// Resolves a scaffold token to a structure descriptor.
pub fn resolve_scaffold(input: &str) -> ScaffoldDescriptor {
    let smiles = LIGAND_ALIASES.get(input).copied().unwrap_or(input);
    ScaffoldDescriptor {
        input: input.to_string(),
        smiles: smiles.to_string(),
    }
}

/// All registered alias names, for diagnostics and tests.
pub fn known_aliases() -> impl Iterator<Item = &'static str> {
    LIGAND_ALIASES.keys().copied()
}
