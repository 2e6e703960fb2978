use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ligand modification strategy selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Steric,
    Electronic,
    Bioisosteric,
    /// Run steric, electronic, and bioisosteric generation, in that order.
    #[default]
    All,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Steric => "steric",
            Strategy::Electronic => "electronic",
            Strategy::Bioisosteric => "bioisosteric",
            Strategy::All => "all",
        }
    }

    pub fn includes(self, other: Strategy) -> bool {
        self == Strategy::All || self == other
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "steric" => Ok(Strategy::Steric),
            "electronic" => Ok(Strategy::Electronic),
            "bioisosteric" => Ok(Strategy::Bioisosteric),
            "all" => Ok(Strategy::All),
            _ => Err(()),
        }
    }
}

/// Computed property set for a ligand structure.
///
/// Values come from the chemistry toolkit and are estimates, not measured
/// quantities; MW and logP are rounded to two decimals for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LigandProperties {
    pub smiles: String,
    #[serde(rename = "MW")]
    pub molecular_weight: f64,
    #[serde(rename = "logP")]
    pub log_p: f64,
    #[serde(rename = "HBA")]
    pub hba: usize,
    #[serde(rename = "HBD")]
    pub hbd: usize,
    pub rotatable_bonds: usize,
    pub aromatic_rings: usize,
    pub heavy_atoms: usize,
    pub has_phosphorus: bool,
    pub has_nitrogen: bool,
    pub num_stereocenters: usize,
}

/// One generated ligand variant or qualitative suggestion.
///
/// Structural strategies (steric, electronic) carry computed `properties`;
/// bioisosteric suggestions carry `rationale` and optional `literature`
/// citations instead, with no toolkit edit performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub modification: String,
    pub description: String,
    pub strategy: Strategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<LigandProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub literature: Vec<String>,
}

/// A resolved ligand scaffold: the caller's original token plus the SMILES
/// it resolved to (identical when the input was already a raw structure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldDescriptor {
    pub input: String,
    pub smiles: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_from_str_accepts_known_names() {
        assert_eq!(Strategy::from_str("steric"), Ok(Strategy::Steric));
        assert_eq!(Strategy::from_str("ELECTRONIC"), Ok(Strategy::Electronic));
        assert_eq!(
            Strategy::from_str("bioisosteric"),
            Ok(Strategy::Bioisosteric)
        );
        assert_eq!(Strategy::from_str("all"), Ok(Strategy::All));
        assert_eq!(Strategy::from_str("quantum"), Err(()));
    }

    #[test]
    fn all_includes_every_concrete_strategy() {
        assert!(Strategy::All.includes(Strategy::Steric));
        assert!(Strategy::All.includes(Strategy::Electronic));
        assert!(Strategy::All.includes(Strategy::Bioisosteric));
        assert!(Strategy::Steric.includes(Strategy::Steric));
        assert!(!Strategy::Steric.includes(Strategy::Electronic));
    }

    #[test]
    fn strategy_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&Strategy::Bioisosteric).unwrap(),
            r#""bioisosteric""#
        );
    }

    #[test]
    fn variant_omits_empty_optional_fields() {
        let variant = Variant {
            modification: "steric_methyl".to_string(),
            description: "Added methyl group to aromatic ring".to_string(),
            strategy: Strategy::Steric,
            properties: None,
            rationale: None,
            literature: Vec::new(),
        };
        let json = serde_json::to_string(&variant).unwrap();
        assert!(!json.contains("properties"));
        assert!(!json.contains("rationale"));
        assert!(!json.contains("literature"));
    }
}
