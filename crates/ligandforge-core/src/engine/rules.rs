//! Static domain rule tables feeding the scoring and generation algorithms.
//!
//! These are data, not logic: the algorithms in `scoring` and `variants`
//! consume them but do not embed them, so the tables can evolve without
//! touching the decision code.

use phf::{Map, Set, phf_map, phf_set};

/// Metals awarded the earth-abundance bonus.
pub static EARTH_ABUNDANT_METALS: Set<&'static str> = phf_set! {
    "Ni", "Cu", "Fe", "Zr",
};

/// Reaction types that are intrinsically enantioselective.
pub static ENANTIOSELECTIVE_REACTIONS: Set<&'static str> = phf_set! {
    "asymmetric_hydrogenation", "asymmetric_isomerization",
};

/// Token marking a chiral ligand family in a ligand name.
pub const CHIRAL_LIGAND_MARKER: &str = "BINAP";

/// Token marking a chiral catalyst in a (case-folded) catalyst name.
pub const CHIRAL_NAME_MARKER: &str = "chiral";

/// Synonyms for common reaction-descriptor shorthand, expanded to canonical
/// vocabulary keys during normalization.
pub static REACTION_ALIASES: Map<&'static str, &'static [&'static str]> = phf_map! {
    "c_n" => &["buchwald_hartwig", "c_n_coupling"],
    "amination" => &["buchwald_hartwig", "c_n_coupling"],
    "coupling" => &["suzuki", "heck", "sonogashira", "negishi", "kumada", "stille"],
    "cross_coupling" => &["suzuki", "heck", "sonogashira", "negishi", "kumada", "stille"],
    "metathesis" => &["olefin_metathesis", "ring_closing_metathesis", "cross_metathesis"],
    "rcm" => &["ring_closing_metathesis"],
    "click" => &["click_cuaac", "azide_alkyne_cycloaddition"],
    "hydrogenation" => &["hydrogenation", "asymmetric_hydrogenation", "directed_hydrogenation"],
};

/// A substituent fragment applied by a structural modification strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstituentRule {
    /// Short substituent name used in the variant's modification label.
    pub name: &'static str,
    /// Fragment SMILES attached via a single bond.
    pub fragment: &'static str,
    /// One-line description of the intended effect.
    pub effect: &'static str,
}

/// Steric tuning substituents, in application order.
pub static STERIC_SUBSTITUENTS: &[SubstituentRule] = &[
    SubstituentRule {
        name: "methyl",
        fragment: "C",
        effect: "Added methyl group to aromatic ring",
    },
    SubstituentRule {
        name: "isopropyl",
        fragment: "C(C)C",
        effect: "Added isopropyl group to aromatic ring",
    },
    SubstituentRule {
        name: "tert-butyl",
        fragment: "C(C)(C)C",
        effect: "Added tert-butyl group to aromatic ring",
    },
];

/// Electronic tuning substituents, in application order.
pub static ELECTRONIC_SUBSTITUENTS: &[SubstituentRule] = &[
    SubstituentRule {
        name: "para-OMe (e-donating)",
        fragment: "OC",
        effect: "Added para-OMe (e-donating) to tune electronics",
    },
    SubstituentRule {
        name: "para-F (mild e-withdrawing)",
        fragment: "F",
        effect: "Added para-F (mild e-withdrawing) to tune electronics",
    },
    SubstituentRule {
        name: "para-CF3 (e-withdrawing)",
        fragment: "C(F)(F)F",
        effect: "Added para-CF3 (e-withdrawing) to tune electronics",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_abundant_set_matches_the_scoring_contract() {
        for metal in ["Ni", "Cu", "Fe", "Zr"] {
            assert!(EARTH_ABUNDANT_METALS.contains(metal));
        }
        assert!(!EARTH_ABUNDANT_METALS.contains("Pd"));
        assert!(!EARTH_ABUNDANT_METALS.contains("Rh"));
    }

    #[test]
    fn rcm_alias_expands_to_ring_closing_metathesis() {
        assert_eq!(
            REACTION_ALIASES.get("rcm").copied(),
            Some(&["ring_closing_metathesis"][..])
        );
    }

    #[test]
    fn substituent_lists_keep_their_application_order() {
        let steric: Vec<&str> = STERIC_SUBSTITUENTS.iter().map(|s| s.name).collect();
        assert_eq!(steric, ["methyl", "isopropyl", "tert-butyl"]);

        let electronic: Vec<&str> = ELECTRONIC_SUBSTITUENTS.iter().map(|s| s.name).collect();
        assert_eq!(
            electronic,
            [
                "para-OMe (e-donating)",
                "para-F (mild e-withdrawing)",
                "para-CF3 (e-withdrawing)"
            ]
        );
    }
}
