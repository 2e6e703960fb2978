use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ToolkitError {
    #[error("Could not parse structure '{input}': {reason}")]
    Parse { input: String, reason: String },
    #[error("Structural edit failed: {reason}")]
    Edit { reason: String },
}

/// Stable reference to an atom inside a toolkit molecule handle, in the
/// toolkit's deterministic atom ordering (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AtomRef(pub usize);

/// Atom predicates the variant generator needs from the toolkit.
///
/// The first/last element of the matching sequence stands in for a real
/// substitution-site prediction; this is a stated approximation of
/// regiochemistry, not a correctness guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomQuery {
    /// Aromatic carbon carrying at least one hydrogen.
    AromaticCarbonWithHydrogen,
    /// Aromatic carbon with no neighbor of the given element symbol.
    AromaticCarbonNotBondedTo(&'static str),
}

/// Raw descriptor set computed by the toolkit for one molecule.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MolecularDescriptors {
    pub molecular_weight: f64,
    pub log_p: f64,
    pub hba: usize,
    pub hbd: usize,
    pub rotatable_bonds: usize,
    pub aromatic_rings: usize,
    pub heavy_atoms: usize,
    pub stereocenters: usize,
}

/// Capability contract of the chemistry toolkit collaborator.
///
/// The engine consumes structures only through this seam; it never inspects
/// molecule internals. Implementations must keep `find_atoms` ordering
/// deterministic (same molecule, same query, same sequence), since site
/// selection for structural edits depends on it.
pub trait ChemToolkit {
    type Molecule;

    /// Parses a structure descriptor (SMILES) into a molecule handle.
    fn parse(&self, structure: &str) -> Result<Self::Molecule, ToolkitError>;

    /// Returns the canonical-form structure string for a handle.
    fn smiles(&self, molecule: &Self::Molecule) -> String;

    /// Computes the descriptor set for a molecule.
    fn descriptors(&self, molecule: &Self::Molecule) -> MolecularDescriptors;

    /// Whether the molecule contains at least one atom of the element.
    fn has_element(&self, molecule: &Self::Molecule, symbol: &str) -> bool;

    /// All atoms matching the query, in the toolkit's atom ordering.
    fn find_atoms(&self, molecule: &Self::Molecule, query: &AtomQuery) -> Vec<AtomRef>;

    /// Attaches a fragment (given as a structure descriptor) via a single
    /// bond at the referenced atom, returning the edited molecule.
    fn attach_fragment(
        &self,
        molecule: &Self::Molecule,
        fragment: &str,
        at: AtomRef,
    ) -> Result<Self::Molecule, ToolkitError>;
}
