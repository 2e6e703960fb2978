//! Bundled lexical chemistry toolkit.
//!
//! A deliberately lightweight SMILES reader backing the [`ChemToolkit`]
//! contract: it builds an atom/bond graph from the organic subset plus
//! bracket atoms, branches, and ring closures, and computes an estimated
//! descriptor set (valence-model implicit hydrogens, additive logP,
//! bridge-detection ring perception). Structural edits are performed by
//! branch insertion into the source string followed by a re-parse.
//!
//! It performs no canonical reordering and guarantees no chemical validity
//! beyond parseability; real structure validation is out of scope for this
//! toolkit.

use super::ids::AtomId;
use super::toolkit::{AtomQuery, AtomRef, ChemToolkit, MolecularDescriptors, ToolkitError};
use phf::{Map, phf_map};
use slotmap::SlotMap;
use std::collections::HashMap;

static ATOMIC_WEIGHTS: Map<&'static str, f64> = phf_map! {
    "H" => 1.008, "B" => 10.811, "C" => 12.011, "N" => 14.007, "O" => 15.999,
    "F" => 18.998, "Si" => 28.086, "P" => 30.974, "S" => 32.06, "Cl" => 35.45,
    "Fe" => 55.845, "Ni" => 58.693, "Cu" => 63.546, "Zn" => 65.38,
    "As" => 74.922, "Se" => 78.971, "Br" => 79.904, "I" => 126.904,
};

fn default_valence(symbol: &str) -> Option<f64> {
    match symbol {
        "B" => Some(3.0),
        "C" | "Si" => Some(4.0),
        "N" | "P" | "As" => Some(3.0),
        "O" | "S" | "Se" => Some(2.0),
        "F" | "Cl" | "Br" | "I" | "H" => Some(1.0),
        _ => None,
    }
}

// Crude additive atomic contributions, loosely Crippen-shaped. Good enough
// for ranking ligand variants against each other, not for publication.
fn log_p_contribution(symbol: &str, aromatic: bool) -> f64 {
    match symbol {
        "C" if aromatic => 0.29,
        "C" => 0.20,
        "N" => -0.60,
        "O" => -0.45,
        "P" => -0.30,
        "S" => 0.25,
        "F" => 0.14,
        "Cl" => 0.65,
        "Br" => 0.86,
        "I" => 1.12,
        "H" => 0.11,
        _ => 0.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BondKind {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondKind {
    fn order(self) -> f64 {
        match self {
            BondKind::Single => 1.0,
            BondKind::Double => 2.0,
            BondKind::Triple => 3.0,
            BondKind::Aromatic => 1.5,
        }
    }
}

#[derive(Debug, Clone)]
struct LexAtom {
    /// Canonical element symbol ("C", "Cl", ...), regardless of aromatic case.
    symbol: String,
    aromatic: bool,
    chiral: bool,
    /// Hydrogen count written explicitly inside a bracket atom.
    explicit_h: Option<usize>,
    bracket: bool,
    /// Byte offset in the source string where a branch may be inserted
    /// (after the atom token and any ring-closure digits that follow it).
    insert_after: usize,
    neighbors: Vec<(AtomId, BondKind)>,
    /// Filled in after parsing from the valence model.
    implicit_h: usize,
}

#[derive(Debug, Clone, Copy)]
struct Bond {
    a: AtomId,
    b: AtomId,
    kind: BondKind,
}

/// Parsed molecule handle of the lexical toolkit.
#[derive(Debug, Clone)]
pub struct Molecule {
    smiles: String,
    atoms: SlotMap<AtomId, LexAtom>,
    /// Atom ids in parse order; this is the toolkit's deterministic ordering.
    order: Vec<AtomId>,
    bonds: Vec<Bond>,
}

impl Molecule {
    pub fn atom_count(&self) -> usize {
        self.order.len()
    }

    fn atom(&self, r: AtomRef) -> Option<(AtomId, &LexAtom)> {
        let id = *self.order.get(r.0)?;
        Some((id, &self.atoms[id]))
    }

    fn hydrogen_count(&self, atom: &LexAtom) -> usize {
        let explicit_neighbors = atom
            .neighbors
            .iter()
            .filter(|(id, _)| self.atoms[*id].symbol == "H")
            .count();
        atom.implicit_h + explicit_neighbors
    }
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    atoms: SlotMap<AtomId, LexAtom>,
    order: Vec<AtomId>,
    bonds: Vec<Bond>,
    prev: Option<AtomId>,
    stack: Vec<Option<AtomId>>,
    pending_bond: Option<BondKind>,
    open_rings: HashMap<u32, (AtomId, Option<BondKind>)>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            atoms: SlotMap::with_key(),
            order: Vec::new(),
            bonds: Vec::new(),
            prev: None,
            stack: Vec::new(),
            pending_bond: None,
            open_rings: HashMap::new(),
        }
    }

    fn fail(&self, reason: impl Into<String>) -> ToolkitError {
        ToolkitError::Parse {
            input: self.input.to_string(),
            reason: reason.into(),
        }
    }

    fn parse(mut self) -> Result<Molecule, ToolkitError> {
        while self.pos < self.bytes.len() {
            let c = self.bytes[self.pos] as char;
            match c {
                'b' | 'c' | 'n' | 'o' | 'p' | 's' => {
                    let symbol = c.to_ascii_uppercase().to_string();
                    self.pos += 1;
                    self.push_atom(symbol, true, false, None, false)?;
                }
                'B' | 'C' | 'N' | 'O' | 'P' | 'S' | 'F' | 'I' => {
                    let symbol = self.read_organic_symbol();
                    self.push_atom(symbol, false, false, None, false)?;
                }
                '[' => {
                    self.parse_bracket_atom()?;
                }
                '(' => {
                    if self.prev.is_none() {
                        return Err(self.fail("branch opened before any atom"));
                    }
                    self.stack.push(self.prev);
                    self.pos += 1;
                }
                ')' => {
                    self.prev = self
                        .stack
                        .pop()
                        .ok_or_else(|| self.fail("unbalanced ')'"))?;
                    self.pos += 1;
                }
                '-' | '/' | '\\' => {
                    self.pending_bond = Some(BondKind::Single);
                    self.pos += 1;
                }
                '=' => {
                    self.pending_bond = Some(BondKind::Double);
                    self.pos += 1;
                }
                '#' => {
                    self.pending_bond = Some(BondKind::Triple);
                    self.pos += 1;
                }
                ':' => {
                    self.pending_bond = Some(BondKind::Aromatic);
                    self.pos += 1;
                }
                '.' => {
                    self.prev = None;
                    self.pending_bond = None;
                    self.pos += 1;
                }
                '0'..='9' => {
                    let digit = (self.bytes[self.pos] - b'0') as u32;
                    self.pos += 1;
                    self.close_or_open_ring(digit)?;
                }
                '%' => {
                    let number = self.read_two_digit_ring_number()?;
                    self.close_or_open_ring(number)?;
                }
                other => {
                    return Err(self.fail(format!("unexpected character '{}'", other)));
                }
            }
        }

        if !self.stack.is_empty() {
            return Err(self.fail("unclosed branch"));
        }
        if !self.open_rings.is_empty() {
            return Err(self.fail("unclosed ring bond"));
        }
        if self.order.is_empty() {
            return Err(self.fail("no atoms found"));
        }

        let mut molecule = Molecule {
            smiles: self.input.to_string(),
            atoms: self.atoms,
            order: self.order,
            bonds: self.bonds,
        };
        assign_implicit_hydrogens(&mut molecule);
        Ok(molecule)
    }

    fn read_organic_symbol(&mut self) -> String {
        let first = self.bytes[self.pos] as char;
        self.pos += 1;
        // Two-letter organic-subset elements.
        if (first == 'C' && self.peek() == Some('l')) || (first == 'B' && self.peek() == Some('r'))
        {
            let second = self.bytes[self.pos] as char;
            self.pos += 1;
            return format!("{}{}", first, second);
        }
        first.to_string()
    }

    fn peek(&self) -> Option<char> {
        self.bytes.get(self.pos).map(|&b| b as char)
    }

    fn parse_bracket_atom(&mut self) -> Result<(), ToolkitError> {
        let open = self.pos;
        let close = self.input[open..]
            .find(']')
            .map(|offset| open + offset)
            .ok_or_else(|| self.fail("unterminated bracket atom"))?;
        let body = &self.input[open + 1..close];
        self.pos = close + 1;

        let mut chars = body.chars().peekable();
        // Optional isotope.
        while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            chars.next();
        }

        let first = chars
            .next()
            .ok_or_else(|| self.fail("empty bracket atom"))?;
        let (symbol, aromatic) = if first.is_ascii_lowercase() {
            (first.to_ascii_uppercase().to_string(), true)
        } else if first.is_ascii_uppercase() {
            let mut symbol = first.to_string();
            if chars
                .peek()
                .is_some_and(|c| c.is_ascii_lowercase() && *c != 'h')
            {
                // Second letter of a two-letter element, but never the
                // hydrogen-count marker.
                if let Some(&c) = chars.peek() {
                    let candidate = format!("{}{}", first, c);
                    if ATOMIC_WEIGHTS.contains_key(candidate.as_str()) {
                        symbol = candidate;
                        chars.next();
                    }
                }
            }
            (symbol, false)
        } else {
            return Err(self.fail(format!("invalid bracket atom '{}'", body)));
        };

        let mut chiral = false;
        let mut explicit_h: Option<usize> = None;
        while let Some(c) = chars.next() {
            match c {
                '@' => chiral = true,
                'H' => {
                    let mut count = 1usize;
                    if let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                        count = d as usize;
                        chars.next();
                    }
                    explicit_h = Some(count);
                }
                '+' | '-' => {
                    // Charge magnitude, ignored by the descriptor model.
                    while chars
                        .peek()
                        .is_some_and(|n| n.is_ascii_digit() || *n == c)
                    {
                        chars.next();
                    }
                }
                other => {
                    return Err(self.fail(format!("unsupported bracket token '{}'", other)));
                }
            }
        }

        self.push_atom(symbol, aromatic, chiral, explicit_h, true)
    }

    fn read_two_digit_ring_number(&mut self) -> Result<u32, ToolkitError> {
        let d1 = self.bytes.get(self.pos + 1).map(|&b| b as char);
        let d2 = self.bytes.get(self.pos + 2).map(|&b| b as char);
        match (
            d1.and_then(|c| c.to_digit(10)),
            d2.and_then(|c| c.to_digit(10)),
        ) {
            (Some(a), Some(b)) => {
                self.pos += 3;
                Ok(a * 10 + b)
            }
            _ => Err(self.fail("'%' must be followed by two digits")),
        }
    }

    fn push_atom(
        &mut self,
        symbol: String,
        aromatic: bool,
        chiral: bool,
        explicit_h: Option<usize>,
        bracket: bool,
    ) -> Result<(), ToolkitError> {
        let atom = LexAtom {
            symbol,
            aromatic,
            chiral,
            explicit_h,
            bracket,
            insert_after: self.pos,
            neighbors: Vec::new(),
            implicit_h: 0,
        };
        let id = self.atoms.insert(atom);
        self.order.push(id);

        if let Some(prev) = self.prev {
            let kind = self.bond_kind_to(prev, id);
            self.add_bond(prev, id, kind);
        } else {
            self.pending_bond = None;
        }
        self.prev = Some(id);
        Ok(())
    }

    fn bond_kind_to(&mut self, a: AtomId, b: AtomId) -> BondKind {
        self.pending_bond.take().unwrap_or_else(|| {
            if self.atoms[a].aromatic && self.atoms[b].aromatic {
                BondKind::Aromatic
            } else {
                BondKind::Single
            }
        })
    }

    fn add_bond(&mut self, a: AtomId, b: AtomId, kind: BondKind) {
        self.bonds.push(Bond { a, b, kind });
        self.atoms[a].neighbors.push((b, kind));
        self.atoms[b].neighbors.push((a, kind));
    }

    fn close_or_open_ring(&mut self, number: u32) -> Result<(), ToolkitError> {
        let current = self
            .prev
            .ok_or_else(|| self.fail("ring bond digit before any atom"))?;
        // Ring digits extend the current atom's token for branch insertion.
        self.atoms[current].insert_after = self.pos;

        match self.open_rings.remove(&number) {
            Some((partner, opened_kind)) => {
                if partner == current {
                    return Err(self.fail(format!("ring bond {} closes on itself", number)));
                }
                let kind = self.pending_bond.take().or(opened_kind).unwrap_or_else(|| {
                    if self.atoms[partner].aromatic && self.atoms[current].aromatic {
                        BondKind::Aromatic
                    } else {
                        BondKind::Single
                    }
                });
                self.add_bond(partner, current, kind);
            }
            None => {
                let kind = self.pending_bond.take();
                self.open_rings.insert(number, (current, kind));
            }
        }
        Ok(())
    }
}

fn assign_implicit_hydrogens(molecule: &mut Molecule) {
    let ids: Vec<AtomId> = molecule.order.clone();
    for id in ids {
        let atom = &molecule.atoms[id];
        let implicit = match atom.explicit_h {
            Some(count) => count,
            // Bracket atoms without an explicit H count carry none, per SMILES rules.
            None if atom.bracket => 0,
            None => {
                let bond_sum: f64 = atom.neighbors.iter().map(|(_, kind)| kind.order()).sum();
                match default_valence(&atom.symbol) {
                    Some(valence) => (valence - bond_sum).floor().max(0.0) as usize,
                    None => 0,
                }
            }
        };
        molecule.atoms[id].implicit_h = implicit;
    }
}

/// Marks each bond as ring or acyclic via bridge detection: a bond lies in a
/// ring exactly when it is not a bridge of the molecular graph.
fn ring_bond_flags(molecule: &Molecule) -> Vec<bool> {
    let n = molecule.order.len();
    let index_of: HashMap<AtomId, usize> = molecule
        .order
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, i))
        .collect();

    let mut adjacency: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
    for (bond_idx, bond) in molecule.bonds.iter().enumerate() {
        let a = index_of[&bond.a];
        let b = index_of[&bond.b];
        adjacency[a].push((b, bond_idx));
        adjacency[b].push((a, bond_idx));
    }

    let mut is_bridge = vec![false; molecule.bonds.len()];
    let mut disc = vec![usize::MAX; n];
    let mut low = vec![0usize; n];
    let mut timer = 0usize;

    // Iterative DFS; each frame remembers the bond it was entered through.
    for root in 0..n {
        if disc[root] != usize::MAX {
            continue;
        }
        let mut stack: Vec<(usize, Option<usize>, usize)> = vec![(root, None, 0)];
        disc[root] = timer;
        low[root] = timer;
        timer += 1;

        while let Some((node, entry_bond, next_child)) = stack.pop() {
            if next_child < adjacency[node].len() {
                let (child, bond_idx) = adjacency[node][next_child];
                stack.push((node, entry_bond, next_child + 1));
                if Some(bond_idx) == entry_bond {
                    continue;
                }
                if disc[child] == usize::MAX {
                    disc[child] = timer;
                    low[child] = timer;
                    timer += 1;
                    stack.push((child, Some(bond_idx), 0));
                } else {
                    low[node] = low[node].min(disc[child]);
                }
            } else if let Some((parent, _, _)) = stack.last().copied() {
                low[parent] = low[parent].min(low[node]);
                if let Some(bond_idx) = entry_bond
                    && low[node] > disc[parent]
                {
                    is_bridge[bond_idx] = true;
                }
            }
        }
    }

    is_bridge.iter().map(|&bridge| !bridge).collect()
}

/// Cyclomatic ring count of the aromatic-bond subgraph.
fn aromatic_ring_count(molecule: &Molecule) -> usize {
    let aromatic_bonds: Vec<&Bond> = molecule
        .bonds
        .iter()
        .filter(|bond| bond.kind == BondKind::Aromatic)
        .collect();
    if aromatic_bonds.is_empty() {
        return 0;
    }

    let mut parent: HashMap<AtomId, AtomId> = HashMap::new();
    fn find(parent: &mut HashMap<AtomId, AtomId>, x: AtomId) -> AtomId {
        let p = parent.get(&x).copied().unwrap_or(x);
        if p == x {
            x
        } else {
            let root = find(parent, p);
            parent.insert(x, root);
            root
        }
    }

    let mut vertices = std::collections::HashSet::new();
    for bond in &aromatic_bonds {
        vertices.insert(bond.a);
        vertices.insert(bond.b);
        let ra = find(&mut parent, bond.a);
        let rb = find(&mut parent, bond.b);
        if ra != rb {
            parent.insert(ra, rb);
        }
    }
    let components = vertices
        .iter()
        .filter(|&&v| find(&mut parent, v) == v)
        .count();

    aromatic_bonds.len() + components - vertices.len()
}

/// Lightweight lexical implementation of the chemistry toolkit contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexicalToolkit;

impl LexicalToolkit {
    pub fn new() -> Self {
        Self
    }
}

impl ChemToolkit for LexicalToolkit {
    type Molecule = Molecule;

    fn parse(&self, structure: &str) -> Result<Molecule, ToolkitError> {
        Parser::new(structure.trim()).parse()
    }

    fn smiles(&self, molecule: &Molecule) -> String {
        // No canonical reordering is performed; the handle's source string is
        // its canonical form for this toolkit.
        molecule.smiles.clone()
    }

    fn descriptors(&self, molecule: &Molecule) -> MolecularDescriptors {
        let mut weight = 0.0;
        let mut log_p = 0.0;
        let mut hba = 0;
        let mut hbd = 0;
        let mut heavy = 0;
        let mut stereocenters = 0;

        for &id in &molecule.order {
            let atom = &molecule.atoms[id];
            let h = molecule.hydrogen_count(atom);
            weight += ATOMIC_WEIGHTS.get(atom.symbol.as_str()).copied().unwrap_or(0.0);
            weight += atom.implicit_h as f64 * 1.008;
            log_p += log_p_contribution(&atom.symbol, atom.aromatic);
            log_p += atom.implicit_h as f64 * log_p_contribution("H", false);
            if atom.symbol != "H" {
                heavy += 1;
            }
            if atom.symbol == "N" || atom.symbol == "O" {
                hba += 1;
                if h > 0 {
                    hbd += 1;
                }
            }
            if atom.chiral {
                stereocenters += 1;
            }
        }

        let ring_flags = ring_bond_flags(molecule);
        let index_of: HashMap<AtomId, usize> = molecule
            .order
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, i))
            .collect();
        let mut heavy_degree = vec![0usize; molecule.order.len()];
        for bond in &molecule.bonds {
            if molecule.atoms[bond.a].symbol != "H" && molecule.atoms[bond.b].symbol != "H" {
                heavy_degree[index_of[&bond.a]] += 1;
                heavy_degree[index_of[&bond.b]] += 1;
            }
        }
        let rotatable_bonds = molecule
            .bonds
            .iter()
            .enumerate()
            .filter(|(idx, bond)| {
                bond.kind == BondKind::Single
                    && !ring_flags[*idx]
                    && heavy_degree[index_of[&bond.a]] >= 2
                    && heavy_degree[index_of[&bond.b]] >= 2
            })
            .count();

        MolecularDescriptors {
            molecular_weight: weight,
            log_p,
            hba,
            hbd,
            rotatable_bonds,
            aromatic_rings: aromatic_ring_count(molecule),
            heavy_atoms: heavy,
            stereocenters,
        }
    }

    fn has_element(&self, molecule: &Molecule, symbol: &str) -> bool {
        molecule
            .order
            .iter()
            .any(|&id| molecule.atoms[id].symbol == symbol)
    }

    fn find_atoms(&self, molecule: &Molecule, query: &AtomQuery) -> Vec<AtomRef> {
        molecule
            .order
            .iter()
            .enumerate()
            .filter(|&(_, &id)| {
                let atom = &molecule.atoms[id];
                match query {
                    AtomQuery::AromaticCarbonWithHydrogen => {
                        atom.aromatic
                            && atom.symbol == "C"
                            && molecule.hydrogen_count(atom) > 0
                    }
                    AtomQuery::AromaticCarbonNotBondedTo(symbol) => {
                        atom.aromatic
                            && atom.symbol == "C"
                            && !atom
                                .neighbors
                                .iter()
                                .any(|(n, _)| molecule.atoms[*n].symbol == *symbol)
                    }
                }
            })
            .map(|(i, _)| AtomRef(i))
            .collect()
    }

    fn attach_fragment(
        &self,
        molecule: &Molecule,
        fragment: &str,
        at: AtomRef,
    ) -> Result<Molecule, ToolkitError> {
        // Validate the fragment on its own before splicing it in.
        Parser::new(fragment.trim()).parse()?;

        let (_, atom) = molecule.atom(at).ok_or_else(|| ToolkitError::Edit {
            reason: format!("atom reference {} out of range", at.0),
        })?;
        if atom.implicit_h == 0 {
            return Err(ToolkitError::Edit {
                reason: format!("no free valence at atom {}", at.0),
            });
        }

        let insert_at = atom.insert_after;
        let edited = format!(
            "{}({}){}",
            &molecule.smiles[..insert_at],
            fragment.trim(),
            &molecule.smiles[insert_at..]
        );
        Parser::new(&edited).parse().map_err(|e| ToolkitError::Edit {
            reason: format!("substituted structure failed to re-parse: {}", e),
        })
    }
}
