//! # ligandforge Core Library
//!
//! A decision and combinatorial engine for chemistry-research tooling: it
//! recommends organometallic catalysts for a requested reaction and generates
//! structural variants of a ligand scaffold.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`CatalystRecord`, `Variant`), the read-only knowledge-base repository,
//!   and the chemistry-toolkit seam (the [`core::chem::ChemToolkit`] trait
//!   plus a bundled lexical SMILES implementation).
//!
//! - **[`engine`]: The Logic Core.** Implements the decision algorithms:
//!   reaction-descriptor normalization against the closed vocabulary,
//!   multi-factor deterministic catalyst scoring, and rule-driven generation
//!   of steric, electronic, and bioisosteric ligand variants.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level,
//!   user-facing layer. It ties the `engine` and `core` together to execute
//!   complete procedures: catalyst recommendation, ligand design, and the
//!   chained unified report.
//!
//! All operations are synchronous and side-effect-free; the knowledge base is
//! read-only after construction, so one instance may be shared across
//! concurrent requests without locking.

pub mod core;
pub mod engine;
pub mod workflows;
