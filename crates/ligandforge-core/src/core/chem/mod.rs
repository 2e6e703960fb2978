pub mod aliases;
pub mod ids;
pub mod lexical;
pub mod toolkit;

pub use lexical::LexicalToolkit;
pub use toolkit::{AtomQuery, AtomRef, ChemToolkit, MolecularDescriptors, ToolkitError};
