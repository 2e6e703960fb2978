pub mod catalyst;
pub mod constraints;
pub mod report;
pub mod variant;
