pub mod chem;
pub mod kb;
pub mod models;
