pub mod repository;

pub use repository::{KnowledgeBase, KnowledgeBaseError};
