use ligandforge::core::kb::KnowledgeBaseError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    KnowledgeBase(#[from] KnowledgeBaseError),

    #[error("Failed to parse request file '{path}': {source}", path = path.display())]
    Request {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),
}
