pub mod chain;
pub mod design;
pub mod recommend;

use crate::error::Result;
use ligandforge::core::kb::KnowledgeBase;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Loads the catalyst database from `--database`, falling back to the
/// bundled artifact.
pub fn load_knowledge_base(database: &Option<PathBuf>) -> Result<KnowledgeBase> {
    let kb = match database {
        Some(path) => {
            info!(path = %path.display(), "loading catalyst database from file");
            KnowledgeBase::load(path)?
        }
        None => KnowledgeBase::bundled()?,
    };
    Ok(kb)
}

/// Writes the report as pretty-printed JSON to stdout or to `--output`.
pub fn emit_report<T: Serialize>(report: &T, output: &Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Reports whether the chain request argument means "read from stdin".
pub fn is_stdin_marker(path: &Path) -> bool {
    path.as_os_str() == "-"
}
