use crate::cli::ChainArgs;
use crate::commands::{emit_report, is_stdin_marker, load_knowledge_base};
use crate::error::{CliError, Result};
use ligandforge::core::chem::LexicalToolkit;
use ligandforge::workflows::chain::{self, ChainRequest};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

pub fn run(args: ChainArgs, database: &Option<PathBuf>) -> Result<()> {
    let raw = if is_stdin_marker(&args.request) {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(&args.request)?
    };

    let request: ChainRequest = serde_json::from_str(&raw).map_err(|source| CliError::Request {
        path: args.request.clone(),
        source,
    })?;

    let kb = load_knowledge_base(database)?;
    let report = chain::run(&kb, &LexicalToolkit, &request);
    info!(status = %report.status, "chain complete");

    emit_report(&report, &args.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn chain_args(request: &Path, output: &Path) -> ChainArgs {
        ChainArgs {
            request: request.to_path_buf(),
            output: Some(output.to_path_buf()),
        }
    }

    #[test]
    fn chain_runs_a_reaction_request_from_a_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let request_path = temp_dir.path().join("request.json");
        let output_path = temp_dir.path().join("report.json");
        std::fs::write(&request_path, r#"{"reaction_type": "suzuki"}"#).unwrap();

        run(chain_args(&request_path, &output_path), &None).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("\"agent\": \"catalyst-design\""));
        assert!(content.contains("\"recommendation\""));
        assert!(content.contains("\"ligand_optimization\""));
    }

    #[test]
    fn malformed_request_json_is_a_request_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let request_path = temp_dir.path().join("request.json");
        let output_path = temp_dir.path().join("report.json");
        std::fs::write(&request_path, "{not json").unwrap();

        let result = run(chain_args(&request_path, &output_path), &None);
        assert!(matches!(result, Err(CliError::Request { .. })));
    }

    #[test]
    fn missing_request_file_is_an_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("report.json");

        let result = run(
            chain_args(Path::new("/nonexistent/request.json"), &output_path),
            &None,
        );
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
