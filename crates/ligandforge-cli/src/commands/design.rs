use crate::cli::DesignArgs;
use crate::commands::emit_report;
use crate::error::{CliError, Result};
use ligandforge::core::chem::LexicalToolkit;
use ligandforge::core::models::variant::Strategy;
use ligandforge::workflows::design::{self, DesignRequest};
use std::path::PathBuf;
use tracing::info;

pub fn run(args: DesignArgs, _database: &Option<PathBuf>) -> Result<()> {
    let strategy = args
        .strategy
        .parse::<Strategy>()
        .map_err(|()| CliError::Argument(format!("unknown strategy '{}'", args.strategy)))?;

    let request = DesignRequest {
        scaffold: args.scaffold,
        strategy,
    };

    let report = design::run(&LexicalToolkit, &request);
    info!(variants = report.total_variants, "ligand design complete");

    emit_report(&report, &args.output)
}
