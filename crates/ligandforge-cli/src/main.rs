mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("🚀 ligandforge v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Recommend(args) => {
            info!("Dispatching to 'recommend' command.");
            commands::recommend::run(args, &cli.database)
        }
        Commands::Design(args) => {
            info!("Dispatching to 'design' command.");
            commands::design::run(args, &cli.database)
        }
        Commands::Chain(args) => {
            info!("Dispatching to 'chain' command.");
            commands::chain::run(args, &cli.database)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
