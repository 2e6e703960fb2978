use crate::error::Result;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

/// Installs the global tracing subscriber.
///
/// Diagnostics go to stderr so that report JSON on stdout stays
/// machine-readable. The default level is WARN; each `-v` raises it one
/// step, and `--log-file` adds a plain-text file layer with full targets.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let level_filter = match (quiet, verbosity) {
        (true, _) => LevelFilter::OFF,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer);

    match log_file {
        Some(path) => {
            let file = File::create(&path)?;
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true);
            registry.with(file_layer).init();
        }
        None => registry.init(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use serial_test::serial;
    use std::sync::Once;
    use tracing::{debug, info, warn};

    static INIT: Once = Once::new();

    fn ensure_global_logger_is_set() {
        INIT.call_once(|| {
            setup_logging(3, false, None).expect("Failed to set up global logger for tests");
        });
    }

    #[test]
    #[serial]
    fn macros_emit_through_the_global_logger() {
        ensure_global_logger_is_set();

        warn!("warn-level message");
        info!("info-level message");
        debug!("debug-level message");
    }

    #[test]
    #[serial]
    fn file_layer_captures_messages() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("run.log");

        let file = File::create(&log_path).unwrap();
        let file_layer = fmt::layer().with_writer(file).with_ansi(false);
        let subscriber = tracing_subscriber::registry().with(file_layer);

        tracing::subscriber::with_default(subscriber, || {
            info!("message bound for the log file");
        });

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("message bound for the log file"));
        assert!(content.contains("INFO"));
    }

    #[test]
    #[serial]
    fn unwritable_log_file_path_propagates_error() {
        let invalid_path = PathBuf::from("/");

        if cfg!(unix) && invalid_path.is_dir() {
            let result = setup_logging(0, false, Some(invalid_path));
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
