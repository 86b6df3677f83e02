//! Pixelplay - command-line tool for building platformer games from pixel art

use std::process::ExitCode;

use pixelplay::cli;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `pixelplay=debug`).
const LOG_ENV_VAR: &str = "PIXELPLAY_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    cli::run()
}
