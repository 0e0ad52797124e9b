//! # Variant Expander CLI
//!
//! This is the binary entry point for the `variant-expander` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Initialising the logger from `--log-level` (or `RUST_LOG`).
//! - Running the expansion and reporting any failure as a logged error with a
//!   non-zero exit status, rather than letting it escape `main`.
//!
//! The expansion logic lives in the library crate; the binary is a thin
//! wrapper around it.

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse_args();
    init_logging(cli.log_level());

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}
