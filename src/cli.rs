//! CLI argument parsing and run dispatch

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use variant_expander::config::RunConfig;
use variant_expander::defaults;
use variant_expander::output::{OutputConfig, Status};
use variant_expander::pipeline;

/// Variant Expander - Expand product options into concrete sellable variants
#[derive(Parser, Debug)]
#[command(name = "variant-expander")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Catalog file to read
    #[arg(
        long = "in",
        value_name = "PATH",
        env = "VARIANT_EXPANDER_IN",
        default_value = defaults::INPUT_PATH
    )]
    input: PathBuf,

    /// Directory to write the variant file into
    #[arg(
        long = "out",
        value_name = "DIR",
        env = "VARIANT_EXPANDER_OUT",
        default_value = defaults::OUTPUT_DIR
    )]
    output_dir: PathBuf,

    /// Output file base name, without extension
    #[arg(
        long,
        value_name = "BASENAME",
        env = "VARIANT_EXPANDER_NAME",
        default_value = defaults::OUTPUT_NAME
    )]
    name: String,

    /// Write single-line JSON instead of pretty-printed JSON
    #[arg(long)]
    compact: bool,

    /// Create the output directory if it does not exist
    #[arg(short = 'p', long)]
    create_dirs: bool,

    /// Expand and report without writing the output file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Suppress the summary line (errors are still reported)
    #[arg(short, long)]
    quiet: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Parse the process arguments, exiting on error.
    ///
    /// A help flag wins over any other argument error, so `--bogus -h` still
    /// prints help and exits 0.
    pub fn parse_args() -> Self {
        let args: Vec<OsString> = std::env::args_os().collect();
        match Self::try_parse_from(&args) {
            Ok(cli) => cli,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(_) if help_requested(&args) => {
                print!("{}", Self::command().render_help());
                std::process::exit(0);
            }
            Err(e) => e.exit(),
        }
    }

    /// The `--log-level` value, for logger setup.
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    fn run_config(&self) -> RunConfig {
        RunConfig {
            input: self.input.clone(),
            output_dir: self.output_dir.clone(),
            output_name: self.name.clone(),
            pretty: !self.compact,
            create_dirs: self.create_dirs,
            dry_run: self.dry_run,
        }
    }

    /// Execute the run described by the parsed flags
    pub fn execute(self) -> Result<()> {
        let out = OutputConfig::from_env_and_flag(&self.color);
        let config = self.run_config();

        let summary = match pipeline::run(&config) {
            Ok(summary) => summary,
            Err(e) => {
                if !self.quiet {
                    eprintln!("{}", out.status_line(Status::Failure, "Variant expansion failed"));
                }
                return Err(e).context(format!(
                    "Could not expand variants from {}",
                    config.input.display()
                ));
            }
        };

        if !self.quiet {
            let message = format!(
                "Generated {} variants from {} products: {}",
                summary.variants,
                summary.products,
                summary.output_path.display()
            );
            let status = if summary.written {
                Status::Success
            } else {
                Status::DryRun
            };
            println!("{}", out.status_line(status, &message));
        }

        Ok(())
    }
}

/// Whether `-h` or `--help` appears among the arguments, ignoring the program
/// name and anything after `--`.
fn help_requested(args: &[OsString]) -> bool {
    args.iter()
        .skip(1)
        .take_while(|arg| *arg != "--")
        .any(|arg| arg == "-h" || arg == "--help")
}
