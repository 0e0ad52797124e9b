//! # Run Configuration
//!
//! `RunConfig` is the structured parameter object handed to
//! [`pipeline::run`](crate::pipeline::run). The binary builds one from its
//! command-line flags and environment; library users can build one directly.

use std::path::{Path, PathBuf};

use crate::defaults;
use crate::error::{Error, Result};

/// Settings for one expansion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Catalog file to read.
    pub input: PathBuf,
    /// Directory the variant file is written into.
    pub output_dir: PathBuf,
    /// Output file base name, without extension.
    pub output_name: String,
    /// Pretty-print the output with 2-space indentation.
    pub pretty: bool,
    /// Create `output_dir` when it does not exist.
    pub create_dirs: bool,
    /// Expand and report, but do not write anything.
    pub dry_run: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: defaults::default_input_path(),
            output_dir: defaults::default_output_dir(),
            output_name: defaults::OUTPUT_NAME.to_string(),
            pretty: true,
            create_dirs: false,
            dry_run: false,
        }
    }
}

impl RunConfig {
    /// Full path of the file the variants are written to.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.output_name, defaults::OUTPUT_EXTENSION))
    }

    /// Reject settings that resolved to empty values.
    pub fn validate(&self) -> Result<()> {
        if is_empty_path(&self.input) {
            return Err(Error::Configuration {
                message: "input path is empty".to_string(),
                hint: Some(format!("pass --in <path> (default: {})", defaults::INPUT_PATH)),
            });
        }
        if is_empty_path(&self.output_dir) {
            return Err(Error::Configuration {
                message: "output directory is empty".to_string(),
                hint: Some(format!("pass --out <dir> (default: {})", defaults::OUTPUT_DIR)),
            });
        }
        if self.output_name.trim().is_empty() {
            return Err(Error::Configuration {
                message: "output base name is empty".to_string(),
                hint: Some(format!("pass --name <basename> (default: {})", defaults::OUTPUT_NAME)),
            });
        }
        if self.output_name.contains(['/', '\\']) {
            return Err(Error::Configuration {
                message: format!("output base name '{}' contains a path separator", self.output_name),
                hint: Some("use --out to choose the directory".to_string()),
            });
        }
        Ok(())
    }
}

fn is_empty_path(path: &Path) -> bool {
    path.as_os_str().is_empty()
}
