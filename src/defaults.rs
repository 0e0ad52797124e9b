//! Default values for a variant-expander run.
//!
//! The CLI flags and their environment variables fall back to these, and
//! `RunConfig::default` uses them as well.

use std::path::PathBuf;

/// Catalog read when `--in` is not given.
pub const INPUT_PATH: &str = "./data/input-data.json";

/// Directory the variant file is written to when `--out` is not given.
pub const OUTPUT_DIR: &str = "./results";

/// Output file base name (without extension) when `--name` is not given.
pub const OUTPUT_NAME: &str = "generated-variants-with-base-data";

/// Extension appended to the output base name.
pub const OUTPUT_EXTENSION: &str = "json";

/// Returns the default catalog path.
pub fn default_input_path() -> PathBuf {
    PathBuf::from(INPUT_PATH)
}

/// Returns the default output directory.
pub fn default_output_dir() -> PathBuf {
    PathBuf::from(OUTPUT_DIR)
}
