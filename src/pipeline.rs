//! # Expansion Pipeline
//!
//! Drives a complete run from a [`RunConfig`]:
//!
//! 1.  **Validate** the run configuration.
//! 2.  **Load** the catalog file and check its structure.
//! 3.  **Expand** every product into variants.
//! 4.  **Render** the variant list as JSON, entirely in memory.
//! 5.  **Write** the rendered document to `<output_dir>/<output_name>.json`,
//!     unless this is a dry run.
//!
//! Rendering happens before the output file is touched, and the document is
//! written to a temporary file beside the target and then renamed over it, so
//! a failed run never leaves a truncated document behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::catalog::{self, Catalog};
use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::expand::expand_catalog;
use crate::variant::Variant;

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of products in the catalog.
    pub products: usize,
    /// Number of variants generated.
    pub variants: usize,
    /// Where the variants were (or, on a dry run, would have been) written.
    pub output_path: PathBuf,
    /// False on a dry run.
    pub written: bool,
}

/// Load and validate the catalog at `path`.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    info!("Loading catalog from {}", path.display());
    let catalog = catalog::from_file(path)?;
    debug!("Loaded {} products", catalog.len());
    Ok(catalog)
}

/// Serialize variants as a JSON array.
pub fn render(variants: &[Variant], pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(variants)
    } else {
        serde_json::to_string(variants)
    };
    rendered.map_err(|e| Error::Serialization {
        message: e.to_string(),
    })
}

/// Write `contents` to `path`, replacing any existing file atomically.
///
/// The parent directory must exist unless `create_dirs` is set.
pub fn write_output(path: &Path, contents: &str, create_dirs: bool) -> Result<()> {
    let write_error = |message: String| Error::OutputWrite {
        path: path.to_path_buf(),
        message,
    };

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    if !parent.is_dir() {
        if create_dirs {
            fs::create_dir_all(parent).map_err(|e| {
                write_error(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        } else {
            return Err(write_error(format!(
                "directory '{}' does not exist (use --create-dirs to create it)",
                parent.display()
            )));
        }
    }

    // Same directory as the target, so the rename never crosses filesystems
    let mut staged = NamedTempFile::new_in(parent).map_err(|e| {
        write_error(format!(
            "Failed to create temporary file in '{}': {}",
            parent.display(),
            e
        ))
    })?;
    staged
        .write_all(contents.as_bytes())
        .map_err(|e| write_error(e.to_string()))?;
    staged
        .as_file()
        .sync_all()
        .map_err(|e| write_error(e.to_string()))?;
    staged
        .persist(path)
        .map_err(|e| write_error(e.error.to_string()))?;
    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Execute a full run.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    config.validate()?;

    let catalog = load_catalog(&config.input)?;
    let variants = expand_catalog(&catalog);
    info!(
        "Expanded {} products into {} variants",
        catalog.len(),
        variants.len()
    );

    let rendered = render(&variants, config.pretty)?;
    let output_path = config.output_path();

    if config.dry_run {
        info!("Dry run: skipping write to {}", output_path.display());
    } else {
        write_output(&output_path, &rendered, config.create_dirs)?;
    }

    Ok(RunSummary {
        products: catalog.len(),
        variants: variants.len(),
        output_path,
        written: !config.dry_run,
    })
}
