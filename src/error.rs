//! # Error Handling
//!
//! This module defines the error taxonomy for the `variant-expander` run
//! boundary. It uses `thiserror` to derive a single `Error` enum whose variants
//! map onto the places a run can fail:
//!
//! - **`Configuration`**: a required path or name resolved to empty.
//! - **`InputRead`**: the catalog file is missing, unreadable, not valid JSON,
//!   or not shaped like `{ "products": [...] }`.
//! - **`Schema`**: the catalog parsed but violates a structural rule, such as an
//!   option name that would overwrite a base variant field.
//! - **`OutputWrite`**: the destination directory is missing or the file
//!   cannot be written.
//! - **`Serialization`**: the variant list could not be rendered as JSON.
//!
//! The expansion core itself never fails; every variant here is raised by the
//! catalog loader or the pipeline around it.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for variant-expander operations
#[derive(Error, Debug)]
pub enum Error {
    /// A run setting that must be non-empty was empty.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Configuration {
        message: String,
        /// Optional hint for how to fix the setting
        hint: Option<String>,
    },

    /// The catalog could not be read or parsed.
    ///
    /// `path` is `None` when parsing from an in-memory string.
    #[error("Failed to read catalog{}: {message}", path.as_ref().map(|p| format!(" '{}'", p.display())).unwrap_or_default())]
    InputRead {
        path: Option<PathBuf>,
        message: String,
    },

    /// The catalog parsed but is structurally invalid.
    #[error("Invalid catalog: product {product_id}: {message}")]
    Schema { product_id: i64, message: String },

    /// The output file could not be written.
    #[error("Failed to write output '{}': {message}", path.display())]
    OutputWrite { path: PathBuf, message: String },

    /// The variant list could not be serialized.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
