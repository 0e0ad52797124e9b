//! Shared test utilities for CLI end-to-end tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_catalog(catalogs::MUG);
//!     fixture.command().arg("--create-dirs").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::catalogs;
    pub use super::TestFixture;
}

/// Catalog JSON snippets for testing.
#[allow(dead_code)]
pub mod catalogs {
    /// A mug with a bare-label option and an override option.
    pub const MUG: &str = r#"{
  "products": [
    {
      "id": 1,
      "name": "Mug",
      "description": "A ceramic mug",
      "options": [
        { "name": "Color", "values": ["Red", "Blue"] },
        {
          "name": "Finish",
          "values": [
            { "name": "360 wrap print", "price": 50, "description": "Full wrap" },
            { "name": "One-sided printing", "price": 45, "description": "One side", "Embossed": true }
          ]
        }
      ]
    }
  ]
}"#;

    /// No products at all.
    pub const EMPTY: &str = r#"{"products": []}"#;

    /// Not JSON.
    pub const INVALID_JSON: &str = "{ \"products\": [";

    /// Valid JSON in the wrong shape.
    pub const WRONG_SHAPE: &str = r#"[{"id": 1, "name": "Mug"}]"#;

    /// An option whose name would overwrite the variant price.
    pub const RESERVED_OPTION: &str = r#"{
  "products": [
    { "id": 3, "name": "Pen", "description": "Ballpoint", "options": [
      { "name": "Price", "values": ["Low", "High"] }
    ]}
  ]
}"#;
}

/// A temporary working directory with an optional catalog file.
///
/// The catalog is written to `data/input-data.json`, the path the CLI reads by
/// default, so commands run in the fixture need no `--in` flag.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write a catalog at the default input path.
    pub fn with_catalog(self, content: &str) -> Self {
        self.with_file("data/input-data.json", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Create an empty directory.
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the output file for the default `--out` and `--name`.
    pub fn default_output(&self) -> PathBuf {
        self.path()
            .join("results")
            .join("generated-variants-with-base-data.json")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Read and parse a JSON file written by the CLI.
    pub fn read_json(&self, path: &Path) -> serde_json::Value {
        let text = std::fs::read_to_string(path).expect("Failed to read output file");
        serde_json::from_str(&text).expect("Output is not valid JSON")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Create a command running in this fixture's directory, with environment
    /// overrides and colors cleared so output is stable.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("variant-expander");
        cmd.current_dir(self.path())
            .env_remove("VARIANT_EXPANDER_IN")
            .env_remove("VARIANT_EXPANDER_OUT")
            .env_remove("VARIANT_EXPANDER_NAME")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}
