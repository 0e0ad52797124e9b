//! # Terminal Output
//!
//! Decides whether user-facing status lines use emoji markers or plain-text
//! tags, based on the `--color` flag and the usual environment conventions:
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

/// The kinds of status line the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    DryRun,
    Failure,
}

impl Status {
    fn markers(self) -> (&'static str, &'static str) {
        match self {
            Status::Success => ("✅", "[OK]"),
            Status::DryRun => ("🔎", "[DRY RUN]"),
            Status::Failure => ("❌", "[ERR]"),
        }
    }
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `always` and `never` win outright; anything else falls back to
    /// environment and TTY detection.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// The marker to prefix a status line with.
    pub fn marker(&self, status: Status) -> &'static str {
        let (emoji, plain) = status.markers();
        if self.use_color {
            emoji
        } else {
            plain
        }
    }

    /// Format a status line.
    pub fn status_line(&self, status: Status, message: &str) -> String {
        format!("{} {}", self.marker(status), message)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
