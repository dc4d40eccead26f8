//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reviewsense.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REVIEWSENSE_BASE_URL`,
//!    `REVIEWSENSE_PRODUCT_NAME`, `REVIEWSENSE_REVIEW_TEXT`, ...
//! 4. **Command-line arguments** – `--base-url`/`-b`, `--product-name`/`-p`,
//!    `--review-text`/`-r`, `--history`/`-H`
//!
//! # Configuration File
//!
//! ```toml
//! base_url = "http://localhost:6543"
//! request_timeout_seconds = 30
//! log_dir = "/var/log/reviewsense"
//! telemetry = false
//! ```

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::endpoint::{BackendEndpoint, DEFAULT_BASE_URL};
use crate::api::error::AnalyzerError;
use crate::api::models::ReviewSubmission;

/// Application name used for discovery and the default log directory.
const APP_NAME: &str = "reviewsense";

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Full-screen analyser with form, result, and history.
    Interactive,
    /// Analyse one review given on the command line and print the result.
    SingleAnalysis,
    /// Print the stored analysis history and exit.
    HistoryListing,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reviewsense::ReviewSenseConfig;
///
/// let config = ReviewSenseConfig::load().expect("failed to load configuration");
/// let endpoint = config.endpoint().expect("base URL should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEWSENSE",
    discovery(
        dotfile_name = ".reviewsense.toml",
        config_file_name = "reviewsense.toml",
        app_name = "reviewsense"
    )
)]
pub struct ReviewSenseConfig {
    /// Base URL of the review analysis backend.
    ///
    /// Can be provided via:
    /// - CLI: `--base-url <URL>` or `-b <URL>`
    /// - Environment: `REVIEWSENSE_BASE_URL`
    /// - Config file: `base_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub base_url: String,

    /// Product name for a one-shot analysis.
    ///
    /// Can be provided via:
    /// - CLI: `--product-name <NAME>` or `-p <NAME>`
    /// - Environment: `REVIEWSENSE_PRODUCT_NAME`
    #[ortho_config(cli_short = 'p')]
    pub product_name: Option<String>,

    /// Review text for a one-shot analysis.
    ///
    /// Can be provided via:
    /// - CLI: `--review-text <TEXT>` or `-r <TEXT>`
    /// - Environment: `REVIEWSENSE_REVIEW_TEXT`
    #[ortho_config(cli_short = 'r')]
    pub review_text: Option<String>,

    /// Prints the stored analysis history and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--history` / `-H`
    /// - Config file: `history = true`
    #[ortho_config(cli_short = 'H')]
    pub history: bool,

    /// Optional HTTP timeout, in seconds, for backend requests.
    ///
    /// Unset by default, in which case requests wait until the transport
    /// itself resolves or errors. `0` also means no timeout.
    ///
    /// Can be provided via:
    /// - CLI: `--request-timeout-seconds <SECONDS>`
    /// - Environment: `REVIEWSENSE_REQUEST_TIMEOUT_SECONDS`
    /// - Config file: `request_timeout_seconds = 30`
    #[ortho_config()]
    pub request_timeout_seconds: Option<u64>,

    /// Directory for the interactive analyser's log files.
    ///
    /// Defaults to `$XDG_STATE_HOME/reviewsense`, then
    /// `$HOME/.local/state/reviewsense`, then a `reviewsense` directory in
    /// the system temporary directory.
    ///
    /// Can be provided via:
    /// - CLI: `--log-dir <DIR>`
    /// - Environment: `REVIEWSENSE_LOG_DIR`
    /// - Config file: `log_dir = "..."`
    #[ortho_config()]
    pub log_dir: Option<String>,

    /// Emits telemetry events to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for ReviewSenseConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            product_name: None,
            review_text: None,
            history: false,
            request_timeout_seconds: None,
            log_dir: None,
            telemetry: false,
        }
    }
}

impl ReviewSenseConfig {
    /// Determines the operation mode based on provided configuration.
    ///
    /// `--history` wins; otherwise supplying either review field selects
    /// single analysis; with neither, the interactive analyser starts.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.history {
            OperationMode::HistoryListing
        } else if self.product_name.is_some() || self.review_text.is_some() {
            OperationMode::SingleAnalysis
        } else {
            OperationMode::Interactive
        }
    }

    /// Validates and returns the backend endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::InvalidBaseUrl`] when `base_url` is unusable.
    pub fn endpoint(&self) -> Result<BackendEndpoint, AnalyzerError> {
        BackendEndpoint::parse(&self.base_url)
    }

    /// Returns the configured request timeout, if any.
    ///
    /// A zero timeout is treated as unset; reqwest would otherwise fail every
    /// request immediately.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds
            .filter(|seconds| *seconds > 0)
            .map(Duration::from_secs)
    }

    /// Resolves the directory the interactive analyser writes logs to.
    #[must_use]
    pub fn log_directory(&self) -> PathBuf {
        if let Some(dir) = self.log_dir.as_deref().filter(|dir| !dir.is_empty()) {
            return PathBuf::from(dir);
        }
        let state_home = env::var_os("XDG_STATE_HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                env::var_os("HOME")
                    .filter(|value| !value.is_empty())
                    .map(|home| PathBuf::from(home).join(".local").join("state"))
            })
            .unwrap_or_else(env::temp_dir);
        state_home.join(APP_NAME)
    }

    /// Builds the one-shot submission from the review fields.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::MissingSubmission`] when either field is
    /// missing or empty.
    pub fn require_submission(&self) -> Result<ReviewSubmission, AnalyzerError> {
        match (&self.product_name, &self.review_text) {
            (Some(product_name), Some(review_text)) => {
                ReviewSubmission::new(product_name.as_str(), review_text.as_str())
                    .ok_or(AnalyzerError::MissingSubmission)
            }
            _ => Err(AnalyzerError::MissingSubmission),
        }
    }
}

#[cfg(test)]
mod tests;
