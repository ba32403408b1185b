//! Error handling for the SolarFarm CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use solarfarm_adapters::LoaderError;
use solarfarm_core::error::SolarFarmError;

// Re-export so callers only need `use crate::error::*`.
pub use solarfarm_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not catch.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// One or more panels failed validation or duplicate checks.
    ///
    /// The per-panel messages have already been printed; this only carries
    /// the exit status.
    #[error("{rejected} of {total} panel(s) rejected")]
    PanelsRejected { rejected: usize, total: usize },

    /// A panel batch file could not be read or parsed.
    #[error("Panel file error: {0}")]
    PanelFile(#[from] LoaderError),

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `solarfarm-core`, e.g. a storage failure.
    #[error("Panel store failed: {0}")]
    Core(#[from] SolarFarmError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::IoError {
            message: format!("failed to encode JSON output: {err}"),
            source: std::io::Error::other(err),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::PanelsRejected { .. } => vec![
                "Fix the reported fields and try again".into(),
                "Valid materials: solarfarm materials".into(),
            ],

            Self::PanelFile(err) if err.is_not_found() => vec![
                format!("No such file: {}", err.path().display()),
                "Check the path passed to --existing or import".into(),
            ],

            Self::PanelFile(_) => vec![
                "Panel files must be .json (array of panels) or .toml ([[panels]] tables)".into(),
                "Each panel needs row, column and year_installed".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::PanelsRejected { .. } => ErrorCategory::UserError,
            Self::PanelFile(err) if err.is_not_found() => ErrorCategory::NotFound,
            Self::PanelFile(_) => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use solarfarm_adapters::PanelFileLoader;
    use solarfarm_core::application::ApplicationError;

    #[test]
    fn rejected_panels_exit_with_user_error() {
        let err = CliError::PanelsRejected {
            rejected: 1,
            total: 3,
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "1 of 3 panel(s) rejected");
    }

    #[test]
    fn missing_panel_file_is_not_found() {
        let loader_err = PanelFileLoader::new("/absolutely/does/not/exist.json")
            .load()
            .unwrap_err();
        let err = CliError::from(loader_err);

        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.exit_code(), 3);
        assert!(err.suggestions()[0].contains("exist.json"));
    }

    #[test]
    fn storage_failure_is_internal() {
        let err = CliError::from(SolarFarmError::from(ApplicationError::DataAccess {
            operation: "create",
            reason: "disk full".into(),
        }));

        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn duplicate_key_conflict_is_user_error() {
        let err = CliError::from(SolarFarmError::from(ApplicationError::DuplicateKey {
            key: solarfarm_core::domain::PanelKey::new(5, 9, "West"),
        }));

        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn config_error_exit_code() {
        let err = CliError::ConfigError {
            message: "bad".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn plain_format_lists_cause_when_verbose() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CliError::IoError {
            message: "writing output".into(),
            source: io,
        };

        let verbose = err.format_plain(true);
        assert!(verbose.contains("Caused by: denied"));
        assert!(!verbose.contains("--verbose"));

        let terse = err.format_plain(false);
        assert!(terse.contains("Use -v / --verbose"));
        assert!(!terse.contains("\x1b["));
    }
}
