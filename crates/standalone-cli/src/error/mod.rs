//! Error handling for the standalone CLI.
//!
//! A hierarchical error type system built on `thiserror`:
//!
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`ConfigError`, `BuildError`) provide detailed context
//! - **Error conversion** is automatic via `#[from]` attributes
//! - **Context helpers** allow attaching additional information to errors
//!
//! Errors are converted to miette diagnostics at the `main` boundary for
//! rendering; see [`cli_error_to_miette`].

mod miette;

pub use miette::cli_error_to_miette;

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
///
/// This is the primary error type returned by CLI commands. It automatically
/// converts from domain-specific errors via `From` implementations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Project configuration errors (unreadable or invalid standalone.config.json)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Build process errors (bundler failures, invalid entries, etc.)
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal prompt errors (selection cancellation is handled before
    /// conversion and never reaches this variant)
    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Base-configuration errors.
///
/// These occur while loading `standalone.config.json`. A missing file is not
/// an error (the loader returns `None`); an unreadable or invalid file is
/// fatal and aborts the whole invocation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but cannot be parsed or extracted
    #[error("Invalid project configuration: {0}\n\nHint: Check standalone.config.json syntax and field types")]
    Invalid(String),

    /// I/O error while reading config
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Build process errors.
///
/// These occur between component discovery and the end of the bundler batch.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Entry point file doesn't exist
    #[error("Entry point not found: {}\n\nHint: Each component directory needs an embed.ts or embed.js", .0.display())]
    EntryNotFound(PathBuf),

    /// A single bundler invocation failed
    #[error("Bundler failed for '{component}': {message}")]
    BundlerFailed {
        /// Normalized component name
        component: String,
        /// Captured failure output from the bundler process
        message: String,
    },

    /// One or more components in the batch failed to build
    #[error("{failed} of {total} component builds failed\n\nHint: Successful bundles were kept on disk; see the report above for the failing components")]
    BatchFailed {
        /// Number of failed components
        failed: usize,
        /// Number of components issued to the bundler
        total: usize,
    },

    /// Output directory exists but is not usable
    #[error("Output path exists but is not a directory: {}", .0.display())]
    OutputNotWritable(PathBuf),

    /// Generic build error
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Add a file path to the error context.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Add a helpful hint to the error context.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Convert to a custom error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_error_entry_not_found() {
        let err = BuildError::EntryNotFound(PathBuf::from("src/_standalone/banner/embed.ts"));
        let msg = err.to_string();
        assert!(msg.contains("src/_standalone/banner/embed.ts"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_build_error_bundler_failed() {
        let err = BuildError::BundlerFailed {
            component: "widget".to_string(),
            message: "exit status 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("widget"));
        assert!(msg.contains("exit status 1"));
    }

    #[test]
    fn test_build_error_batch_failed() {
        let err = BuildError::BatchFailed {
            failed: 2,
            total: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("2 of 5"));
        assert!(msg.contains("kept on disk"));
    }

    #[test]
    fn test_config_error_invalid() {
        let err = ConfigError::Invalid("expected a map for `alias`".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Invalid project configuration"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let config_err = ConfigError::Invalid("bad".to_string());
        let cli_err: CliError = config_err.into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_cli_error_from_build_error() {
        let build_err = BuildError::EntryNotFound(PathBuf::from("embed.ts"));
        let cli_err: CliError = build_err.into();
        assert!(matches!(cli_err, CliError::Build(_)));
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/standalone.config.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::Invalid("bad field".to_string()));

        let err = result.with_hint("Remove the field").unwrap_err();
        assert!(err.to_string().contains("Hint: Remove the field"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::Invalid("bad field".to_string()));

        let err = result.context("Failed to load base configuration").unwrap_err();
        assert!(err.to_string().contains("Failed to load base configuration"));
    }
}
