//! Miette diagnostic conversion for CLI errors.
//!
//! Converts the thiserror hierarchy into miette Reports at the `main`
//! boundary so failures render with the fancy handler.

use crate::error::{BuildError, CliError};
use miette::Report;

/// Convert a CliError to a miette Report.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a BuildError to a miette Report.
fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        BuildError::BundlerFailed { component, message } => {
            miette::miette!(
                "Bundler failed for '{}':\n{}\n\nHint: Re-run with --verbose to see the full bundler output",
                component,
                message
            )
        }
        BuildError::BatchFailed { failed, total } => {
            miette::miette!(
                "{} of {} component builds failed\n\nHint: Successful bundles were kept on disk",
                failed,
                total
            )
        }
        _ => miette::miette!("{}", err),
    }
}
