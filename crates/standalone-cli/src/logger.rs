//! Logging infrastructure built on the `tracing` ecosystem.
//!
//! Supports three verbosity levels (`--verbose`, default, `--quiet`), colored
//! output with a `--no-color` override, and custom filters via the `RUST_LOG`
//! environment variable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Must be called once at the start of the program, before any logging occurs.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for standalone crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("standalone=debug,standalone_cli=debug")
    } else if quiet {
        EnvFilter::new("standalone=error,standalone_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("standalone=info,standalone_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // tracing is global and can only be initialized once per process, so these
    // only verify filter construction.

    #[test]
    fn test_env_filter_verbose() {
        let _filter = EnvFilter::new("standalone=debug,standalone_cli=debug");
    }

    #[test]
    fn test_env_filter_quiet() {
        let _filter = EnvFilter::new("standalone=error,standalone_cli=error");
    }
}
