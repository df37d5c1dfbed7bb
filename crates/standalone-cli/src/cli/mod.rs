//! Command-line interface definition.
//!
//! The complete CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `standalone build` - Bundle selected standalone components
//! - `standalone create` - Scaffold a new standalone component

mod commands;

use clap::Parser;

pub use commands::{BuildArgs, Command, CreateArgs};

/// Standalone - bundle Svelte components into self-contained scripts
#[derive(Parser, Debug)]
#[command(
    name = "standalone",
    version,
    about = "Transform Svelte components into standalone scripts",
    long_about = "Standalone bundles selected Svelte component entry modules into\n\
                  independent, self-contained scripts, each with its own minified\n\
                  output, optional shared-runtime styling, and production-only\n\
                  optimizations."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
