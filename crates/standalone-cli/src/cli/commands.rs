use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build standalone components
    ///
    /// Discovers component entry modules under the source directory and
    /// bundles each selected component into its own self-contained script.
    Build(BuildArgs),

    /// Scaffold a new standalone component
    ///
    /// Generates a component directory with an entry module and a starter
    /// Svelte component under the source directory.
    Create(CreateArgs),
}

/// Arguments for the build command
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Build for production
    ///
    /// Enables minification, debug-call stripping, dead-code elimination,
    /// and the per-component build-size report.
    #[arg(short, long)]
    pub production: bool,

    /// Build all standalone components without prompting
    #[arg(short, long)]
    pub all: bool,

    /// Exclude "runtime" styles sharing and bundle shared styles directly
    /// into the selected components
    #[arg(long)]
    pub strip_runtime: bool,

    /// Inline imported assets into each bundle instead of emitting
    /// separate asset files
    #[arg(long)]
    pub inject_assets: bool,

    /// Set the bundler mode
    ///
    /// Defaults to the mode in standalone.config.json, if any.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Directory containing standalone component directories
    #[arg(short, long, default_value = "src/_standalone", value_name = "DIR")]
    pub source: PathBuf,

    /// Output directory for built bundles
    #[arg(short, long, default_value = "static/dist", value_name = "DIR")]
    pub target: PathBuf,
}

/// Arguments for the create command
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Component name
    ///
    /// If omitted, an interactive prompt asks for it.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Directory to scaffold the component under
    #[arg(short, long, default_value = "src/_standalone", value_name = "DIR")]
    pub source: PathBuf,
}
