//! Bundle Svelte components into standalone, self-contained scripts.
//!
//! The crate splits into a thin CLI shell and a reusable core:
//!
//! - [`cli`] - clap command-line definitions
//! - [`commands`] - subcommand implementations
//! - [`component`] - component discovery and naming
//! - [`config`] - project base-configuration loading
//! - [`css`] - per-component style scoping
//! - [`synth`] - bundler configuration synthesis
//! - [`bundler`] - the external bundler boundary and batch runner
//! - [`error`] - error types and miette conversion
//! - [`ui`] - terminal output helpers

pub mod bundler;
pub mod cli;
pub mod commands;
pub mod component;
pub mod config;
pub mod css;
pub mod error;
pub mod logger;
pub mod synth;
pub mod ui;

pub use error::{BuildError, CliError, ConfigError, Result};
