//! Command implementations.
//!
//! Each CLI subcommand maps to one module with an async `execute` entry
//! point taking its parsed arguments.

pub mod build;
pub mod create;
pub mod templates;
pub mod utils;
