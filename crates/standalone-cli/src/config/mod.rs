//! Project base configuration.
//!
//! Standalone builds stay consistent with the rest of the host project's
//! build semantics by passing through project-wide settings (path aliases,
//! environment prefix and definitions, environment directory, active mode)
//! into every synthesized bundler configuration.
//!
//! The settings come from `standalone.config.json` at the project root,
//! optionally overridden by `STANDALONE_*` environment variables. Loading
//! goes through the [`ProjectConfigSource`] trait so the orchestrator takes
//! the provider as an explicit collaborator instead of hidden process-wide
//! state, and tests can substitute a fixed configuration.

mod loading;
mod types;

pub use loading::{FileConfigSource, ProjectConfigSource, CONFIG_FILE_NAME};
pub use types::{normalize_aliases, BaseConfig};
