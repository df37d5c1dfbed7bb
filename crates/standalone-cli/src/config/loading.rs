//! Base configuration loading.

use crate::config::BaseConfig;
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Json},
    Figment,
};
use std::path::Path;
use tracing::debug;

/// Name of the project configuration file, looked up at the project root.
pub const CONFIG_FILE_NAME: &str = "standalone.config.json";

/// Provider of the externally loaded base configuration.
///
/// Invoked exactly once at the start of each build invocation; the result is
/// shared read-only across every component in the batch.
pub trait ProjectConfigSource {
    /// Load the base configuration for `root`.
    ///
    /// `mode` is the working mode requested on the command line; providers
    /// may use it to fill an unset mode. Returns `Ok(None)` when the project
    /// has no configuration file.
    ///
    /// # Errors
    ///
    /// A configuration file that exists but cannot be parsed is fatal.
    fn load(&self, mode: Option<&str>, root: &Path) -> Result<Option<BaseConfig>>;
}

/// Loads `standalone.config.json` from the project root, merged with
/// `STANDALONE_*` environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileConfigSource;

impl ProjectConfigSource for FileConfigSource {
    fn load(&self, mode: Option<&str>, root: &Path) -> Result<Option<BaseConfig>> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!("no {} at {}", CONFIG_FILE_NAME, root.display());
            return Ok(None);
        }

        let mut config: BaseConfig = Figment::new()
            .merge(Json::file(&path))
            .merge(Env::prefixed("STANDALONE_"))
            .extract()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        // The command-line mode wins; the file only supplies a default.
        if let Some(mode) = mode {
            config.mode = Some(mode.to_string());
        }

        debug!(?config, "loaded base configuration");
        Ok(Some(config))
    }
}
