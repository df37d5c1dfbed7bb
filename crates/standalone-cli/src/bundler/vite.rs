//! Vite subprocess driver.
//!
//! Each build writes the synthesized [`BundleConfig`] as JSON next to an
//! embedded JavaScript shim config, then spawns `npx vite build --config`
//! pointed at the shim. The shim instantiates the real plugin chain from the
//! JSON; passing `--config` means the synthesized configuration entirely
//! supersedes any `vite.config.*` in the project.

use crate::bundler::Bundler;
use crate::error::BuildError;
use crate::synth::BundleConfig;
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, trace};

/// Shim config instantiating Vite plugins from the serialized BundleConfig.
const VITE_SHIM: &str = include_str!("vite-shim.mjs");

/// Environment variable carrying the path of the serialized config for the
/// shim to read.
const CONFIG_ENV_VAR: &str = "STANDALONE_BUNDLE_CONFIG";

/// Lines of bundler stderr kept in failure messages.
const STDERR_TAIL_LINES: usize = 20;

/// Drives `vite build` as a subprocess, one isolated invocation per
/// component.
#[derive(Debug, Clone, Default)]
pub struct ViteBundler;

impl ViteBundler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Bundler for ViteBundler {
    async fn build(&self, config: &BundleConfig) -> Result<(), BuildError> {
        if !config.entry.is_file() {
            return Err(BuildError::EntryNotFound(config.entry.clone()));
        }

        let staging = tempfile::Builder::new()
            .prefix(&format!("standalone-{}-", config.component))
            .tempdir()
            .map_err(|e| stage_error(config, "create staging directory", &e))?;

        let config_path = staging.path().join("bundle.json");
        let shim_path = staging.path().join("standalone.config.mjs");

        let json = serde_json::to_vec_pretty(config)
            .map_err(|e| stage_error(config, "serialize configuration", &e))?;
        tokio::fs::write(&config_path, json)
            .await
            .map_err(|e| stage_error(config, "write configuration", &e))?;
        tokio::fs::write(&shim_path, VITE_SHIM)
            .await
            .map_err(|e| stage_error(config, "write config shim", &e))?;

        debug!(
            component = config.component,
            shim = %shim_path.display(),
            "spawning vite build"
        );

        let output = vite_command(config, &shim_path, &config_path)
            .output()
            .await
            .map_err(|e| stage_error(config, "spawn vite", &e))?;

        trace!(
            component = config.component,
            status = %output.status,
            "vite build finished"
        );

        if !output.status.success() {
            return Err(BuildError::BundlerFailed {
                component: config.component.clone(),
                message: stderr_tail(&output.stderr),
            });
        }

        Ok(())
    }
}

fn vite_command(
    config: &BundleConfig,
    shim_path: &Path,
    config_path: &Path,
) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new("npx");
    cmd.arg("vite")
        .arg("build")
        .arg("--config")
        .arg(shim_path)
        .current_dir(&config.root)
        .env(CONFIG_ENV_VAR, config_path);

    if let Some(mode) = &config.mode {
        cmd.arg("--mode").arg(mode);
    }

    cmd
}

fn stage_error(config: &BundleConfig, stage: &str, cause: &dyn std::fmt::Display) -> BuildError {
    BuildError::BundlerFailed {
        component: config.component.clone(),
        message: format!("failed to {}: {}", stage, cause),
    }
}

/// Keep only the last lines of stderr; vite failures end with the relevant
/// diagnostic.
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    let tail = lines[start..].join("\n");

    if tail.trim().is_empty() {
        "vite exited with a non-zero status".to_string()
    } else {
        tail
    }
}
