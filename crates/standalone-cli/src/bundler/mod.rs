//! External bundler boundary.
//!
//! The core never bundles anything itself; it hands fully synthesized
//! configurations to an implementation of the [`Bundler`] trait. Production
//! use drives Vite as a subprocess ([`ViteBundler`]); tests substitute a
//! recording mock.
//!
//! [`run_batch`] is the fan-out point: every build in the batch is issued
//! together, without throttling or a concurrency cap, and awaited as one
//! unit. Outcomes are collected per component so partial-batch results stay
//! observable instead of collapsing into a single failure message.

mod vite;

pub use vite::ViteBundler;

use crate::error::BuildError;
use crate::synth::BundleConfig;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

/// The underlying bundler's build surface.
#[async_trait]
pub trait Bundler: Send + Sync {
    /// Run one isolated build for a fully synthesized configuration.
    async fn build(&self, config: &BundleConfig) -> Result<(), BuildError>;
}

/// Terminal state of one component's build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
    Success,
    Failure(String),
}

/// Per-component result of a batch build.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// Normalized component name.
    pub component: String,
    entry_file_name: String,
    status: BuildStatus,
}

impl BuildOutcome {
    pub fn is_success(&self) -> bool {
        self.status == BuildStatus::Success
    }

    /// The bundle's entry file name, `<name>.min.js`.
    pub fn entry_file_name(&self) -> &str {
        &self.entry_file_name
    }

    /// The failure reason, if the build failed.
    pub fn failure_reason(&self) -> Option<&str> {
        match &self.status {
            BuildStatus::Success => None,
            BuildStatus::Failure(reason) => Some(reason),
        }
    }
}

/// Aggregated outcomes of one batch, in issue order.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    outcomes: Vec<BuildOutcome>,
}

impl BuildReport {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_success()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    pub fn successes(&self) -> impl Iterator<Item = &BuildOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &BuildOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn outcomes(&self) -> &[BuildOutcome] {
        &self.outcomes
    }
}

/// Issue every build in the batch concurrently and await them as one unit.
///
/// There is no rollback: a failing sibling does not cancel builds already
/// running, and bundles that completed stay on disk. The report records one
/// outcome per issued configuration, in the order they were issued.
pub async fn run_batch(configs: Vec<BundleConfig>, bundler: Arc<dyn Bundler>) -> BuildReport {
    let handles: Vec<_> = configs
        .into_iter()
        .map(|config| {
            let bundler = Arc::clone(&bundler);
            tokio::spawn(async move {
                let component = config.component.clone();
                let entry_file_name = config.build.entry_file_names.clone();
                debug!(component, "issuing bundler build");

                let status = match bundler.build(&config).await {
                    Ok(()) => BuildStatus::Success,
                    Err(e) => {
                        error!(component, error = %e, "bundler build failed");
                        BuildStatus::Failure(e.to_string())
                    }
                };

                BuildOutcome {
                    component,
                    entry_file_name,
                    status,
                }
            })
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(outcome) => outcomes.push(outcome),
            Err(join_err) => outcomes.push(BuildOutcome {
                component: "<unknown>".to_string(),
                entry_file_name: String::new(),
                status: BuildStatus::Failure(format!("build task panicked: {}", join_err)),
            }),
        }
    }

    BuildReport { outcomes }
}
