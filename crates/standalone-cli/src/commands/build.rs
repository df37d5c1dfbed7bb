//! Build command: discover, select, synthesize, and bundle components.
//!
//! One invocation is a batch: the runtime policy and base configuration are
//! fixed up front, every selected component gets its own synthesized bundler
//! configuration, and all builds are issued concurrently. Delivery is
//! best-effort: a failing component never discards sibling bundles, and the
//! process exits non-zero only after the whole batch has been reported.

use crate::bundler::{self, Bundler, ViteBundler};
use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::component::{self, ComponentEntry};
use crate::config::{FileConfigSource, ProjectConfigSource};
use crate::css;
use crate::error::{BuildError, Result};
use crate::synth::{BuildFlags, BundleConfig, Synthesizer};
use crate::ui;
use inquire::{InquireError, MultiSelect};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Execute the build command against the real project configuration and the
/// Vite subprocess bundler.
pub async fn execute(args: BuildArgs) -> Result<()> {
    let root = utils::resolve_project_root()?;
    debug!(root = %root.display(), "resolved project root");
    execute_in(&root, args, &FileConfigSource, Arc::new(ViteBundler::new())).await
}

/// Execute the build command for a known project root with injected
/// collaborators.
///
/// The configuration source and bundler are the two external boundaries of
/// the command; tests substitute in-memory implementations for both.
pub async fn execute_in(
    root: &Path,
    args: BuildArgs,
    config_source: &dyn ProjectConfigSource,
    bundler: Arc<dyn Bundler>,
) -> Result<()> {
    let start = Instant::now();

    let source_dir = root.join(&args.source);
    let entries = component::discover(&source_dir);
    if entries.is_empty() {
        ui::warning(&format!(
            "No standalone components found under {}. Create one with: standalone create",
            source_dir.display()
        ));
        return Ok(());
    }

    if args.strip_runtime {
        ui::info("Including shared styles in all components");
    }

    // Fixed for the whole batch before any selection happens.
    let has_runtime = component::has_runtime(&entries, args.strip_runtime);

    let selected = if args.all {
        entries
    } else {
        match select_components(entries)? {
            Some(selected) => selected,
            None => return Ok(()),
        }
    };

    if selected.is_empty() {
        ui::warning("No components selected; nothing to build");
        return Ok(());
    }

    let spinner = ui::Spinner::new("Loading project configuration...");
    let base = match config_source.load(args.mode.as_deref(), root) {
        Ok(base) => {
            spinner.finish(if base.is_some() {
                "Project configuration loaded"
            } else {
                "No project configuration; using defaults"
            });
            base
        }
        Err(e) => {
            spinner.fail("Failed to load project configuration");
            return Err(e);
        }
    };

    let tailwind = css::detect_tailwind(root);
    if tailwind {
        ui::info("Tailwind CSS detected; skipping style purging");
    }

    let flags = BuildFlags {
        production: args.production,
        inject_assets: args.inject_assets,
        strip_runtime: args.strip_runtime,
        mode: args.mode.clone(),
        input_dir: args.source.clone(),
        output_dir: args.target.clone(),
    };

    let synthesizer = Synthesizer::new(root, &flags, has_runtime, base.as_ref(), tailwind);
    let configs: Vec<BundleConfig> = selected.iter().map(|c| synthesizer.synthesize(c)).collect();

    utils::ensure_output_dir(&root.join(&args.target))?;

    info!(
        count = configs.len(),
        production = args.production,
        "starting batch build"
    );
    ui::info(&format!(
        "Building {} component{}{}",
        configs.len(),
        if configs.len() == 1 { "" } else { "s" },
        if args.production { " (production)" } else { "" }
    ));

    let report = bundler::run_batch(configs, bundler).await;
    ui::print_build_report(&report, start.elapsed());

    if report.has_failures() {
        return Err(BuildError::BatchFailed {
            failed: report.failed_count(),
            total: report.len(),
        }
        .into());
    }

    Ok(())
}

/// Interactively pick the components to build, all pre-selected.
///
/// Returns `None` when the user cancels the prompt; cancellation is a normal
/// exit, not an error.
fn select_components(entries: Vec<ComponentEntry>) -> Result<Option<Vec<ComponentEntry>>> {
    let names: Vec<String> = entries.iter().map(|c| c.name.clone()).collect();
    let all_indices: Vec<usize> = (0..names.len()).collect();

    let picked = MultiSelect::new("Which components do you want to build?", names)
        .with_default(&all_indices)
        .prompt();

    match picked {
        Ok(picked) => {
            let picked: Vec<ComponentEntry> = entries
                .into_iter()
                .filter(|c| picked.contains(&c.name))
                .collect();
            Ok(Some(picked))
        }
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
