//! Bundler configuration synthesis.
//!
//! Turns one discovered component plus the invocation-wide flags into a
//! complete, self-contained bundler configuration. The synthesized
//! [`BundleConfig`] is an immutable value: it is created fresh per component
//! per invocation, serialized as-is for the bundler boundary, and never
//! mutated after creation.
//!
//! Production-only passes are modeled as a declarative list of
//! [`OptimizationStage`]s keyed off the production flag rather than inline
//! branching, so the chain is testable stage by stage.

use crate::component::ComponentEntry;
use crate::config::{normalize_aliases, BaseConfig};
use crate::css::{self, CssScope};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Fixed naming scheme for secondary chunks.
const CHUNK_FILE_NAMES: &str = "chunks/[name].[hash].js";

/// Fixed naming scheme for emitted assets.
const ASSET_FILE_NAMES: &str = "assets/[name][extname]";

/// Immutable per-invocation build flags.
#[derive(Debug, Clone)]
pub struct BuildFlags {
    /// Enable minification, the size report, and the production-only
    /// optimization stages.
    pub production: bool,
    /// Inline imported assets into the bundle instead of emitting files.
    pub inject_assets: bool,
    /// Opt out of shared-runtime style sharing; shared content is bundled
    /// directly into every selected component.
    pub strip_runtime: bool,
    /// Working mode handed to the bundler; `None` defers to the project
    /// default.
    pub mode: Option<String>,
    /// Component source directory, relative to the project root.
    pub input_dir: PathBuf,
    /// Bundle output directory, relative to the project root.
    pub output_dir: PathBuf,
}

/// CSS processing settings for one component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssSettings {
    /// Purge configuration; `None` when the utility-framework integration
    /// replaces purging for the whole project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purge: Option<PurgeSettings>,
    /// Run cssnano after purging.
    pub cssnano: bool,
}

/// PurgeCSS configuration derived from a [`CssScope`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeSettings {
    /// Globs of sources considered live for this component.
    pub content: Vec<String>,
    /// Selector patterns exempted from purging.
    pub safelist: Vec<String>,
    /// File extensions handed to the extractor.
    pub extensions: Vec<String>,
}

/// Compiler plugin chain settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginChain {
    /// Deterministic CSS class-hash prefix seeded by the component name.
    pub css_hash_prefix: String,
    /// Build-size report output; only produced for release builds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualizer: Option<VisualizerSettings>,
    /// Bundle compiled styles into the script instead of emitting a
    /// separate CSS file.
    pub lib_inject_css: bool,
    /// Substitute the utility-framework integration plugin.
    pub tailwind: bool,
}

/// Build-size report settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizerSettings {
    /// Report file, `<target>/visualizer/<relative-dir>.status.html`.
    pub filename: PathBuf,
    /// Human-readable report title.
    pub title: String,
}

/// Output naming and placement for one bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSettings {
    /// Output module formats; a single broadly-compatible format loadable
    /// from a plain script tag.
    pub formats: Vec<String>,
    /// Global name exposed by the bundle.
    pub name: String,
    /// Base file name for the bundle.
    pub file_name: String,
    /// Absolute output directory.
    pub out_dir: PathBuf,
    /// Entry file name, `<name>.min.js`.
    pub entry_file_names: String,
    /// Secondary chunk naming scheme.
    pub chunk_file_names: String,
    /// Asset naming scheme.
    pub asset_file_names: String,
    /// Minify the output.
    pub minify: bool,
    /// Never wipe the shared output directory; sibling bundles land next to
    /// each other.
    pub empty_out_dir: bool,
    /// Inline every imported asset when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_inline_limit: Option<u32>,
}

/// One stage of the rollup-side pipeline.
///
/// The stage list is assembled declaratively: resolution always runs, the
/// debug-strip and minifier stages join only in production.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stage", rename_all = "camelCase")]
pub enum OptimizationStage {
    /// Node-style module resolution tuned for browser bundles.
    #[serde(rename_all = "camelCase")]
    NodeResolve {
        browser: bool,
        dedupe: Vec<String>,
    },
    /// Strip debug and assertion calls before minification.
    #[serde(rename_all = "camelCase")]
    StripDebug { functions: Vec<String> },
    /// Minify with dead-code elimination and console-call removal.
    #[serde(rename_all = "camelCase")]
    Terser {
        drop_console: bool,
        unused: bool,
        reduce_vars: bool,
        pure_funcs: Vec<String>,
        comments: bool,
    },
}

/// A fully synthesized bundler configuration for one component.
///
/// Owned by the orchestrator until handed to the bundler call; never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleConfig {
    /// Normalized component name.
    pub component: String,
    /// Absolute path to the entry file.
    pub entry: PathBuf,
    /// Project root all relative settings were resolved against.
    pub root: PathBuf,
    pub css: CssSettings,
    pub plugins: PluginChain,
    pub build: OutputSettings,
    pub optimizations: Vec<OptimizationStage>,
    /// Merged path alias table.
    pub alias: BTreeMap<String, PathBuf>,
    /// Working mode passed through from the base configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_prefix: Option<Vec<String>>,
    pub define: BTreeMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_dir: Option<PathBuf>,
    /// Always false: the synthesized configuration entirely supersedes any
    /// on-disk bundler default.
    pub config_file: bool,
}

/// Synthesizes one [`BundleConfig`] per component from the invocation-wide
/// inputs.
///
/// All inputs are fixed before the first `synthesize` call; the runtime
/// policy in particular is computed once for the whole batch and shared
/// read-only here.
#[derive(Debug)]
pub struct Synthesizer<'a> {
    root: &'a Path,
    flags: &'a BuildFlags,
    has_runtime: bool,
    base: Option<&'a BaseConfig>,
    tailwind: bool,
    alias_override: BTreeMap<String, String>,
}

impl<'a> Synthesizer<'a> {
    pub fn new(
        root: &'a Path,
        flags: &'a BuildFlags,
        has_runtime: bool,
        base: Option<&'a BaseConfig>,
        tailwind: bool,
    ) -> Self {
        Self {
            root,
            flags,
            has_runtime,
            base,
            tailwind,
            alias_override: BTreeMap::new(),
        }
    }

    /// Supply caller aliases that win over the base configuration on key
    /// collision.
    pub fn with_alias_override(mut self, alias_override: BTreeMap<String, String>) -> Self {
        self.alias_override = alias_override;
        self
    }

    /// Synthesize the complete bundler configuration for one component.
    pub fn synthesize(&self, component: &ComponentEntry) -> BundleConfig {
        let purge_dir = component
            .entry
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.to_path_buf());

        BundleConfig {
            component: component.name.clone(),
            entry: component.entry.clone(),
            root: self.root.to_path_buf(),
            css: self.css_settings(component, &purge_dir),
            plugins: self.plugin_chain(component, &purge_dir),
            build: self.output_settings(component),
            optimizations: optimization_stages(self.flags.production),
            alias: self.merged_aliases(),
            mode: self.effective_mode(),
            env_prefix: self.base.and_then(|b| b.env_prefix.clone()),
            define: self.base.map(|b| b.define.clone()).unwrap_or_default(),
            env_dir: self.base.and_then(|b| b.env_dir.clone()),
            config_file: false,
        }
    }

    fn css_settings(&self, component: &ComponentEntry, purge_dir: &Path) -> CssSettings {
        if self.tailwind {
            return CssSettings {
                purge: None,
                cssnano: false,
            };
        }

        let scope: CssScope =
            css::resolve_scope(self.root, purge_dir, component, self.has_runtime);

        CssSettings {
            purge: Some(PurgeSettings {
                content: scope.content,
                safelist: vec![scope.safelist.as_str().to_string()],
                extensions: vec![
                    "svelte".to_string(),
                    "js".to_string(),
                    "ts".to_string(),
                    "css".to_string(),
                ],
            }),
            cssnano: true,
        }
    }

    fn plugin_chain(&self, component: &ComponentEntry, purge_dir: &Path) -> PluginChain {
        PluginChain {
            css_hash_prefix: css::scoped_class_prefix(&component.name),
            visualizer: self.visualizer_settings(component, purge_dir),
            lib_inject_css: true,
            tailwind: self.tailwind,
        }
    }

    /// The size report is only worth producing for release builds; `None`
    /// fully disables the report step.
    fn visualizer_settings(
        &self,
        component: &ComponentEntry,
        purge_dir: &Path,
    ) -> Option<VisualizerSettings> {
        if !self.flags.production {
            return None;
        }

        let input_root = self.root.join(&self.flags.input_dir);
        let relative = purge_dir
            .strip_prefix(&input_root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| PathBuf::from(&component.raw_name));

        let filename = self
            .root
            .join(&self.flags.output_dir)
            .join("visualizer")
            .join(format!(
                "{}.status.html",
                relative.to_string_lossy().replace('\\', "/")
            ));

        Some(VisualizerSettings {
            filename,
            title: format!("{} status", component.name),
        })
    }

    fn output_settings(&self, component: &ComponentEntry) -> OutputSettings {
        OutputSettings {
            formats: vec!["umd".to_string()],
            name: component.name.clone(),
            file_name: component.name.clone(),
            out_dir: self.root.join(&self.flags.output_dir),
            entry_file_names: format!("{}.min.js", component.name),
            chunk_file_names: CHUNK_FILE_NAMES.to_string(),
            asset_file_names: ASSET_FILE_NAMES.to_string(),
            minify: self.flags.production,
            empty_out_dir: false,
            assets_inline_limit: self.flags.inject_assets.then_some(u32::MAX),
        }
    }

    fn merged_aliases(&self) -> BTreeMap<String, PathBuf> {
        let mut merged = self
            .base
            .map(|b| normalize_aliases(&b.alias, self.root))
            .unwrap_or_default();

        // Caller override wins on key collision.
        merged.extend(normalize_aliases(&self.alias_override, self.root));
        merged
    }

    fn effective_mode(&self) -> Option<String> {
        self.flags
            .mode
            .clone()
            .or_else(|| self.base.and_then(|b| b.mode.clone()))
    }
}

/// Assemble the declarative pipeline stage list for the given mode.
pub fn optimization_stages(production: bool) -> Vec<OptimizationStage> {
    let mut stages = vec![OptimizationStage::NodeResolve {
        browser: true,
        dedupe: vec!["svelte".to_string()],
    }];

    if production {
        stages.push(OptimizationStage::StripDebug {
            functions: vec![
                "console.log".to_string(),
                "console.warn".to_string(),
                "console.error".to_string(),
                "assert.*".to_string(),
            ],
        });
        stages.push(OptimizationStage::Terser {
            drop_console: true,
            unused: true,
            reduce_vars: true,
            pure_funcs: vec!["console.debug".to_string(), "debug".to_string()],
            comments: false,
        });
    }

    stages
}
