//! Standalone component discovery and naming.
//!
//! A standalone component is a directory under the source root (by default
//! `src/_standalone`) containing an `embed.ts` or `embed.js` entry file. The
//! directory name may carry a single leading marker (`+` or `$`) flagging
//! special directories such as the shared runtime; the marker is stripped to
//! obtain the canonical component name.
//!
//! Classification into `Regular` and `Runtime` happens once here, at
//! discovery time; every later stage reads the tag instead of re-matching
//! name patterns.

use crate::ui;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Entry file names recognized inside a component directory, in match order.
const ENTRY_FILE_NAMES: &[&str] = &["embed.ts", "embed.js"];

/// Leading marker characters stripped from component directory names.
const NAME_MARKERS: &[char] = &['+', '$'];

/// Classification of a discovered component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// An ordinary standalone component.
    Regular,
    /// The designated component whose bundle carries styles and logic shared
    /// across all other standalone components.
    Runtime,
}

/// A discovered standalone component entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    /// Absolute path to the component's entry file.
    pub entry: PathBuf,
    /// Literal name of the directory containing the entry file.
    pub raw_name: String,
    /// Canonical name: `raw_name` with one leading marker stripped.
    pub name: String,
    /// Tagged classification, computed once at discovery.
    pub kind: ComponentKind,
}

impl ComponentEntry {
    /// True for the shared-runtime component.
    pub fn is_runtime(&self) -> bool {
        self.kind == ComponentKind::Runtime
    }
}

/// Derive the canonical component name from a raw directory name.
///
/// Strips exactly one leading marker character (`+` or `$`) if present.
/// Returns `None` when the result is empty, which marks the entry invalid.
///
/// Deterministic and pure; never touches the filesystem.
pub fn normalize_name(raw_name: &str) -> Option<String> {
    let name = match raw_name.strip_prefix(NAME_MARKERS) {
        Some(stripped) => stripped,
        None => raw_name,
    };

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Classify a raw directory name as `Regular` or `Runtime`.
///
/// The runtime convention is an exact match on `runtime`, with or without a
/// leading marker.
pub fn classify(raw_name: &str) -> ComponentKind {
    match raw_name {
        "runtime" | "+runtime" | "$runtime" => ComponentKind::Runtime,
        _ => ComponentKind::Regular,
    }
}

/// Decide, once per invocation, whether a shared runtime bundle exists.
///
/// The `strip_runtime` override always wins: the user is asking for shared
/// content to be inlined into every component instead of shipped separately.
pub fn has_runtime(entries: &[ComponentEntry], strip_runtime: bool) -> bool {
    if strip_runtime {
        return false;
    }

    entries.iter().any(ComponentEntry::is_runtime)
}

/// Discover standalone components under `source_dir`.
///
/// Scans the immediate subdirectories for an entry file, ordered by raw
/// directory name. Entries whose directory name normalizes to the empty
/// string are reported and excluded; the rest of the batch proceeds.
pub fn discover(source_dir: &Path) -> Vec<ComponentEntry> {
    let mut entries = Vec::new();

    if !source_dir.is_dir() {
        debug!("source directory does not exist: {}", source_dir.display());
        return entries;
    }

    let mut dirs: Vec<PathBuf> = walkdir::WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.into_path())
        .collect();
    dirs.sort();

    for dir in dirs {
        let Some(entry_path) = ENTRY_FILE_NAMES
            .iter()
            .map(|f| dir.join(f))
            .find(|p| p.is_file())
        else {
            continue;
        };

        let raw_name = match dir.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };

        let Some(name) = normalize_name(&raw_name) else {
            warn!(
                raw_name,
                entry = %entry_path.display(),
                "skipping component with invalid name"
            );
            ui::warning(&format!(
                "Skipping component with invalid name '{}' ({})",
                raw_name,
                entry_path.display()
            ));
            continue;
        };

        let kind = classify(&raw_name);
        debug!(raw_name, name, ?kind, "discovered component");

        entries.push(ComponentEntry {
            entry: entry_path,
            raw_name,
            name,
            kind,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entry(raw: &str) -> ComponentEntry {
        ComponentEntry {
            entry: PathBuf::from(format!("src/_standalone/{}/embed.ts", raw)),
            raw_name: raw.to_string(),
            name: normalize_name(raw).unwrap(),
            kind: classify(raw),
        }
    }

    #[test]
    fn test_normalize_strips_one_plus_marker() {
        assert_eq!(normalize_name("+runtime"), Some("runtime".to_string()));
        assert_eq!(normalize_name("+widget"), Some("widget".to_string()));
    }

    #[test]
    fn test_normalize_strips_one_sigil_marker() {
        assert_eq!(normalize_name("$runtime"), Some("runtime".to_string()));
    }

    #[test]
    fn test_normalize_strips_only_one_marker() {
        assert_eq!(normalize_name("++nested"), Some("+nested".to_string()));
        assert_eq!(normalize_name("+$mixed"), Some("$mixed".to_string()));
    }

    #[test]
    fn test_normalize_leaves_unmarked_names_unchanged() {
        assert_eq!(normalize_name("banner"), Some("banner".to_string()));
        assert_eq!(normalize_name("my-widget"), Some("my-widget".to_string()));
    }

    #[test]
    fn test_normalize_rejects_empty_results() {
        assert_eq!(normalize_name("+"), None);
        assert_eq!(normalize_name("$"), None);
        assert_eq!(normalize_name(""), None);
    }

    #[test]
    fn test_classify_exact_runtime_names() {
        assert_eq!(classify("runtime"), ComponentKind::Runtime);
        assert_eq!(classify("+runtime"), ComponentKind::Runtime);
        assert_eq!(classify("$runtime"), ComponentKind::Runtime);
    }

    #[test]
    fn test_classify_rejects_partial_matches() {
        assert_eq!(classify("my-runtime"), ComponentKind::Regular);
        assert_eq!(classify("runtime-v2"), ComponentKind::Regular);
        assert_eq!(classify("banner"), ComponentKind::Regular);
    }

    #[test]
    fn test_has_runtime_strip_override_wins() {
        let entries = vec![entry("+runtime"), entry("banner")];
        assert!(!has_runtime(&entries, true));
    }

    #[test]
    fn test_has_runtime_true_with_runtime_component() {
        let entries = vec![entry("banner"), entry("+runtime")];
        assert!(has_runtime(&entries, false));
    }

    #[test]
    fn test_has_runtime_false_without_runtime_component() {
        let entries = vec![entry("banner"), entry("widget")];
        assert!(!has_runtime(&entries, false));
    }

    #[test]
    fn test_discover_finds_components_in_name_order() {
        let temp = TempDir::new().unwrap();
        for (dir, file) in [("widget", "embed.ts"), ("banner", "embed.js")] {
            let d = temp.path().join(dir);
            fs::create_dir_all(&d).unwrap();
            fs::write(d.join(file), "export {};").unwrap();
        }

        let entries = discover(temp.path());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "banner");
        assert_eq!(entries[1].name, "widget");
    }

    #[test]
    fn test_discover_prefers_typescript_entry() {
        let temp = TempDir::new().unwrap();
        let d = temp.path().join("widget");
        fs::create_dir_all(&d).unwrap();
        fs::write(d.join("embed.ts"), "export {};").unwrap();
        fs::write(d.join("embed.js"), "export {};").unwrap();

        let entries = discover(temp.path());
        assert_eq!(entries.len(), 1);
        assert!(entries[0].entry.ends_with("embed.ts"));
    }

    #[test]
    fn test_discover_skips_directories_without_entry() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("not-a-component")).unwrap();
        let d = temp.path().join("widget");
        fs::create_dir_all(&d).unwrap();
        fs::write(d.join("embed.ts"), "export {};").unwrap();

        let entries = discover(temp.path());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "widget");
    }

    #[test]
    fn test_discover_excludes_invalid_names_and_keeps_siblings() {
        let temp = TempDir::new().unwrap();
        for dir in ["+", "banner"] {
            let d = temp.path().join(dir);
            fs::create_dir_all(&d).unwrap();
            fs::write(d.join("embed.ts"), "export {};").unwrap();
        }

        let entries = discover(temp.path());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "banner");
    }

    #[test]
    fn test_discover_missing_source_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let entries = discover(&temp.path().join("does-not-exist"));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_runtime_entry_normalizes_to_runtime() {
        let e = entry("+runtime");
        assert_eq!(e.name, "runtime");
        assert!(e.is_runtime());
    }
}
