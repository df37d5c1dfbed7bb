//! CSS purge scoping for standalone components.
//!
//! Each component's bundle is purged against the set of sources considered
//! "live" for it. The scope always covers the component's own subtree; the
//! shared-sources subtree (`src/shared`) is included only when no shared
//! runtime bundle will ship it, or for the runtime component itself (it is
//! the thing that defines the shared styles).
//!
//! The safelist guarantees that the compiler-generated scoped class prefix
//! for a component survives purging even when the static extractor cannot see
//! a reference, e.g. classes applied from dynamic expressions.

use crate::component::{ComponentEntry, ComponentKind};
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Source and style extensions scanned by the purge extractor.
const PURGE_EXTENSIONS: &str = "svelte,ts,js,css";

/// Shared-sources subtree relative to the project root.
const SHARED_SOURCES_DIR: &str = "src/shared";

/// The set of sources live for one component's CSS purge, plus the safelist
/// pattern exempted from purging.
#[derive(Debug, Clone)]
pub struct CssScope {
    /// Glob patterns covering every file the extractor scans for selectors.
    pub content: Vec<String>,
    /// Anchored pattern matching the component's scoped-class prefix.
    pub safelist: Regex,
}

impl CssScope {
    /// True when the safelist exempts the given class name from purging.
    pub fn is_safelisted(&self, class_name: &str) -> bool {
        self.safelist.is_match(class_name)
    }
}

/// The deterministic scoped-class prefix the compiler generates for a
/// component, derived from its normalized, lower-cased name.
pub fn scoped_class_prefix(name: &str) -> String {
    format!("s-{}", name.to_lowercase())
}

/// Compute the purge scope for one component.
///
/// `purge_dir` is the component's containing directory. The shared subtree is
/// appended iff no runtime bundle exists (`!has_runtime`) or the component is
/// the runtime itself.
pub fn resolve_scope(
    root: &Path,
    purge_dir: &Path,
    component: &ComponentEntry,
    has_runtime: bool,
) -> CssScope {
    let mut content = vec![source_glob(purge_dir)];

    if !has_runtime || component.kind == ComponentKind::Runtime {
        content.push(source_glob(&root.join(SHARED_SOURCES_DIR)));
    }

    let pattern = format!("^{}", regex::escape(&scoped_class_prefix(&component.name)));
    let safelist = Regex::new(&pattern).expect("escaped safelist pattern is valid regex");

    CssScope { content, safelist }
}

/// Recursive glob over every compiler-relevant file under `dir`.
///
/// Always uses forward slashes; glob patterns are consumed by the bundler's
/// purge extractor, which does not understand platform separators.
fn source_glob(dir: &Path) -> String {
    let base = dir.to_string_lossy().replace('\\', "/");
    format!("{}/**/*.{{{}}}", base.trim_end_matches('/'), PURGE_EXTENSIONS)
}

/// Detect whether the host project uses Tailwind CSS.
///
/// Checks `package.json` at the project root for `tailwindcss` in either
/// dependency table. When Tailwind is present, purging is skipped project-wide:
/// its own generation mechanism already emits only the classes in use, and
/// the tailwind integration plugin is substituted in the plugin chain.
pub fn detect_tailwind(root: &Path) -> bool {
    let manifest = root.join("package.json");
    let Ok(raw) = std::fs::read_to_string(&manifest) else {
        debug!("no package.json at {}", manifest.display());
        return false;
    };

    let Ok(pkg) = serde_json::from_str::<serde_json::Value>(&raw) else {
        debug!("unparseable package.json at {}", manifest.display());
        return false;
    };

    ["dependencies", "devDependencies"].iter().any(|table| {
        pkg.get(table)
            .and_then(|deps| deps.get("tailwindcss"))
            .is_some()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{classify, normalize_name};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn entry(raw: &str) -> ComponentEntry {
        ComponentEntry {
            entry: PathBuf::from(format!("/proj/src/_standalone/{}/embed.ts", raw)),
            raw_name: raw.to_string(),
            name: normalize_name(raw).unwrap(),
            kind: classify(raw),
        }
    }

    fn scope_for(raw: &str, has_runtime: bool) -> CssScope {
        let root = Path::new("/proj");
        let component = entry(raw);
        let purge_dir = component.entry.parent().unwrap().to_path_buf();
        resolve_scope(root, &purge_dir, &component, has_runtime)
    }

    #[test]
    fn test_scope_always_includes_own_subtree() {
        let scope = scope_for("banner", true);
        assert_eq!(
            scope.content[0],
            "/proj/src/_standalone/banner/**/*.{svelte,ts,js,css}"
        );
    }

    #[test]
    fn test_regular_component_excludes_shared_when_runtime_exists() {
        let scope = scope_for("banner", true);
        assert_eq!(scope.content.len(), 1);
    }

    #[test]
    fn test_regular_component_includes_shared_without_runtime() {
        let scope = scope_for("banner", false);
        assert_eq!(scope.content.len(), 2);
        assert_eq!(
            scope.content[1],
            "/proj/src/shared/**/*.{svelte,ts,js,css}"
        );
    }

    #[test]
    fn test_runtime_component_always_includes_shared() {
        let scope = scope_for("+runtime", true);
        assert_eq!(scope.content.len(), 2);
        assert!(scope.content[1].contains("src/shared"));
    }

    #[test]
    fn test_safelist_matches_scoped_prefix() {
        let scope = scope_for("Banner", true);
        assert!(scope.is_safelisted("s-banner"));
        assert!(scope.is_safelisted("s-banner-title"));
        assert!(!scope.is_safelisted("x-s-banner"));
        assert!(!scope.is_safelisted("s-widget"));
    }

    #[test]
    fn test_safelist_escapes_regex_metacharacters() {
        let scope = scope_for("menu.v2", true);
        assert!(scope.is_safelisted("s-menu.v2"));
        assert!(!scope.is_safelisted("s-menuxv2"));
    }

    #[test]
    fn test_scoped_class_prefix_lowercases() {
        assert_eq!(scoped_class_prefix("Banner"), "s-banner");
    }

    #[test]
    fn test_detect_tailwind_in_dependencies() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "dependencies": { "tailwindcss": "^4.0.0" } }"#,
        )
        .unwrap();
        assert!(detect_tailwind(temp.path()));
    }

    #[test]
    fn test_detect_tailwind_in_dev_dependencies() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "devDependencies": { "tailwindcss": "^4.0.0" } }"#,
        )
        .unwrap();
        assert!(detect_tailwind(temp.path()));
    }

    #[test]
    fn test_detect_tailwind_absent() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "dependencies": { "svelte": "^5.0.0" } }"#,
        )
        .unwrap();
        assert!(!detect_tailwind(temp.path()));
    }

    #[test]
    fn test_detect_tailwind_missing_manifest() {
        let temp = TempDir::new().unwrap();
        assert!(!detect_tailwind(temp.path()));
    }
}
