//! Shared utilities for command implementations.

use crate::error::{BuildError, CliError, Result};
use crate::ui;
use std::fs;
use std::path::{Path, PathBuf};

/// Walks up the directory tree to find the nearest package.json.
///
/// Returns the containing directory, or `None` when the filesystem root is
/// reached without a match.
pub fn find_package_json(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let manifest = current.join("package.json");
        if manifest.is_file() {
            return Some(current.to_path_buf());
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Resolve the project root: the nearest directory with a package.json,
/// falling back to the current directory with a warning.
pub fn resolve_project_root() -> Result<PathBuf> {
    let current_dir = std::env::current_dir().map_err(CliError::Io)?;

    if let Some(package_root) = find_package_json(&current_dir) {
        return Ok(package_root);
    }

    ui::warning(&format!(
        "No package.json found. Using current directory: {}",
        current_dir.display()
    ));

    Ok(current_dir)
}

/// Ensure an output directory exists, creating it if necessary.
pub fn ensure_output_dir(out_dir: &Path) -> Result<()> {
    if !out_dir.exists() {
        fs::create_dir_all(out_dir)?;
    } else if !out_dir.is_dir() {
        return Err(BuildError::OutputNotWritable(out_dir.to_path_buf()).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_find_package_json_in_current_dir() {
        let temp = TempDir::new().unwrap();
        File::create(temp.path().join("package.json")).unwrap();

        let result = find_package_json(temp.path());
        assert_eq!(result, Some(temp.path().to_path_buf()));
    }

    #[test]
    fn test_find_package_json_walks_up() {
        let temp = TempDir::new().unwrap();
        File::create(temp.path().join("package.json")).unwrap();

        let nested = temp.path().join("src").join("_standalone");
        fs::create_dir_all(&nested).unwrap();

        let result = find_package_json(&nested);
        assert_eq!(result, Some(temp.path().to_path_buf()));
    }

    #[test]
    fn test_find_package_json_stops_at_nearest() {
        let temp = TempDir::new().unwrap();
        File::create(temp.path().join("package.json")).unwrap();

        let nested = temp.path().join("packages").join("app");
        fs::create_dir_all(&nested).unwrap();
        File::create(nested.join("package.json")).unwrap();

        let result = find_package_json(&nested);
        assert_eq!(result, Some(nested));
    }

    #[test]
    fn test_ensure_output_dir_creates() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("static").join("dist");

        ensure_output_dir(&out_dir).unwrap();
        assert!(out_dir.is_dir());
    }

    #[test]
    fn test_ensure_output_dir_existing_ok() {
        let temp = TempDir::new().unwrap();
        ensure_output_dir(temp.path()).unwrap();
    }

    #[test]
    fn test_ensure_output_dir_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("dist");
        File::create(&file_path).unwrap();

        let result = ensure_output_dir(&file_path);
        assert!(matches!(
            result.unwrap_err(),
            CliError::Build(BuildError::OutputNotWritable(_))
        ));
    }
}
