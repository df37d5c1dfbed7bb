//! Base configuration types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Project-wide build settings passed through to every synthesized bundler
/// configuration.
///
/// All fields are optional; an absent config file is equivalent to every
/// field being empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BaseConfig {
    /// Path alias table. Keys and values may carry a trailing `/*` in the
    /// tsconfig style; [`normalize_aliases`] strips it and resolves relative
    /// targets against the project root.
    #[serde(default)]
    pub alias: BTreeMap<String, String>,

    /// Prefixes of environment variables exposed to bundled code.
    ///
    /// The snake_case aliases keep the figment env provider (`STANDALONE_*`
    /// variables) mapping onto the same fields as the camelCase JSON keys.
    #[serde(default, alias = "env_prefix", skip_serializing_if = "Option::is_none")]
    pub env_prefix: Option<Vec<String>>,

    /// Compile-time constant definitions, forwarded verbatim.
    #[serde(default)]
    pub define: BTreeMap<String, serde_json::Value>,

    /// Directory the bundler loads `.env` files from.
    #[serde(default, alias = "env_dir", skip_serializing_if = "Option::is_none")]
    pub env_dir: Option<PathBuf>,

    /// Default working mode, overridable per invocation with `--mode`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Normalize an alias table for bundler consumption.
///
/// Strips a trailing `/*` from keys and values and resolves relative targets
/// against `root`. Absolute targets are kept as-is.
pub fn normalize_aliases(
    alias: &BTreeMap<String, String>,
    root: &Path,
) -> BTreeMap<String, PathBuf> {
    alias
        .iter()
        .map(|(key, value)| {
            let key = key.trim_end_matches("/*").to_string();
            let value = value.trim_end_matches("/*");
            let target = Path::new(value);
            let resolved = if target.is_absolute() {
                target.to_path_buf()
            } else {
                root.join(target)
            };
            (key, resolved)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_aliases_strips_wildcard_suffix() {
        let mut alias = BTreeMap::new();
        alias.insert("$lib/*".to_string(), "src/lib/*".to_string());

        let normalized = normalize_aliases(&alias, Path::new("/proj"));
        assert_eq!(normalized["$lib"], PathBuf::from("/proj/src/lib"));
    }

    #[test]
    fn test_normalize_aliases_resolves_relative_against_root() {
        let mut alias = BTreeMap::new();
        alias.insert("@shared".to_string(), "src/shared".to_string());

        let normalized = normalize_aliases(&alias, Path::new("/proj"));
        assert_eq!(normalized["@shared"], PathBuf::from("/proj/src/shared"));
    }

    #[test]
    fn test_normalize_aliases_keeps_absolute_targets() {
        let mut alias = BTreeMap::new();
        alias.insert("@abs".to_string(), "/elsewhere/lib".to_string());

        let normalized = normalize_aliases(&alias, Path::new("/proj"));
        assert_eq!(normalized["@abs"], PathBuf::from("/elsewhere/lib"));
    }

    #[test]
    fn test_base_config_deserializes_camel_case() {
        let raw = r#"{
            "alias": { "$lib": "src/lib" },
            "envPrefix": ["VITE_", "PUBLIC_"],
            "define": { "__APP_VERSION__": "\"1.0.0\"" },
            "envDir": "env",
            "mode": "staging"
        }"#;

        let config: BaseConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.alias["$lib"], "src/lib");
        assert_eq!(
            config.env_prefix,
            Some(vec!["VITE_".to_string(), "PUBLIC_".to_string()])
        );
        assert_eq!(config.env_dir, Some(PathBuf::from("env")));
        assert_eq!(config.mode.as_deref(), Some("staging"));
    }

    #[test]
    fn test_base_config_all_fields_optional() {
        let config: BaseConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BaseConfig::default());
    }
}
