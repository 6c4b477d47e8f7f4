//! Configuration file support
//!
//! Loads project-specific configuration from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.wrapcheckrc.json` in the linted root
//! 3. `wrapcheck.config.json` in the linted root
//!
//! All fields are optional. A missing config file means defaults.

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Default exclude patterns applied when the config specifies none
const DEFAULT_EXCLUDES: &[&str] = &[
    "**/*.d.ts",
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
];

/// Wrapcheck configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WrapcheckConfig {
    /// Glob patterns for files to include (default: all supported extensions)
    #[serde(default)]
    pub include: Vec<String>,

    /// Glob patterns for files to exclude (default: declaration files,
    /// node_modules, dist, build)
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Per-rule enablement overriding the recommended set,
    /// e.g. `{ "no-ternary-wrappers": false }`
    #[serde(default)]
    pub rules: BTreeMap<String, bool>,
}

impl WrapcheckConfig {
    /// Load configuration, searching the standard locations
    ///
    /// An explicit path must exist and parse; discovered files must parse
    /// if present. With nothing found, defaults apply.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for candidate in [".wrapcheckrc.json", "wrapcheck.config.json"] {
            let path = root.join(candidate);
            if path.is_file() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load and parse a single config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Whether a rule should run, given its recommended default
    pub fn rule_enabled(&self, name: &str, recommended: bool) -> bool {
        self.rules.get(name).copied().unwrap_or(recommended)
    }

    /// Build the file filter implied by this config
    pub fn file_filter(&self) -> Result<FileFilter> {
        let include = if self.include.is_empty() {
            None
        } else {
            Some(build_globset(&self.include).context("Invalid include pattern in config")?)
        };

        let exclude = if self.exclude.is_empty() {
            build_default_excludes()
        } else {
            build_globset(&self.exclude).context("Invalid exclude pattern in config")?
        };

        Ok(FileFilter { include, exclude })
    }
}

/// Compiled include/exclude glob matching for source files
#[derive(Debug, Clone)]
pub struct FileFilter {
    include: Option<GlobSet>,
    exclude: GlobSet,
}

impl FileFilter {
    /// Whether a path survives the include/exclude globs
    pub fn matches(&self, path: &Path) -> bool {
        if self.exclude.is_match(path) {
            return false;
        }
        match &self.include {
            Some(include) => include.is_match(path),
            None => true,
        }
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).with_context(|| format!("Invalid glob: {}", pattern))?);
    }
    Ok(builder.build()?)
}

fn build_default_excludes() -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_EXCLUDES {
        // Patterns are static and known-valid
        builder.add(Glob::new(pattern).expect("default exclude pattern is valid"));
    }
    builder.build().expect("default exclude set is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_excludes_declarations_and_deps() {
        let filter = WrapcheckConfig::default().file_filter().unwrap();
        assert!(filter.matches(&PathBuf::from("src/app.ts")));
        assert!(!filter.matches(&PathBuf::from("src/app.d.ts")));
        assert!(!filter.matches(&PathBuf::from("node_modules/pkg/index.js")));
        assert!(!filter.matches(&PathBuf::from("dist/bundle.js")));
    }

    #[test]
    fn test_include_narrows_selection() {
        let config = WrapcheckConfig {
            include: vec!["src/**/*.ts".to_string()],
            ..Default::default()
        };
        let filter = config.file_filter().unwrap();
        assert!(filter.matches(&PathBuf::from("src/app.ts")));
        assert!(!filter.matches(&PathBuf::from("lib/app.ts")));
    }

    #[test]
    fn test_explicit_exclude_replaces_defaults() {
        let config = WrapcheckConfig {
            exclude: vec!["**/generated/**".to_string()],
            ..Default::default()
        };
        let filter = config.file_filter().unwrap();
        assert!(!filter.matches(&PathBuf::from("src/generated/api.ts")));
        // Defaults no longer apply once the config names its own excludes
        assert!(filter.matches(&PathBuf::from("dist/bundle.js")));
    }

    #[test]
    fn test_rule_enablement_defaults_to_recommended() {
        let config = WrapcheckConfig::default();
        assert!(config.rule_enabled("no-ternary-wrappers", true));
        assert!(!config.rule_enabled("hypothetical-rule", false));
    }

    #[test]
    fn test_rule_enablement_override() {
        let config: WrapcheckConfig =
            serde_json::from_str(r#"{ "rules": { "no-ternary-wrappers": false } }"#).unwrap();
        assert!(!config.rule_enabled("no-ternary-wrappers", true));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let parsed: Result<WrapcheckConfig, _> =
            serde_json::from_str(r#"{ "includes": ["src/**"] }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_load_missing_explicit_path_errors() {
        let missing = PathBuf::from("/nonexistent/wrapcheck.json");
        assert!(WrapcheckConfig::load(Some(&missing), &PathBuf::from(".")).is_err());
    }
}
