//! Plugin manifest
//!
//! The stable surface a host lint configuration sees: the plugin's name and
//! version, and the metadata of every rule it ships.

use crate::rules::{self, RuleMeta};
use serde::Serialize;

/// Identity of this rule package
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PluginMeta {
    pub name: &'static str,
    pub version: &'static str,
}

/// The manifest for this plugin
pub const PLUGIN: PluginMeta = PluginMeta {
    name: "unnecessary-abstractions",
    version: env!("CARGO_PKG_VERSION"),
};

/// Metadata for every rule the plugin exposes, in deterministic order
pub fn rules() -> &'static [RuleMeta] {
    rules::all_rules()
}

/// Render the plugin identity and rule metadata as JSON
pub fn render_manifest_json() -> String {
    #[derive(Serialize)]
    struct Manifest {
        name: &'static str,
        version: &'static str,
        rules: &'static [RuleMeta],
    }

    serde_json::to_string_pretty(&Manifest {
        name: PLUGIN.name,
        version: PLUGIN.version,
        rules: rules(),
    })
    .unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_identity() {
        assert_eq!(PLUGIN.name, "unnecessary-abstractions");
        assert_eq!(PLUGIN.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_rules_listed_once() {
        let names: Vec<&str> = rules().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["no-ternary-wrappers"]);
    }

    #[test]
    fn test_manifest_json_shape() {
        let json = render_manifest_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "unnecessary-abstractions");
        assert_eq!(value["rules"][0]["name"], "no-ternary-wrappers");
        assert_eq!(value["rules"][0]["kind"], "suggestion");
    }
}
