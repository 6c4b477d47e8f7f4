//! Analysis orchestration - ties together parsing, discovery, rules, and diagnostics

use crate::config::WrapcheckConfig;
use crate::diagnostics::Diagnostic;
use crate::discover;
use crate::parser;
use crate::rules;
use anyhow::{Context, Result};
use std::path::Path;
use swc_common::{sync::Lrc, SourceMap};

/// Lint a single TypeScript or JavaScript file
pub fn analyze_file(
    path: &Path,
    source_map: &Lrc<SourceMap>,
    config: &WrapcheckConfig,
) -> Result<Vec<Diagnostic>> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let module = parser::parse_source(&src, source_map, &path.to_string_lossy())?;

    let functions = discover::discover_functions(&module, &src, source_map);

    let mut diagnostics = Vec::new();
    for function in &functions {
        // A preceding `// wrapcheck-ignore` comment silences the function
        if function.suppression_reason.is_some() {
            continue;
        }

        for finding in rules::run_rules(function) {
            let Some(meta) = rules::rule_meta(finding.rule) else {
                continue;
            };
            if !config.rule_enabled(meta.name, meta.recommended) {
                continue;
            }

            diagnostics.push(Diagnostic::new(
                function,
                path.to_string_lossy().to_string(),
                &finding,
                meta.kind.as_str(),
                source_map,
            ));
        }
    }

    Ok(diagnostics)
}
