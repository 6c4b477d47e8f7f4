//! Diagnostic construction and output generation
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Byte-for-byte identical output across runs

use crate::ast::FunctionNode;
use crate::rules::Finding;
use serde::{Deserialize, Serialize};

/// A reported finding, positioned in the source and ready for display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Diagnostic {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub function: String,
    pub rule: String,
    pub severity: String,
    pub message: String,
}

impl Diagnostic {
    /// Build a diagnostic from a rule finding against a function node
    ///
    /// The diagnostic references the function node, not the expression
    /// inside it.
    pub fn new(
        function: &FunctionNode,
        file: String,
        finding: &Finding,
        severity: &'static str,
        source_map: &swc_common::SourceMap,
    ) -> Self {
        let line = function.start_line(source_map);
        let column = function.start_column(source_map);
        let function_name = function.name.clone().unwrap_or_else(|| {
            format!("<anonymous {}>@{}:{}", function.kind.as_str(), file, line)
        });

        Diagnostic {
            file,
            line,
            column,
            function: function_name,
            rule: finding.rule.to_string(),
            severity: severity.to_string(),
            message: finding.message.to_string(),
        }
    }
}

/// Sort diagnostics deterministically
pub fn sort_diagnostics(mut diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
    diagnostics.sort_by(|a, b| {
        // 1. File path ascending
        a.file
            .cmp(&b.file)
            // 2. Line number ascending
            .then_with(|| a.line.cmp(&b.line))
            // 3. Column ascending
            .then_with(|| a.column.cmp(&b.column))
            // 4. Rule name ascending
            .then_with(|| a.rule.cmp(&b.rule))
    });
    diagnostics
}

/// Render diagnostics as an aligned text table
pub fn render_text(diagnostics: &[Diagnostic]) -> String {
    let mut output = String::new();

    if diagnostics.is_empty() {
        return output;
    }

    // Header
    output.push_str(&format!(
        "{:<28} {:<6} {:<5} {:<24} {:<22} {}\n",
        "FILE", "LINE", "COL", "FUNCTION", "RULE", "MESSAGE"
    ));

    // Rows
    for diagnostic in diagnostics {
        output.push_str(&format!(
            "{:<28} {:<6} {:<5} {:<24} {:<22} {}\n",
            truncate_or_pad(&diagnostic.file, 28),
            diagnostic.line,
            diagnostic.column,
            truncate_or_pad(&diagnostic.function, 24),
            truncate_or_pad(&diagnostic.rule, 22),
            diagnostic.message,
        ));
    }

    let count = diagnostics.len();
    output.push_str(&format!(
        "\n{} {} reported\n",
        count,
        if count == 1 { "finding" } else { "findings" }
    ));

    output
}

/// Render diagnostics as JSON output
pub fn render_json(diagnostics: &[Diagnostic]) -> String {
    // Use serde_json with stable field order for deterministic output
    serde_json::to_string_pretty(diagnostics).unwrap_or_else(|_| "[]".to_string())
}

/// Truncate or pad string to fixed width
fn truncate_or_pad(s: &str, width: usize) -> String {
    if s.len() > width {
        format!("{}...", &s[..width.saturating_sub(3)])
    } else {
        format!("{:<width$}", s, width = width)
    }
}
