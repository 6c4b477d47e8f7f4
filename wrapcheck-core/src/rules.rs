//! Rule definitions and shared rule metadata
//!
//! Global invariants enforced:
//! - Rules are deterministic (same projected node = same findings)
//! - Rules are pure: no IO, no cross-call state, no tree mutation
//! - Rule evaluation order is deterministic

pub mod no_ternary_wrappers;

use crate::ast::FunctionNode;
use serde::{Deserialize, Serialize};

/// Rule classification, in the usual lint-host sense
///
/// A `Suggestion` points at something that could be written better; a
/// `Problem` points at something likely to be a bug. Every rule shipped
/// today is a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Suggestion,
    Problem,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Suggestion => "suggestion",
            RuleKind::Problem => "problem",
        }
    }
}

/// Static metadata describing a single rule
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RuleMeta {
    /// Unique kebab-case rule name
    pub name: &'static str,
    /// One-line description for `wrapcheck rules` and docs
    pub description: &'static str,
    pub kind: RuleKind,
    /// Whether the rule runs when the config does not mention it
    pub recommended: bool,
}

/// A finding produced by one rule against one function node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub rule: &'static str,
    pub message: &'static str,
}

/// Metadata for every rule this crate ships, in deterministic order
pub fn all_rules() -> &'static [RuleMeta] {
    &[no_ternary_wrappers::META]
}

/// Look up a rule's metadata by name
pub fn rule_meta(name: &str) -> Option<&'static RuleMeta> {
    all_rules().iter().find(|meta| meta.name == name)
}

/// Run every rule against one function node
///
/// Per-rule enablement is the caller's concern; findings carry the rule
/// name so they can be filtered afterwards.
pub fn run_rules(function: &FunctionNode) -> Vec<Finding> {
    let mut findings = Vec::new();
    if let Some(finding) = no_ternary_wrappers::check(function) {
        findings.push(finding);
    }
    findings
}
