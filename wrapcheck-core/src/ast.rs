//! AST adapter layer for function discovery
//!
//! Global invariants enforced:
//! - Deterministic traversal order by (file, span.start)
//! - Formatting, comments, and whitespace must not affect results
//!
//! Only the fields the rule actually consults are projected out of the swc
//! tree: parameter names, body shape, and a span for reporting. Everything
//! else stays behind in the full AST.

use swc_common::Span;
use swc_ecma_ast::{BlockStmt, Expr};

/// The syntactic construct that introduced a function scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// `function foo() {}`
    Declaration,
    /// `const foo = function () {}`
    Expression,
    /// `() => {}` or `() => expr`
    Arrow,
    /// Class method or object-literal method
    Method,
}

impl FunctionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionKind::Declaration => "function declaration",
            FunctionKind::Expression => "function expression",
            FunctionKind::Arrow => "arrow function",
            FunctionKind::Method => "method",
        }
    }
}

/// A declared parameter, reduced to what identifier matching needs
///
/// Rest, destructured, and default-valued parameters carry no bare name and
/// can never equal a ternary operand, so they collapse into `Pattern`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamName {
    Ident(String),
    Pattern,
}

/// Function body in either of its two source forms
///
/// Arrow expression bodies are kept distinct from single-statement blocks;
/// the rule treats them as separate candidate shapes.
#[derive(Debug, Clone)]
pub enum FunctionBody {
    Block(BlockStmt),
    Expr(Box<Expr>),
}

/// Stable abstraction for a function-like node in the AST
#[derive(Debug, Clone)]
pub struct FunctionNode {
    pub kind: FunctionKind,
    pub name: Option<String>,
    pub span: Span,
    pub params: Vec<ParamName>,
    pub body: FunctionBody,
    pub suppression_reason: Option<String>,
}

impl FunctionNode {
    /// Extract the start line number from the span
    pub fn start_line(&self, source_map: &swc_common::SourceMap) -> u32 {
        let loc = source_map.lookup_char_pos(self.span.lo);
        loc.line as u32
    }

    /// Extract the start column number (1-based) from the span
    pub fn start_column(&self, source_map: &swc_common::SourceMap) -> u32 {
        let loc = source_map.lookup_char_pos(self.span.lo);
        loc.col_display as u32 + 1
    }

    /// Iterate over the names of bare-identifier parameters
    pub fn simple_param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().filter_map(|p| match p {
            ParamName::Ident(name) => Some(name.as_str()),
            ParamName::Pattern => None,
        })
    }
}
