//! Function discovery from AST
//!
//! Global invariants enforced:
//! - Deterministic traversal order by (file, span.start)
//! - Per-function analysis only
//!
//! Supported constructs:
//! - Function declarations (`FnDecl`)
//! - Function expressions (`FnExpr`)
//! - Arrow functions (`ArrowExpr`), both block and expression bodies
//! - Class methods (`ClassMethod`)
//! - Object literal methods (`MethodProp`)
//!
//! Ignored constructs (automatically excluded as they have no function bodies):
//! - Interfaces
//! - Type aliases
//! - Overload signatures without bodies (filtered by `if let Some(body)`)
//! - Ambient declarations

use crate::ast::{FunctionBody, FunctionKind, FunctionNode, ParamName};
use swc_ecma_ast::*;
use swc_ecma_visit::{Visit, VisitWith};

/// Collect all function-like nodes from a module
///
/// Returns functions sorted deterministically by span start position, with
/// suppression comments already resolved.
pub fn discover_functions(
    module: &Module,
    source: &str,
    source_map: &swc_common::SourceMap,
) -> Vec<FunctionNode> {
    let mut collector = FunctionCollector {
        functions: Vec::new(),
    };

    module.visit_with(&mut collector);

    // Sort by span start for deterministic ordering
    collector.functions.sort_by_key(|f| f.span.lo);

    collector
        .functions
        .into_iter()
        .map(|mut func| {
            func.suppression_reason =
                crate::suppression::extract_suppression(source, func.span, source_map);
            func
        })
        .collect()
}

/// Reduce a binding pattern to the name the rule can match against
///
/// Rest, destructured, and default-valued parameters have no bare name and
/// collapse to `ParamName::Pattern`.
fn param_name(pat: &Pat) -> ParamName {
    match pat {
        Pat::Ident(binding) => ParamName::Ident(binding.id.sym.to_string()),
        _ => ParamName::Pattern,
    }
}

/// Extract a method name from a property key, where one exists
fn prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(str_lit) => {
            // Wtf8Atom to String via to_atom_lossy (borrows when possible)
            Some(str_lit.value.to_atom_lossy().to_string())
        }
        PropName::Num(num) => Some(num.to_string()),
        _ => None,
    }
}

/// Visitor to collect function nodes from the AST
struct FunctionCollector {
    functions: Vec<FunctionNode>,
}

impl FunctionCollector {
    /// Push a function-like node backed by a `Function` (everything except arrows)
    ///
    /// Bodyless functions (overload signatures, ambient declarations) are skipped.
    fn collect_function(&mut self, kind: FunctionKind, name: Option<String>, function: &Function) {
        if let Some(body) = function.body.clone() {
            self.functions.push(FunctionNode {
                kind,
                name,
                span: function.span,
                params: function.params.iter().map(|p| param_name(&p.pat)).collect(),
                body: FunctionBody::Block(body),
                suppression_reason: None,
            });
        }
    }
}

impl Visit for FunctionCollector {
    fn visit_fn_decl(&mut self, decl: &FnDecl) {
        let name = Some(decl.ident.sym.to_string());
        self.collect_function(FunctionKind::Declaration, name, &decl.function);

        // Continue visiting children
        decl.visit_children_with(self);
    }

    fn visit_fn_expr(&mut self, expr: &FnExpr) {
        // Name may be None for anonymous function expressions
        let name = expr.ident.as_ref().map(|id| id.sym.to_string());
        self.collect_function(FunctionKind::Expression, name, &expr.function);

        // Continue visiting children
        expr.visit_children_with(self);
    }

    fn visit_arrow_expr(&mut self, arrow: &ArrowExpr) {
        let params = arrow.params.iter().map(param_name).collect();

        // Arrow bodies keep their source form: a block stays a block, an
        // expression body stays a bare expression
        let body = match &*arrow.body {
            BlockStmtOrExpr::BlockStmt(block) => FunctionBody::Block(block.clone()),
            BlockStmtOrExpr::Expr(expr) => FunctionBody::Expr(expr.clone()),
        };

        self.functions.push(FunctionNode {
            kind: FunctionKind::Arrow,
            name: None,
            span: arrow.span,
            params,
            body,
            suppression_reason: None,
        });

        // Continue visiting children
        arrow.visit_children_with(self);
    }

    fn visit_class_method(&mut self, method: &ClassMethod) {
        self.collect_function(FunctionKind::Method, prop_name(&method.key), &method.function);

        // Continue visiting children
        method.visit_children_with(self);
    }

    fn visit_method_prop(&mut self, method: &MethodProp) {
        self.collect_function(FunctionKind::Method, prop_name(&method.key), &method.function);

        // Continue visiting children
        method.visit_children_with(self);
    }
}
