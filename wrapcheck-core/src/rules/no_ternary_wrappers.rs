//! `no-ternary-wrappers`: disallow functions that merely wrap a ternary
//!
//! Flags a function-like node whose entire body is "return a conditional
//! expression" where all three operands are bare identifiers naming the
//! function's own parameters. Such a function contributes no computation,
//! only parameter renaming, and the ternary could be inlined at every call
//! site.
//!
//! Deliberately not flagged:
//! - operands drawn partly or wholly from enclosing scope
//! - operands that are anything other than a bare identifier (member
//!   access, call, literal)
//! - block bodies with more than one statement, even when the extra
//!   statements look inert

use super::{Finding, RuleKind, RuleMeta};
use crate::ast::{FunctionBody, FunctionNode};
use swc_ecma_ast::{CondExpr, Expr, Stmt};

pub const META: RuleMeta = RuleMeta {
    name: "no-ternary-wrappers",
    description: "Disallow functions whose entire body returns a ternary over their own parameters",
    kind: RuleKind::Suggestion,
    recommended: true,
};

const MESSAGE: &str = "This is an unnecessary abstraction. Prefer using the ternary expression \
                       directly instead of wrapping it in a function.";

/// Check one function node; at most one finding per node
///
/// Pure function of the projected node: re-checking the same node always
/// yields the same outcome.
// TODO: add an option to also flag wrappers whose extra statements do no
// meaningful work before the return (unused locals, bare logging calls,
// rebinding the ternary to a local and returning it).
pub fn check(function: &FunctionNode) -> Option<Finding> {
    let ternary = candidate_ternary(function)?;

    // All three operands must be bare identifiers. Anything else (member
    // access on an enum, a call, a literal) merely resembles an identifier
    // ternary and must not match.
    let mut operand_names = Vec::with_capacity(3);
    for operand in [&ternary.test, &ternary.cons, &ternary.alt] {
        match skip_parens(operand) {
            Expr::Ident(ident) => operand_names.push(&*ident.sym),
            _ => return None,
        }
    }

    // Every operand must name one of the function's own parameters. Order
    // does not matter and duplicate uses are fine; rest and destructured
    // parameters expose no name and so never match.
    let all_from_params = operand_names
        .iter()
        .all(|name| function.simple_param_names().any(|param| param == *name));
    if !all_from_params {
        return None;
    }

    Some(Finding {
        rule: META.name,
        message: MESSAGE,
    })
}

/// Extract the candidate ternary, if the body has the wrapper shape
///
/// Two shapes qualify: an arrow expression body that is a conditional, and
/// a block body whose single statement returns a conditional.
fn candidate_ternary(function: &FunctionNode) -> Option<&CondExpr> {
    match &function.body {
        FunctionBody::Expr(expr) => match skip_parens(expr) {
            Expr::Cond(cond) => Some(cond),
            _ => None,
        },
        FunctionBody::Block(block) => match block.stmts.as_slice() {
            [Stmt::Return(ret)] => match ret.arg.as_deref().map(skip_parens) {
                Some(Expr::Cond(cond)) => Some(cond),
                _ => None,
            },
            _ => None,
        },
    }
}

/// Look through parenthesized expressions
///
/// Estree-style ASTs have no paren nodes, so `(a ? b : c)` and `a ? b : c`
/// must be indistinguishable here.
fn skip_parens(mut expr: &Expr) -> &Expr {
    while let Expr::Paren(paren) = expr {
        expr = &paren.expr;
    }
    expr
}
