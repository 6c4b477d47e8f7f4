//! Suppression comment extraction
//!
//! Parses `// wrapcheck-ignore: reason` comments from source code.
//!
//! Global invariants enforced:
//! - Deterministic extraction (pure function of source, span, source_map)
//! - Comment must be on the line immediately before the function
//! - Returns None (no suppression), Some("") (no reason), or Some("reason")

use swc_common::{SourceMap, Span};

/// Extract suppression comment for a function
///
/// Returns:
/// - `None` if no suppression comment found
/// - `Some("")` if suppression comment found but no reason provided
/// - `Some("reason")` if suppression comment found with reason
///
/// # Comment Format
///
/// The suppression comment must be on the line immediately before the function:
/// ```typescript
/// // wrapcheck-ignore: intentional wrapper, keeps the call site readable
/// function pick(cond, a, b) { return cond ? a : b; }
/// ```
///
/// Blank lines between the comment and function will cause the comment to be ignored.
pub fn extract_suppression(source: &str, span: Span, source_map: &SourceMap) -> Option<String> {
    // Get the line number of the function start
    let func_pos = source_map.lookup_char_pos(span.lo);
    let func_line = func_pos.line;

    // Edge case: function is on first line, no previous line exists
    if func_line <= 1 {
        return None;
    }

    // Get the previous line (line numbers are 1-indexed)
    let prev_line_num = func_line - 1;

    let lines: Vec<&str> = source.lines().collect();

    if prev_line_num == 0 || prev_line_num > lines.len() {
        return None;
    }

    let prev_line = lines[prev_line_num - 1].trim();

    if !prev_line.starts_with("// wrapcheck-ignore") {
        return None;
    }

    // Extract the reason after the colon
    if let Some(colon_pos) = prev_line.find(':') {
        let reason = prev_line[colon_pos + 1..].trim();
        if reason.is_empty() {
            Some(String::new()) // Suppression without reason
        } else {
            Some(reason.to_string())
        }
    } else {
        // No colon found - treat as suppression without reason
        Some(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swc_common::{sync::Lrc, SourceMap};

    fn parse_and_extract(source: &str) -> Option<String> {
        let source_map: Lrc<SourceMap> = Default::default();
        let module = crate::parser::parse_source(source, &source_map, "test.js")
            .expect("parse failed");

        // Get the first function declaration
        let function_span = module
            .body
            .iter()
            .find_map(|item| {
                if let swc_ecma_ast::ModuleItem::Stmt(swc_ecma_ast::Stmt::Decl(
                    swc_ecma_ast::Decl::Fn(fn_decl),
                )) = item
                {
                    Some(fn_decl.function.span)
                } else {
                    None
                }
            })
            .expect("no function found");

        extract_suppression(source, function_span, &source_map)
    }

    #[test]
    fn test_no_suppression() {
        let source = r#"
function pick(cond, a, b) {
  return cond ? a : b;
}
"#;
        assert_eq!(parse_and_extract(source), None);
    }

    #[test]
    fn test_suppression_with_reason() {
        let source = r#"
// wrapcheck-ignore: named for domain clarity
function pick(cond, a, b) {
  return cond ? a : b;
}
"#;
        assert_eq!(
            parse_and_extract(source),
            Some("named for domain clarity".to_string())
        );
    }

    #[test]
    fn test_suppression_without_reason() {
        let source = r#"
// wrapcheck-ignore:
function pick(cond, a, b) {
  return cond ? a : b;
}
"#;
        assert_eq!(parse_and_extract(source), Some(String::new()));
    }

    #[test]
    fn test_suppression_no_colon() {
        let source = r#"
// wrapcheck-ignore
function pick(cond, a, b) {
  return cond ? a : b;
}
"#;
        assert_eq!(parse_and_extract(source), Some(String::new()));
    }

    #[test]
    fn test_blank_line_between() {
        let source = r#"
// wrapcheck-ignore: should not be recognized

function pick(cond, a, b) {
  return cond ? a : b;
}
"#;
        assert_eq!(parse_and_extract(source), None);
    }

    #[test]
    fn test_function_on_first_line() {
        let source = "function pick(cond, a, b) { return cond ? a : b; }";
        assert_eq!(parse_and_extract(source), None);
    }

    #[test]
    fn test_different_comment() {
        let source = r#"
// This is just a regular comment
function pick(cond, a, b) {
  return cond ? a : b;
}
"#;
        assert_eq!(parse_and_extract(source), None);
    }
}
