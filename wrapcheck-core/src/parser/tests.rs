//! Tests for the TypeScript/JavaScript parser

use crate::parser;
use swc_common::{sync::Lrc, SourceMap};

fn parse_as(src: &str, filename: &str) -> Result<swc_ecma_ast::Module, anyhow::Error> {
    let cm: Lrc<SourceMap> = Default::default();
    parser::parse_source(src, &cm, filename)
}

#[test]
fn test_parse_simple_function() {
    let src = "function pick(cond, a, b) { return cond ? a : b; }";
    assert!(parse_as(src, "test.js").is_ok(), "Should parse simple function");
}

#[test]
fn test_parse_typescript_types() {
    let src = "function pick(cond: boolean, a: string, b: string): string { return cond ? a : b; }";
    assert!(parse_as(src, "test.ts").is_ok(), "Should parse TypeScript types");
}

#[test]
fn test_parse_rejects_types_in_plain_js() {
    let src = "function pick(cond: boolean): string { return 'x'; }";
    assert!(
        parse_as(src, "test.js").is_err(),
        "Type annotations should fail to parse as plain JavaScript"
    );
}

#[test]
fn test_parse_jsx_by_extension() {
    let src = "function render(cond, a, b) { return <div>{cond ? a : b}</div>; }";
    assert!(parse_as(src, "test.jsx").is_ok(), "Should parse JSX in .jsx files");
    assert!(
        parse_as(src, "test.js").is_err(),
        "JSX should fail to parse in plain .js files"
    );
}

#[test]
fn test_parse_tsx_by_extension() {
    let src = "const render = (cond: boolean) => <span>{cond ? 'a' : 'b'}</span>;";
    assert!(parse_as(src, "test.tsx").is_ok(), "Should parse TSX in .tsx files");
}

#[test]
fn test_parse_interface_ignored() {
    // Interfaces parse but carry nothing discovery cares about
    let src = "interface Hand { side: string; }";
    assert!(parse_as(src, "test.ts").is_ok());
}

#[test]
fn test_parse_error_names_the_file() {
    let src = "function (((";
    let err = parse_as(src, "broken.js").unwrap_err();
    assert!(format!("{:#}", err).contains("broken.js"));
}
