//! Wrapcheck core library - a JavaScript/TypeScript lint rule for ternary wrappers

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Analysis is strictly per-function
// - No global mutable state
// - No randomness, clocks, threads, or async
// - Deterministic traversal order must be explicit
// - Formatting, comments, and whitespace must not affect results
// - Identical input yields byte-for-byte identical output

pub mod analysis;
pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod discover;
pub mod parser;
pub mod plugin;
pub mod rules;
pub mod suppression;

pub use config::WrapcheckConfig;
pub use diagnostics::{render_json, render_text, sort_diagnostics, Diagnostic};
pub use plugin::{PluginMeta, PLUGIN};

use anyhow::{Context, Result};
use config::FileFilter;
use std::path::{Path, PathBuf};
use swc_common::{sync::Lrc, SourceMap};

pub struct LintOptions {
    /// Explicit config file path; standard locations are searched otherwise
    pub config_path: Option<PathBuf>,
}

/// Lint a file or directory tree, returning sorted diagnostics
pub fn lint(path: &Path, options: LintOptions) -> Result<Vec<Diagnostic>> {
    let root = if path.is_file() {
        path.parent().unwrap_or_else(|| Path::new("."))
    } else {
        path
    };
    let config = WrapcheckConfig::load(options.config_path.as_deref(), root)?;
    let filter = config.file_filter()?;

    let cm: Lrc<SourceMap> = Default::default();
    let mut all_diagnostics = Vec::new();

    // Collect TypeScript and JavaScript files
    let source_files = collect_source_files(path, &filter)?;

    // Lint each file
    for file_path in source_files {
        let diagnostics = analysis::analyze_file(&file_path, &cm, &config)
            .with_context(|| format!("Failed to lint file: {}", file_path.display()))?;
        all_diagnostics.extend(diagnostics);
    }

    // Sort deterministically
    Ok(sort_diagnostics(all_diagnostics))
}

/// Check if a file is a supported source file
fn is_supported_source_file(filename: &str) -> bool {
    // TypeScript files (.ts, .mts, .cts) but not declaration files (.d.ts)
    let is_ts = (filename.ends_with(".ts")
        || filename.ends_with(".mts")
        || filename.ends_with(".cts"))
        && !filename.ends_with(".d.ts");

    // TSX files (.tsx, .mtsx, .ctsx)
    let is_tsx =
        filename.ends_with(".tsx") || filename.ends_with(".mtsx") || filename.ends_with(".ctsx");

    // JavaScript files (.js, .mjs, .cjs)
    let is_js =
        filename.ends_with(".js") || filename.ends_with(".mjs") || filename.ends_with(".cjs");

    // JSX files (.jsx, .mjsx, .cjsx)
    let is_jsx =
        filename.ends_with(".jsx") || filename.ends_with(".mjsx") || filename.ends_with(".cjsx");

    is_ts || is_tsx || is_js || is_jsx
}

/// Collect all TypeScript, JavaScript, JSX, and TSX files from a path (file or directory)
///
/// A path naming a single file only needs a supported extension; the
/// config's include/exclude globs apply to directory walks.
fn collect_source_files(path: &Path, filter: &FileFilter) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if path.is_file() {
        if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
            if is_supported_source_file(filename) {
                files.push(path.to_path_buf());
            }
        }
    } else if path.is_dir() {
        collect_source_files_recursive(path, filter, &mut files)?;
    }

    // Sort files for deterministic order
    files.sort();

    Ok(files)
}

/// Recursively collect source files from a directory
fn collect_source_files_recursive(
    dir: &Path,
    filter: &FileFilter,
    files: &mut Vec<PathBuf>,
) -> Result<()> {
    use std::ffi::OsStr;

    for entry_result in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry: std::fs::DirEntry = entry_result?;
        let path = entry.path();

        if path.is_dir() {
            // Skip node_modules and other common non-source directories
            if let Some(name) = path.file_name().and_then(|n: &OsStr| n.to_str()) {
                if name == "node_modules" || name.starts_with('.') {
                    continue;
                }
            }
            collect_source_files_recursive(&path, filter, files)?;
        } else if path.is_file() {
            if let Some(filename) = path.file_name().and_then(|n: &OsStr| n.to_str()) {
                if is_supported_source_file(filename) && filter.matches(&path) {
                    files.push(path);
                }
            }
        }
    }

    Ok(())
}
