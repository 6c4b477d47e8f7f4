//! Wrapcheck CLI - lint JavaScript/TypeScript for unnecessary ternary wrappers

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use wrapcheck_core::{lint, plugin, render_json, render_text, LintOptions, PLUGIN};

/// Exit code when lint findings are reported
const EXIT_FINDINGS: u8 = 1;
/// Exit code for operational errors (bad paths, unreadable or unparseable files)
const EXIT_OPERATIONAL_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "wrapcheck")]
#[command(version)]
#[command(about = "Flags functions whose entire body wraps a ternary over their own parameters")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint a JavaScript/TypeScript file or directory
    Check {
        /// Path to a source file or directory
        path: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Path to a config file (default: .wrapcheckrc.json, wrapcheck.config.json)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List the rules this tool ships
    Rules {
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let outcome = run();
    if let Err(err) = &outcome {
        eprintln!("error: {:#}", err);
    }
    ExitCode::from(exit_status(&outcome))
}

/// Map the run outcome to the documented exit codes
///
/// 0 for a clean run, 1 when findings were reported, 2 for operational
/// errors. Callers can tell a failed lint from a failed run.
fn exit_status(outcome: &anyhow::Result<bool>) -> u8 {
    match outcome {
        Ok(false) => 0,
        Ok(true) => EXIT_FINDINGS,
        Err(_) => EXIT_OPERATIONAL_ERROR,
    }
}

/// Execute the parsed command; returns whether any findings were reported
fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            path,
            format,
            config,
        } => {
            // Normalize path to absolute
            let normalized_path = if path.is_relative() {
                std::env::current_dir()?.join(&path)
            } else {
                path
            };

            if !normalized_path.exists() {
                anyhow::bail!("Path does not exist: {}", normalized_path.display());
            }

            let diagnostics = lint(
                &normalized_path,
                LintOptions {
                    config_path: config,
                },
            )?;

            match format {
                OutputFormat::Text => {
                    print!("{}", render_text(&diagnostics));
                }
                OutputFormat::Json => {
                    println!("{}", render_json(&diagnostics));
                }
            }

            Ok(!diagnostics.is_empty())
        }
        Commands::Rules { format } => {
            match format {
                OutputFormat::Text => {
                    println!("{} v{}", PLUGIN.name, PLUGIN.version);
                    for rule in plugin::rules() {
                        let recommended = if rule.recommended { " (recommended)" } else { "" };
                        println!("  {}  [{}]{}", rule.name, rule.kind.as_str(), recommended);
                        println!("      {}", rule.description);
                    }
                }
                OutputFormat::Json => {
                    println!("{}", plugin::render_manifest_json());
                }
            }

            Ok(false)
        }
    }
}
