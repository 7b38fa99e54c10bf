//! CLI argument parsing for algotrace
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --delay-ms, --summary

pub mod commands;
pub mod parse;

use std::path::PathBuf;

use clap::Parser;

pub use commands::Commands;
pub use algotrace_core::format::OutputFormat;

/// Algotrace - step-by-step traces of classic data structures and algorithms
#[derive(Parser, Debug)]
#[command(name = "algotrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse::parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "algotrace_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: ./algotrace.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Pause between steps in human output, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Print only the final result, not every step
    #[arg(long, global = true)]
    pub summary: bool,

    #[command(subcommand)]
    pub command: Commands,
}
