//! Shared output for every traced command
//!
//! A command hands over its step log together with the final result, and
//! the renderer prints them in the selected format.

pub mod human;
pub mod json;
pub mod playback;
pub mod records;

use algotrace_core::error::Result;
use algotrace_core::trace::{StepLog, TraceStep};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Everything a renderer needs from one engine run
pub struct Report<'a, S> {
    /// Engine label used in headers, e.g. `sort.merge`
    pub mode: String,
    pub steps: &'a StepLog<S>,
    /// Final result as ordered key/value pairs
    pub result: Vec<(&'static str, String)>,
    /// Full JSON document (steps plus artifacts)
    pub json: serde_json::Value,
}

impl<'a, S> Report<'a, S> {
    pub fn new(mode: impl Into<String>, steps: &'a StepLog<S>, json: serde_json::Value) -> Self {
        Self {
            mode: mode.into(),
            steps,
            result: Vec::new(),
            json,
        }
    }

    pub fn field(mut self, key: &'static str, value: impl ToString) -> Self {
        self.result.push((key, value.to_string()));
        self
    }
}

pub fn render<S: TraceStep>(ctx: &CommandContext, report: &Report<S>) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Human => human::output_human(ctx, report),
        OutputFormat::Json => json::output_json(ctx, report),
        OutputFormat::Records => {
            records::output_records(ctx, report);
            Ok(())
        }
    }
}

/// Space-separated rendering of a sequence
pub fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
