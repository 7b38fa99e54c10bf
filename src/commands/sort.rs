//! `algotrace sort` - trace insertion, merge or quick sort

use algotrace_core::error::Result;
use algotrace_core::sort::{SortOutcome, SortStep};

use crate::cli::commands::SortArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::render::{join, render, Report};

pub fn execute(ctx: &CommandContext, args: &SortArgs) -> Result<()> {
    let values = if args.values.is_empty() {
        &ctx.config.sort.values
    } else {
        &args.values
    };

    let outcome = args.algorithm.run(values)?;
    tracing::debug!(
        algorithm = args.algorithm.name(),
        input = values.len(),
        steps = outcome.steps.len(),
        "sort_traced"
    );

    let report = build_report(&outcome, serde_json::to_value(&outcome)?);
    render(ctx, &report)
}

fn build_report(outcome: &SortOutcome<i64>, json: serde_json::Value) -> Report<'_, SortStep<i64>> {
    Report::new(format!("sort.{}", outcome.algorithm), &outcome.steps, json)
        .field("sorted", join(&outcome.sorted_array))
        .field("comparisons", outcome.comparisons())
        .field("swaps", outcome.swaps())
}
