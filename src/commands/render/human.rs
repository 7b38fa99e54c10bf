//! Human-readable step playback

use algotrace_core::error::Result;
use algotrace_core::trace::TraceStep;
use algotrace_core::trace_time;

use super::playback::Playback;
use super::Report;
use crate::commands::dispatch::CommandContext;

/// Print `[index] tag: message` per step, paced by the playback delay, then the result
pub fn output_human<S: TraceStep>(ctx: &CommandContext, report: &Report<S>) -> Result<()> {
    if !ctx.cli.quiet {
        println!("{} ({} steps)", report.mode, report.steps.len());
    }

    if !ctx.cli.summary {
        let playback = Playback::new(ctx.delay());
        let mut player = report.steps.player();
        while let Some(step) = player.advance() {
            if let Some(index) = player.position() {
                println!("[{}] {}: {}", index, step.kind(), step.message());
            }
            if !player.is_finished() {
                playback.pause()?;
            }
        }
        trace_time!(ctx.start, "playback", steps = report.steps.len());
        if !ctx.cli.quiet {
            println!();
        }
    }

    for (key, value) in &report.result {
        println!("{}: {}", key, value);
    }
    Ok(())
}
