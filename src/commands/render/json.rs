//! JSON output: one document with the step log and the final artifacts

use algotrace_core::error::Result;

use super::Report;
use crate::commands::dispatch::CommandContext;

pub fn output_json<S>(ctx: &CommandContext, report: &Report<S>) -> Result<()> {
    let mut document = report.json.clone();
    if let serde_json::Value::Object(map) = &mut document {
        map.insert(
            "mode".to_string(),
            serde_json::Value::String(report.mode.clone()),
        );
        if ctx.cli.summary {
            map.remove("steps");
        }
    }
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
