//! Records output: header, one `S` line per step, one `R` result line

use algotrace_core::format::escape_quotes;
use algotrace_core::trace::TraceStep;

use super::Report;
use crate::commands::dispatch::CommandContext;

pub fn output_records<S: TraceStep>(ctx: &CommandContext, report: &Report<S>) {
    println!(
        "H algotrace=1 records=1 mode={} steps={}",
        report.mode,
        report.steps.len()
    );

    if !ctx.cli.summary {
        for (index, step) in report.steps.iter().enumerate() {
            println!(
                "S {} {} \"{}\"",
                index,
                step.kind(),
                escape_quotes(step.message())
            );
        }
    }

    let fields: Vec<String> = report
        .result
        .iter()
        .map(|(key, value)| format!("{}={}", key, record_value(value)))
        .collect();
    println!("R {}", fields.join(" "));
}

/// Quote values that would otherwise break the space-separated layout
fn record_value(value: &str) -> String {
    if value.is_empty() || value.contains(char::is_whitespace) || value.contains('"') {
        format!("\"{}\"", escape_quotes(value))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_value_quoting() {
        assert_eq!(record_value("7"), "7");
        assert_eq!(record_value("A D E"), "\"A D E\"");
        assert_eq!(record_value(""), "\"\"");
        assert_eq!(record_value("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
