//! `algotrace analysis` - print the complexity reference for a topic

use algotrace_core::analysis::Analysis;
use algotrace_core::error::Result;
use algotrace_core::format::escape_quotes;

use crate::cli::commands::AnalysisArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, args: &AnalysisArgs) -> Result<()> {
    let analysis = args.topic.analysis();

    match ctx.cli.format {
        OutputFormat::Json => {
            let mut document = serde_json::to_value(analysis)?;
            if let serde_json::Value::Object(map) = &mut document {
                map.insert("topic".to_string(), args.topic.name().into());
            }
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        OutputFormat::Human => output_human(analysis),
        OutputFormat::Records => output_records(args.topic.name(), analysis),
    }
    Ok(())
}

fn output_human(analysis: &Analysis) {
    println!("{} Analysis", analysis.name);
    println!();
    println!("Time Complexity:");
    let width = analysis
        .time_complexity
        .iter()
        .map(|c| c.operation.chars().count())
        .max()
        .unwrap_or(0);
    for complexity in analysis.time_complexity {
        println!("  {:<width$}  {}", complexity.operation, complexity.bound, width = width);
    }
    println!();
    println!("Space Complexity: {}", analysis.space_complexity);
    println!();
    println!("{}", analysis.description);
    print_list("Use Cases", analysis.use_cases);
    print_list("Advantages", analysis.advantages);
    print_list("Disadvantages", analysis.disadvantages);
}

fn print_list(title: &str, items: &[&str]) {
    println!();
    println!("{}:", title);
    for item in items {
        println!("  - {}", item);
    }
}

fn output_records(topic: &str, analysis: &Analysis) {
    println!(
        "H algotrace=1 records=1 mode=analysis topic={} name=\"{}\"",
        topic,
        escape_quotes(analysis.name)
    );
    for complexity in analysis.time_complexity {
        println!(
            "T \"{}\" \"{}\"",
            escape_quotes(complexity.operation),
            escape_quotes(complexity.bound)
        );
    }
    println!("P \"{}\"", escape_quotes(analysis.space_complexity));
    println!("D \"{}\"", escape_quotes(analysis.description));
    for (tag, items) in [
        ("U", analysis.use_cases),
        ("A", analysis.advantages),
        ("X", analysis.disadvantages),
    ] {
        for item in items {
            println!("{} \"{}\"", tag, escape_quotes(item));
        }
    }
}
