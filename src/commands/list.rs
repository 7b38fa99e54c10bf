//! `algotrace list` - trace a linked list operation

use algotrace_core::error::Result;
use algotrace_core::list::LinkedList;
use serde_json::json;

use crate::cli::commands::{ListArgs, ListOperation};
use crate::commands::dispatch::CommandContext;
use crate::commands::render::{render, Report};

pub fn execute(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let values = if args.values.is_empty() {
        &ctx.config.list.values
    } else {
        &args.values
    };
    let mut list = LinkedList::from_values(values);

    let (operation, steps) = match &args.operation {
        ListOperation::Search { value } => ("search", list.search_traced(value)?),
        ListOperation::Insert { value, at, head } => {
            let position = if *head { 0 } else { at.unwrap_or(list.len()) };
            ("insert", list.insert_traced(position, *value)?)
        }
        ListOperation::Delete { value } => ("delete", list.delete_traced(value)?),
        ListOperation::Reverse => ("reverse", list.reverse_traced()?),
    };

    let found = match &args.operation {
        ListOperation::Search { value } => list.search(value),
        _ => None,
    };
    let document = json!({
        "operation": operation,
        "steps": steps,
        "list": list.to_vec(),
        "length": list.len(),
        "found": found,
    });

    let mut report = Report::new(format!("list.{}", operation), &steps, document)
        .field("list", &list)
        .field("length", list.len());
    if let ListOperation::Search { .. } = args.operation {
        report = report.field(
            "found",
            found.map_or_else(|| "none".to_string(), |index| index.to_string()),
        );
    }
    render(ctx, &report)
}
