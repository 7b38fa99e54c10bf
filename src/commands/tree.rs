//! `algotrace tree` - trace a binary search tree operation

use algotrace_core::error::Result;
use algotrace_core::tree::{BinarySearchTree, TreeOrder};
use serde_json::json;

use crate::cli::commands::{TreeArgs, TreeOperation};
use crate::commands::dispatch::CommandContext;
use crate::commands::render::{join, render, Report};

pub fn execute(ctx: &CommandContext, args: &TreeArgs) -> Result<()> {
    let values = if args.values.is_empty() {
        &ctx.config.tree.values
    } else {
        &args.values
    };
    let mut tree = BinarySearchTree::from_values(values)?;

    let (operation, steps) = match &args.operation {
        TreeOperation::Insert { value } => ("insert", tree.insert_traced(*value)?),
        TreeOperation::Search { value } => ("search", tree.search_traced(value)?),
        TreeOperation::Delete { value } => ("delete", tree.delete_traced(value)?),
        TreeOperation::Inorder => ("inorder", tree.traverse_traced(TreeOrder::Inorder)?),
        TreeOperation::Preorder => ("preorder", tree.traverse_traced(TreeOrder::Preorder)?),
        TreeOperation::Postorder => ("postorder", tree.traverse_traced(TreeOrder::Postorder)?),
    };

    let sequence = steps
        .last()
        .map(|step| step.sequence.clone())
        .unwrap_or_default();
    let inorder = tree.inorder();
    let document = json!({
        "operation": operation,
        "steps": steps,
        "sequence": sequence,
        "inorder": inorder,
        "preorder": tree.preorder(),
        "size": tree.len(),
        "height": tree.height(),
    });

    let label = match &args.operation {
        TreeOperation::Insert { .. }
        | TreeOperation::Search { .. }
        | TreeOperation::Delete { .. } => "path",
        TreeOperation::Inorder | TreeOperation::Preorder | TreeOperation::Postorder => "result",
    };
    let report = Report::new(format!("tree.{}", operation), &steps, document)
        .field(label, join(&sequence))
        .field("inorder", join(&inorder))
        .field("size", tree.len())
        .field("height", tree.height());
    render(ctx, &report)
}
