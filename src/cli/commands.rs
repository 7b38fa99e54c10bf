//! Subcommands and their arguments

use clap::{Args, Subcommand};

use algotrace_core::analysis::Topic;
use algotrace_core::engine::{SortAlgorithm, TraversalAlgorithm};
use algotrace_core::graph::EdgeSpec;

use crate::cli::parse::{parse_edge, parse_sort_algorithm, parse_topic, parse_traversal, parse_vertex};

/// Top-level algotrace commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Trace a sorting algorithm
    Sort(SortArgs),

    /// Trace a depth-first or breadth-first traversal
    Traverse(TraverseArgs),

    /// Trace Dijkstra's shortest path algorithm
    Dijkstra(DijkstraArgs),

    /// Trace a linked list operation
    List(ListArgs),

    /// Trace a binary search tree operation
    Tree(TreeArgs),

    /// Show the complexity reference for a structure or algorithm
    Analysis(AnalysisArgs),
}

/// Arguments for the sort command.
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Algorithm: insertion, merge, quick
    #[arg(value_parser = parse_sort_algorithm)]
    pub algorithm: SortAlgorithm,

    /// Values to sort (default: [sort] values from config)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

/// Arguments for the traverse command.
#[derive(Args, Debug)]
pub struct TraverseArgs {
    /// Traversal: dfs, bfs
    #[arg(value_parser = parse_traversal)]
    pub algorithm: TraversalAlgorithm,

    /// Start vertex (default: [graph] start, or the first vertex of --edge)
    #[arg(long, value_parser = parse_vertex)]
    pub start: Option<String>,

    /// Edge as FROM,TO; repeat to build the graph instead of using config
    #[arg(long = "edge", value_parser = parse_edge)]
    pub edges: Vec<EdgeSpec>,
}

/// Arguments for the dijkstra command.
#[derive(Args, Debug)]
pub struct DijkstraArgs {
    /// Source vertex (default: [dijkstra] source)
    #[arg(long, value_parser = parse_vertex)]
    pub source: Option<String>,

    /// Target vertex (default: [dijkstra] target)
    #[arg(long, value_parser = parse_vertex)]
    pub target: Option<String>,

    /// Weighted edge as FROM,TO,WEIGHT; repeat to replace the configured graph
    #[arg(long = "edge", value_parser = parse_edge)]
    pub edges: Vec<EdgeSpec>,
}

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Initial list contents, comma separated (default: [list] values)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub values: Vec<i64>,

    #[command(subcommand)]
    pub operation: ListOperation,
}

#[derive(Subcommand, Debug)]
pub enum ListOperation {
    /// Find the first node holding VALUE
    Search {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Insert VALUE (at the tail unless --at or --head is given)
    Insert {
        #[arg(allow_negative_numbers = true)]
        value: i64,

        /// Zero-based position for the new node
        #[arg(long, conflicts_with = "head")]
        at: Option<usize>,

        /// Insert at the head
        #[arg(long)]
        head: bool,
    },

    /// Delete the first node holding VALUE
    Delete {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Reverse the list in place
    Reverse,
}

/// Arguments for the tree command.
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Keys inserted in order, comma separated (default: [tree] values)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub values: Vec<i64>,

    #[command(subcommand)]
    pub operation: TreeOperation,
}

#[derive(Subcommand, Debug)]
pub enum TreeOperation {
    /// Insert a new key
    Insert {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Search for a key
    Search {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Delete a key
    Delete {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Left, root, right
    Inorder,

    /// Root, left, right
    Preorder,

    /// Left, right, root
    Postorder,
}

/// Arguments for the analysis command.
#[derive(Args, Debug)]
pub struct AnalysisArgs {
    /// Topic: linked-list, bst, graph, dijkstra, sorting
    #[arg(value_parser = parse_topic)]
    pub topic: Topic,
}
