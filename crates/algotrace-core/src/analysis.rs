//! Static complexity reference for each structure and algorithm

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, TraceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    LinkedList,
    Bst,
    Graph,
    Dijkstra,
    Sorting,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::LinkedList,
        Topic::Bst,
        Topic::Graph,
        Topic::Dijkstra,
        Topic::Sorting,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Topic::LinkedList => "linked-list",
            Topic::Bst => "bst",
            Topic::Graph => "graph",
            Topic::Dijkstra => "dijkstra",
            Topic::Sorting => "sorting",
        }
    }

    pub fn analysis(self) -> &'static Analysis {
        match self {
            Topic::LinkedList => &LINKED_LIST,
            Topic::Bst => &BST,
            Topic::Graph => &GRAPH,
            Topic::Dijkstra => &DIJKSTRA,
            Topic::Sorting => &SORTING,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        let wanted = match wanted.as_str() {
            "list" | "linkedlist" => "linked-list",
            "tree" => "bst",
            other => other,
        };
        Topic::ALL
            .into_iter()
            .find(|topic| topic.name() == wanted)
            .ok_or_else(|| {
                TraceError::unsupported(
                    "analysis topic",
                    s,
                    "linked-list, bst, graph, dijkstra, sorting",
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub operation: &'static str,
    pub bound: &'static str,
}

const fn op(operation: &'static str, bound: &'static str) -> Complexity {
    Complexity { operation, bound }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub name: &'static str,
    pub time_complexity: &'static [Complexity],
    pub space_complexity: &'static str,
    pub description: &'static str,
    pub use_cases: &'static [&'static str],
    pub advantages: &'static [&'static str],
    pub disadvantages: &'static [&'static str],
}

static LINKED_LIST: Analysis = Analysis {
    name: "Linked List",
    time_complexity: &[
        op("Insert at end", "O(n)"),
        op("Insert at head", "O(1)"),
        op("Delete by value", "O(n)"),
        op("Search", "O(n)"),
        op("Access by index", "O(n)"),
        op("Reverse", "O(n)"),
    ],
    space_complexity: "O(1) auxiliary",
    description: "Dynamic linear data structure with nodes connected via pointers",
    use_cases: &["Dynamic arrays", "Undo functionality", "Music playlists"],
    advantages: &["Dynamic size", "Efficient insertion/deletion at head"],
    disadvantages: &["No random access", "Extra memory for pointers"],
};

static BST: Analysis = Analysis {
    name: "Binary Search Tree",
    time_complexity: &[
        op("Insert", "O(log n) avg, O(n) worst"),
        op("Delete", "O(log n) avg, O(n) worst"),
        op("Search", "O(log n) avg, O(n) worst"),
        op("Traversal", "O(n)"),
    ],
    space_complexity: "O(log n) avg, O(n) worst",
    description: "Hierarchical structure with left < parent < right property",
    use_cases: &["Database indexing", "Expression parsing", "File systems"],
    advantages: &["Fast search", "Ordered traversal", "Dynamic size"],
    disadvantages: &["Can become unbalanced", "Complex deletion"],
};

static GRAPH: Analysis = Analysis {
    name: "Graph Traversal",
    time_complexity: &[
        op("DFS", "O(V + E)"),
        op("BFS", "O(V + E)"),
        op("Space (DFS)", "O(V)"),
        op("Space (BFS)", "O(V)"),
    ],
    space_complexity: "O(V) for visited array",
    description: "Systematic exploration of graph vertices and edges",
    use_cases: &["Path finding", "Connected components", "Topological sorting"],
    advantages: &["Complete exploration", "Cycle detection", "Component analysis"],
    disadvantages: &["Memory intensive", "Not optimal for weighted graphs"],
};

static DIJKSTRA: Analysis = Analysis {
    name: "Dijkstra's Algorithm",
    time_complexity: &[
        op("Basic implementation", "O(V²)"),
        op("With binary heap", "O((V + E) log V)"),
        op("With Fibonacci heap", "O(E + V log V)"),
    ],
    space_complexity: "O(V)",
    description: "Finds shortest path from source to all vertices in weighted graph",
    use_cases: &["GPS navigation", "Network routing", "Social networks"],
    advantages: &["Optimal solution", "Works with positive weights"],
    disadvantages: &["Cannot handle negative weights", "Memory intensive"],
};

static SORTING: Analysis = Analysis {
    name: "Sorting Algorithms",
    time_complexity: &[
        op("Insertion sort", "O(n) best, O(n²) avg and worst"),
        op("Merge sort", "O(n log n)"),
        op("Quick sort", "O(n log n) avg, O(n²) worst"),
    ],
    space_complexity: "Varies by algorithm (O(1) to O(n))",
    description: "Various algorithms for arranging elements in order",
    use_cases: &["Data organization", "Search optimization", "Database operations"],
    advantages: &[
        "Improved search efficiency",
        "Better data organization",
        "Optimized performance",
    ],
    disadvantages: &[
        "Time complexity varies",
        "Some require extra space",
        "Not always stable",
    ],
};
