//! Value parsers that turn core parse errors into clap messages

use algotrace_core::analysis::Topic;
use algotrace_core::engine::{SortAlgorithm, TraversalAlgorithm};
use algotrace_core::format::OutputFormat;
use algotrace_core::graph::{normalize_vertex_id, parse_edge_spec, EdgeSpec};

pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

pub fn parse_sort_algorithm(s: &str) -> std::result::Result<SortAlgorithm, String> {
    s.parse::<SortAlgorithm>().map_err(|e| e.to_string())
}

pub fn parse_traversal(s: &str) -> std::result::Result<TraversalAlgorithm, String> {
    s.parse::<TraversalAlgorithm>().map_err(|e| e.to_string())
}

pub fn parse_topic(s: &str) -> std::result::Result<Topic, String> {
    s.parse::<Topic>().map_err(|e| e.to_string())
}

pub fn parse_edge(s: &str) -> std::result::Result<EdgeSpec, String> {
    parse_edge_spec(s).map_err(|e| e.to_string())
}

pub fn parse_vertex(s: &str) -> std::result::Result<String, String> {
    normalize_vertex_id(s).map_err(|e| e.to_string())
}
