//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::{SAMPLE_TRAVERSAL_EDGES, SAMPLE_VERTICES, SAMPLE_WEIGHTED_EDGES};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "algotrace.toml";

/// Inputs and playback settings for every command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub sort: SortConfig,

    #[serde(default)]
    pub list: ListConfig,

    #[serde(default)]
    pub tree: TreeConfig,

    /// Unweighted graph for DFS/BFS
    #[serde(default)]
    pub graph: GraphConfig,

    /// Weighted graph and endpoints for shortest paths
    #[serde(default)]
    pub dijkstra: DijkstraConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Pause between steps in human output; 0 prints everything at once
    #[serde(default)]
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    #[serde(default = "default_sort_values")]
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_list_values")]
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    #[serde(default = "default_tree_values")]
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Vertices added before any edge, fixing their order; endpoints not
    /// listed here are added as edges mention them
    #[serde(default = "default_vertices")]
    pub vertices: Vec<String>,

    #[serde(default = "default_start")]
    pub start: String,

    /// `A,B` edge specs
    #[serde(default = "default_traversal_edges")]
    pub edges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DijkstraConfig {
    #[serde(default = "default_vertices")]
    pub vertices: Vec<String>,

    #[serde(default = "default_start")]
    pub source: String,

    #[serde(default = "default_target")]
    pub target: String,

    /// `A,B,W` edge specs
    #[serde(default = "default_weighted_edges")]
    pub edges: Vec<String>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            values: default_sort_values(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            values: default_list_values(),
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            values: default_tree_values(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vertices: default_vertices(),
            start: default_start(),
            edges: default_traversal_edges(),
        }
    }
}

impl Default for DijkstraConfig {
    fn default() -> Self {
        Self {
            vertices: default_vertices(),
            source: default_start(),
            target: default_target(),
            edges: default_weighted_edges(),
        }
    }
}

fn default_sort_values() -> Vec<i64> {
    vec![64, 34, 25, 12, 22, 11, 90]
}

fn default_list_values() -> Vec<i64> {
    vec![10, 20, 30]
}

fn default_tree_values() -> Vec<i64> {
    vec![50, 30, 70, 20, 40, 60, 80]
}

fn default_vertices() -> Vec<String> {
    SAMPLE_VERTICES.iter().map(|v| v.to_string()).collect()
}

fn default_start() -> String {
    "A".to_string()
}

fn default_target() -> String {
    "E".to_string()
}

fn default_traversal_edges() -> Vec<String> {
    SAMPLE_TRAVERSAL_EDGES.iter().map(|e| e.to_string()).collect()
}

fn default_weighted_edges() -> Vec<String> {
    SAMPLE_WEIGHTED_EDGES.iter().map(|e| e.to_string()).collect()
}
