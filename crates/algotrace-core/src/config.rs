//! Configuration for algotrace
//!
//! Stored as TOML in `algotrace.toml` in the working directory unless a path
//! is given explicitly.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TraceError};
use crate::graph::{normalize_vertex_id, Graph};

pub use types::{
    DijkstraConfig, GraphConfig, ListConfig, PlaybackConfig, SortConfig, TraceConfig,
    TreeConfig, CONFIG_FILE_NAME,
};

impl TraceConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TraceConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Resolve the configuration for a run
    ///
    /// An explicit path must exist. Without one, `algotrace.toml` in `dir` is
    /// used when present and defaults otherwise.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(TraceError::not_found("config file", path.display()));
            }
            return Self::load(path);
        }

        let default_path: PathBuf = dir.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            tracing::debug!(dir = %dir.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TraceError::Invariant(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl GraphConfig {
    pub fn build(&self) -> Result<Graph> {
        Graph::build(&self.vertices, &self.edges)
    }

    /// Start vertex with the same normalization as the graph's ids
    pub fn start_vertex(&self) -> Result<String> {
        normalize_vertex_id(&self.start)
    }
}

impl DijkstraConfig {
    pub fn build(&self) -> Result<Graph> {
        Graph::build(&self.vertices, &self.edges)
    }

    /// Normalized `(source, target)`
    pub fn endpoints(&self) -> Result<(String, String)> {
        Ok((
            normalize_vertex_id(&self.source)?,
            normalize_vertex_id(&self.target)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{sample_traversal_graph, sample_weighted_graph};
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = TraceConfig::default();
        assert_eq!(config.playback.delay_ms, 0);
        assert_eq!(config.sort.values, vec![64, 34, 25, 12, 22, 11, 90]);
        assert_eq!(config.list.values, vec![10, 20, 30]);
        assert_eq!(config.tree.values, vec![50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(config.graph.start, "A");
        assert_eq!(config.dijkstra.target, "E");
    }

    #[test]
    fn test_default_graphs_match_samples() {
        let config = TraceConfig::default();
        assert_eq!(config.graph.build().unwrap(), sample_traversal_graph().unwrap());
        assert_eq!(config.dijkstra.build().unwrap(), sample_weighted_graph().unwrap());
    }

    #[test]
    fn test_lowercase_endpoints_are_normalized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("algotrace.toml");
        fs::write(
            &path,
            "[graph]\nvertices = [\"a\", \"b\"]\nstart = \" a \"\nedges = [\"a,b\"]\n\n\
             [dijkstra]\nvertices = [\"a\", \"b\"]\nsource = \"a\"\ntarget = \"b\"\nedges = [\"a,b,3\"]\n",
        )
        .unwrap();

        let loaded = TraceConfig::load(&path).unwrap();
        let graph = loaded.graph.build().unwrap();
        let start = loaded.graph.start_vertex().unwrap();
        assert_eq!(start, "A");
        assert!(graph.contains(&start));

        let (source, target) = loaded.dijkstra.endpoints().unwrap();
        assert_eq!((source.as_str(), target.as_str()), ("A", "B"));
        assert!(loaded.dijkstra.build().unwrap().contains(&target));

        let mut blank = loaded.graph.clone();
        blank.start = "  ".to_string();
        assert!(matches!(
            blank.start_vertex().unwrap_err(),
            TraceError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("algotrace.toml");

        let mut config = TraceConfig::default();
        config.playback.delay_ms = 250;
        config.sort.values = vec![3, 2, 1];
        config.save(&path).unwrap();

        let loaded = TraceConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("algotrace.toml");
        fs::write(&path, "[dijkstra]\ntarget = \"C\"\n").unwrap();

        let loaded = TraceConfig::load(&path).unwrap();
        assert_eq!(loaded.dijkstra.target, "C");
        assert_eq!(loaded.dijkstra.source, "A");
        assert_eq!(loaded.sort, SortConfig::default());
    }

    #[test]
    fn test_discover() {
        let dir = tempdir().unwrap();

        let config = TraceConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config, TraceConfig::default());

        fs::write(dir.path().join(CONFIG_FILE_NAME), "[list]\nvalues = [1]\n").unwrap();
        let config = TraceConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.list.values, vec![1]);

        let missing = dir.path().join("nope.toml");
        let err = TraceConfig::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, TraceError::NotFound { .. }));
    }

    #[test]
    fn test_malformed_file_is_toml_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("algotrace.toml");
        fs::write(&path, "[sort]\nvalues = \"nope\"\n").unwrap();

        let err = TraceConfig::load(&path).unwrap_err();
        assert!(matches!(err, TraceError::Toml(_)));
    }
}
