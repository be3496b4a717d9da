//! Fixture configuration for the demo binaries.
//!
//! A config lists substring-search cases and a graph to order. It can be
//! written as TOML or JSON:
//!
//! ```toml
//! [[search]]
//! text = "abxabcabcaby"
//! pattern = "abcaby"
//! expected = true
//!
//! [graph]
//! start = "a"
//!
//! [[graph.nodes]]
//! name = "a"
//! successors = ["c"]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, Result};
use crate::graph::{sample_graph, Graph};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCase {
    pub text: String,
    pub pattern: String,
    /// Known answer, when the case doubles as a regression check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<bool>,
}

impl SearchCase {
    pub fn new(text: &str, pattern: &str, expected: bool) -> Self {
        SearchCase {
            text: text.to_string(),
            pattern: pattern.to_string(),
            expected: Some(expected),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub name: String,
    #[serde(default)]
    pub successors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub start: String,
    #[serde(default)]
    pub nodes: Vec<NodeConfig>,
}

impl GraphConfig {
    pub fn to_graph(&self) -> Graph {
        self.nodes
            .iter()
            .map(|node| (node.name.as_str(), node.successors.iter().map(String::as_str)))
            .collect()
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        let graph = sample_graph();
        let nodes = graph
            .nodes()
            .map(|name| NodeConfig {
                name: name.to_string(),
                successors: graph.successors(name).unwrap_or_default().to_vec(),
            })
            .collect();

        GraphConfig {
            start: "a".to_string(),
            nodes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub search: Vec<SearchCase>,
    pub graph: GraphConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            search: vec![
                SearchCase::new("abxabcabcaby", "abcaby", true),
                SearchCase::new("abcdabce", "bcc", false),
                SearchCase::new("hello world", "hell test", false),
                SearchCase::new("hello world", "ello worl", true),
                SearchCase::new("ccaccaaedba", "dba", true),
                SearchCase::new("ccaccaaedba", "dbacadadadadpakdakpdapdpadpadpkakpd", false),
            ],
            graph: GraphConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Self::parse_toml(content, "<toml>")
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Self::parse_json(content, "<json>")
    }

    fn parse_toml(content: &str, origin: &str) -> Result<Self> {
        let config: DemoConfig =
            toml::from_str(content).map_err(|err| AlgoError::config(origin, err.to_string()))?;
        config.validate(origin)?;
        Ok(config)
    }

    fn parse_json(content: &str, origin: &str) -> Result<Self> {
        let config: DemoConfig = serde_json::from_str(content).map_err(|err| {
            AlgoError::config(
                origin,
                format!("line {}, column {}: {}", err.line(), err.column(), err),
            )
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    /// Reads a config file, choosing the format by extension. Files without a
    /// recognised extension are sniffed: a leading `{` means JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        let content = fs::read_to_string(path)
            .map_err(|err| AlgoError::config(origin.as_str(), format!("failed to read: {}", err)))?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::parse_json(&content, &origin),
            Some("toml") => Self::parse_toml(&content, &origin),
            _ if content.trim_start().starts_with('{') => Self::parse_json(&content, &origin),
            _ => Self::parse_toml(&content, &origin),
        }
    }

    /// Rejects graphs with duplicate node names or a start node that is not
    /// declared.
    pub fn validate(&self, origin: &str) -> Result<()> {
        let mut names = HashSet::new();
        for node in &self.graph.nodes {
            if !names.insert(node.name.as_str()) {
                return Err(AlgoError::config(
                    origin,
                    format!("duplicate graph node '{}'", node.name),
                ));
            }
        }

        if !names.contains(self.graph.start.as_str()) {
            return Err(AlgoError::config(
                origin,
                format!("start node '{}' is not declared in [graph]", self.graph.start),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::topological_sort;
    use std::io::Write;

    const TOML: &str = r#"
[[search]]
text = "hello world"
pattern = "hello"
expected = true

[[search]]
text = "abcdefgh"
pattern = "xyz"

[graph]
start = "x"

[[graph.nodes]]
name = "x"
successors = ["y"]

[[graph.nodes]]
name = "y"
"#;

    #[test]
    fn test_default_matches_sample_graph() {
        let config = DemoConfig::default();
        assert_eq!(config.graph.to_graph(), sample_graph());
        assert_eq!(config.graph.start, "a");
        assert!(config.search.iter().all(|case| case.expected.is_some()));
        assert!(config.validate("<default>").is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config = DemoConfig::from_toml(TOML).unwrap();

        assert_eq!(config.search.len(), 2);
        assert_eq!(config.search[0].expected, Some(true));
        assert_eq!(config.search[1].expected, None);

        let graph = config.graph.to_graph();
        assert_eq!(topological_sort(&graph, &config.graph.start).unwrap(), vec!["y", "x"]);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "search": [{"text": "aaaaab", "pattern": "aab", "expected": true}],
            "graph": {"start": "p", "nodes": [{"name": "p", "successors": ["q"]}]}
        }"#;
        let config = DemoConfig::from_json(json).unwrap();
        assert_eq!(config.search[0], SearchCase::new("aaaaab", "aab", true));
        assert_eq!(config.graph.nodes[0].successors, vec!["q"]);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = DemoConfig::from_toml("").unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_json_error_reports_position() {
        let err = DemoConfig::from_json("{\n  \"search\": 5\n}").unwrap_err();
        match err {
            AlgoError::Config { origin, message } => {
                assert_eq!(origin, "<json>");
                assert!(message.starts_with("line 2"), "{}", message);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_validation_errors() {
        let undeclared = "[graph]\nstart = \"zz\"\n[[graph.nodes]]\nname = \"a\"\n";
        assert!(matches!(
            DemoConfig::from_toml(undeclared),
            Err(AlgoError::Config { .. })
        ));

        let duplicate =
            "[graph]\nstart = \"a\"\n[[graph.nodes]]\nname = \"a\"\n[[graph.nodes]]\nname = \"a\"\n";
        let err = DemoConfig::from_toml(duplicate).unwrap_err();
        assert!(err.to_string().contains("duplicate graph node 'a'"));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("demo.toml");
        fs::write(&toml_path, TOML).unwrap();
        assert_eq!(DemoConfig::load(&toml_path).unwrap().graph.start, "x");

        let json_path = dir.path().join("demo.json");
        let json = serde_json::to_string(&DemoConfig::default()).unwrap();
        fs::write(&json_path, json).unwrap();
        assert_eq!(DemoConfig::load(&json_path).unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_load_sniffs_unknown_extension() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&DemoConfig::default()).unwrap()).unwrap();
        assert_eq!(DemoConfig::load(file.path()).unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = DemoConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
