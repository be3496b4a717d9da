//! Directed graph stored as an adjacency list keyed by node label.
//!
//! Keys keep their insertion order; the traversal relies on that order when
//! it picks the next unvisited component. Successors need not be keys
//! themselves: a successor with no entry is a leaf.

pub mod traversal;

pub use traversal::topological_sort;

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    order: Vec<String>,
    adjacency: FxHashMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `node` with its out-edges. Re-inserting a node replaces its
    /// successors and keeps its original position.
    pub fn add_node<I, S>(&mut self, node: impl Into<String>, successors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let node = node.into();
        let successors = successors.into_iter().map(Into::into).collect();

        if self.adjacency.insert(node.clone(), successors).is_none() {
            self.order.push(node);
        }
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Out-edges of `node`, or `None` when the node is not a key.
    pub fn successors(&self, node: &str) -> Option<&[String]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    /// Keys in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl<K, I, S> FromIterator<(K, I)> for Graph
where
    K: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut graph = Graph::new();
        for (node, successors) in iter {
            graph.add_node(node, successors);
        }
        graph
    }
}

/// The eight-node dependency graph used by the demo and the tests.
///
/// ```text
/// a -> c        b -> c, d
/// c -> e        d -> f
/// e -> f, h     f -> g
/// ```
pub fn sample_graph() -> Graph {
    [
        ("a", vec!["c"]),
        ("b", vec!["c", "d"]),
        ("c", vec!["e"]),
        ("d", vec!["f"]),
        ("e", vec!["f", "h"]),
        ("f", vec!["g"]),
        ("g", vec![]),
        ("h", vec![]),
    ]
    .into_iter()
    .collect()
}
