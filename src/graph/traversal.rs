//! Explicit-stack DFS ordering with component hopping.
//!
//! Each node moves through `unseen -> seen (pending) -> emitted` and never
//! back. A node is emitted the second time it is popped, after everything
//! pushed above it has been processed, which gives a post-order emission.
//!
//! When the work stack runs dry on an already-seen node, the first unseen
//! key (in insertion order) is pushed so that disconnected components are
//! visited too. The result is a post-order labelling, not a guaranteed
//! topological order across components.

use super::Graph;
use crate::error::{AlgoError, Result};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

/// Walks `graph` from `start` and returns nodes in emission order.
///
/// Fails with [`AlgoError::NodeNotFound`] when `start` is not a key.
pub fn topological_sort(graph: &Graph, start: &str) -> Result<Vec<String>> {
    let start_successors = graph
        .successors(start)
        .ok_or_else(|| AlgoError::node_not_found(start))?;

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut emitted: FxHashSet<&str> = FxHashSet::default();
    let mut stack: Vec<String> = Vec::with_capacity(graph.len());

    seen.insert(start);
    let mut nodes: Vec<&str> = std::iter::once(start)
        .chain(start_successors.iter().map(String::as_str))
        .collect();

    while let Some(node) = nodes.pop() {
        if nodes.is_empty() && seen.contains(node) {
            match graph.nodes().find(|key| !seen.contains(key)) {
                Some(unseen) => {
                    debug!(from = node, next = unseen, "component exhausted, picking unseen node");
                    nodes.push(unseen);
                }
                None => trace!(node, "no unseen nodes left"),
            }
        }

        if seen.contains(node) {
            if emitted.insert(node) {
                trace!(node, "emit");
                stack.push(node.to_string());
            }
            continue;
        }

        seen.insert(node);
        nodes.push(node);
        // Missing keys are leaves.
        if let Some(children) = graph.successors(node) {
            nodes.extend(children.iter().map(String::as_str));
        }
    }

    Ok(stack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::sample_graph;

    fn order(graph: &Graph, start: &str) -> Vec<String> {
        topological_sort(graph, start).unwrap()
    }

    #[test]
    fn test_sample_graph_from_a() {
        let graph = sample_graph();
        assert_eq!(
            order(&graph, "a"),
            vec!["h", "g", "f", "e", "c", "a", "d", "b"]
        );
    }

    #[test]
    fn test_sample_graph_from_b() {
        let graph = sample_graph();
        assert_eq!(
            order(&graph, "b"),
            vec!["g", "f", "d", "h", "e", "c", "b", "a"]
        );
    }

    #[test]
    fn test_every_key_emitted_once() {
        let graph = sample_graph();
        for start in graph.nodes() {
            let result = order(&graph, start);
            let mut sorted = result.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), result.len(), "duplicate emitted from {}", start);
            assert_eq!(result.len(), graph.len(), "missing node from {}", start);
        }
    }

    #[test]
    fn test_children_emitted_before_parent_within_component() {
        let graph = sample_graph();
        let result = order(&graph, "a");
        let pos = |n: &str| result.iter().position(|x| x == n).unwrap();

        for (parent, child) in [("a", "c"), ("c", "e"), ("e", "f"), ("e", "h"), ("f", "g")] {
            assert!(pos(child) < pos(parent), "{} emitted before {}", parent, child);
        }
    }

    #[test]
    fn test_missing_start_node() {
        let graph = sample_graph();
        let err = topological_sort(&graph, "z").unwrap_err();
        assert_eq!(err, AlgoError::node_not_found("z"));
    }

    #[test]
    fn test_dangling_successor_is_a_leaf() {
        let graph: Graph = [("a", vec!["ghost"])].into_iter().collect();
        assert_eq!(order(&graph, "a"), vec!["ghost", "a"]);
    }

    #[test]
    fn test_cycle_terminates() {
        let graph: Graph = [("a", vec!["b"]), ("b", vec!["a"])].into_iter().collect();
        // a is re-popped from under b's push before b itself is finished
        assert_eq!(order(&graph, "a"), vec!["a", "b"]);
    }

    #[test]
    fn test_isolated_nodes_are_hopped_to() {
        let graph: Graph = ["x", "y", "z"]
            .into_iter()
            .map(|node| (node, Vec::<&str>::new()))
            .collect();
        assert_eq!(order(&graph, "y"), vec!["y", "x", "z"]);
    }
}
