//! Classical string-search, graph-ordering and small data-structure
//! algorithms.
//!
//! # Layout
//!
//! - [`search`]: substring matchers (KMP, Rabin-Karp, brute force) behind
//!   the [`search::Matcher`] trait, plus the failure table and rolling hash
//!   they are built on.
//! - [`graph`]: adjacency-list graph and the component-hopping DFS ordering.
//! - [`trie`], [`soundex`], [`fenwick`], [`priority_queue`], [`hashmap`]:
//!   standalone structures and encoders.
//! - [`config`]: fixture configuration for the demo binaries.
//!
//! Everything here is synchronous and owns its working state for the length
//! of one call. Fallible entry points return [`Result`].

pub mod config;
pub mod error;
pub mod fenwick;
pub mod graph;
pub mod hashmap;
pub mod priority_queue;
pub mod search;
pub mod soundex;
pub mod trie;

pub use error::{AlgoError, Result};
pub use fenwick::FenwickTree;
pub use graph::{sample_graph, topological_sort, Graph};
pub use hashmap::OpenHashMap;
pub use priority_queue::{MaxHeap, MinHeap, PriorityQueue};
pub use search::{kmp, naive_search, rabin_karp, KmpMatcher, Matcher, NaiveMatcher, RabinKarpMatcher};
pub use soundex::soundex;
pub use trie::Trie;
