//! Prefix tree over `char`s.

use std::collections::HashMap;

#[derive(Default, Debug)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_end: bool,
}

#[derive(Default, Debug)]
pub struct Trie {
    root: TrieNode,
    words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `word`. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;

        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        if node.is_end {
            return false;
        }
        node.is_end = true;
        self.words += 1;
        true
    }

    /// Whole-word lookup.
    pub fn search(&self, word: &str) -> bool {
        self.find_node(word).map_or(false, |node| node.is_end)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;

        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }

        Some(node)
    }

    /// Unlinks `word`, pruning branches that no longer lead to any word.
    /// Returns whether the word was present.
    pub fn remove(&mut self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        let mut removed = false;
        Self::remove_recursive(&mut self.root, &chars, &mut removed);

        if removed {
            self.words -= 1;
        }
        removed
    }

    // Returns true when `node` has become dead and can be dropped by its parent.
    fn remove_recursive(node: &mut TrieNode, rest: &[char], removed: &mut bool) -> bool {
        match rest.split_first() {
            None => {
                if !node.is_end {
                    return false;
                }
                node.is_end = false;
                *removed = true;
            }
            Some((ch, tail)) => {
                let Some(child) = node.children.get_mut(ch) else {
                    return false;
                };
                if Self::remove_recursive(child, tail, removed) {
                    node.children.remove(ch);
                }
            }
        }

        !node.is_end && node.children.is_empty()
    }

    /// Every stored word beginning with `prefix`, sorted.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();

        if let Some(node) = self.find_node(prefix) {
            Self::collect_words(node, prefix.to_string(), &mut results);
        }

        results.sort();
        results
    }

    fn collect_words(node: &TrieNode, current: String, results: &mut Vec<String>) {
        if node.is_end {
            results.push(current.clone());
        }

        for (&ch, child) in &node.children {
            let mut next = current.clone();
            next.push(ch);
            Self::collect_words(child, next, results);
        }
    }

    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word);
        }
        trie
    }
}
