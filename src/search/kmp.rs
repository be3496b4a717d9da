//! Knuth-Morris-Pratt search.
//!
//! The failure table is built once per pattern; the scan never moves
//! backwards in the text, so a search costs O(N) after O(M) preprocessing.

use super::pattern_table::PatternTable;
use super::Matcher;

pub struct KmpMatcher {
    pattern: Vec<char>,
    // None only for the empty pattern, which matches trivially.
    failure: Option<PatternTable>,
}

impl KmpMatcher {
    pub fn new(pattern: &str) -> Self {
        let pattern: Vec<char> = pattern.chars().collect();
        let failure = PatternTable::build(&pattern).ok();

        KmpMatcher { pattern, failure }
    }

    pub fn failure_table(&self) -> Option<&PatternTable> {
        self.failure.as_ref()
    }

    fn find_in(&self, text: &[char]) -> Option<usize> {
        let Some(failure) = &self.failure else {
            return Some(0);
        };

        let mut i = 0;
        let mut j = 0;

        while i < text.len() && j < self.pattern.len() {
            if text[i] == self.pattern[j] {
                i += 1;
                j += 1;
            } else if j != 0 {
                j = failure[j - 1];
            } else {
                i += 1;
            }
        }

        (j == self.pattern.len()).then(|| i - j)
    }

    /// Every (possibly overlapping) match offset, in order.
    pub fn find_all(&self, text: &str) -> Vec<usize> {
        let Some(failure) = &self.failure else {
            return vec![0];
        };

        let text: Vec<char> = text.chars().collect();
        let mut matches = Vec::new();
        let mut j = 0;

        for (i, &ch) in text.iter().enumerate() {
            while j > 0 && ch != self.pattern[j] {
                j = failure[j - 1];
            }

            if ch == self.pattern[j] {
                j += 1;
            }

            if j == self.pattern.len() {
                matches.push(i + 1 - j);
                j = failure[j - 1];
            }
        }

        matches
    }
}

impl Matcher for KmpMatcher {
    fn name(&self) -> &'static str {
        "kmp"
    }

    fn pattern(&self) -> &[char] {
        &self.pattern
    }

    fn find(&self, text: &str) -> Option<usize> {
        let text: Vec<char> = text.chars().collect();
        self.find_in(&text)
    }
}

/// True iff `pattern` occurs in `text`.
pub fn kmp(text: &str, pattern: &str) -> bool {
    KmpMatcher::new(pattern).is_match(text)
}
