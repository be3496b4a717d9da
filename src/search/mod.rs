//! Exact substring search.
//!
//! Three matchers share the [`Matcher`] trait:
//!
//! - [`KmpMatcher`]: failure-table automaton, O(N+M) worst case.
//! - [`RabinKarpMatcher`]: rolling hash with mandatory content verification,
//!   O(N+M) expected.
//! - [`NaiveMatcher`]: brute force, O(N*M); kept as a correctness oracle.
//!
//! Offsets are counted in `char`s, not bytes. An empty pattern matches every
//! text at offset 0.

pub mod kmp;
pub mod naive;
pub mod pattern_table;
pub mod rabin_karp;
pub mod rolling_hash;

pub use kmp::{kmp, KmpMatcher};
pub use naive::{naive_search, NaiveMatcher};
pub use pattern_table::PatternTable;
pub use rabin_karp::{rabin_karp, RabinKarpMatcher};
pub use rolling_hash::{polynomial_hash, RollingHasher};

pub trait Matcher {
    /// Short label used in demo output and test failure messages.
    fn name(&self) -> &'static str;

    /// The pattern this matcher was built for.
    fn pattern(&self) -> &[char];

    /// Offset of the first occurrence of the pattern in `text`.
    fn find(&self, text: &str) -> Option<usize>;

    fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }
}

/// Builds one matcher of each kind for `pattern`.
pub fn all_matchers(pattern: &str) -> Vec<Box<dyn Matcher>> {
    vec![
        Box::new(KmpMatcher::new(pattern)),
        Box::new(RabinKarpMatcher::new(pattern)),
        Box::new(NaiveMatcher::new(pattern)),
    ]
}
