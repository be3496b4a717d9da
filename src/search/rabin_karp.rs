use super::rolling_hash::{polynomial_hash, RollingHasher};
use super::Matcher;
use tracing::debug;

/// Rabin-Karp matcher. A hash hit is only a candidate: every candidate window
/// is compared char by char before it is reported.
pub struct RabinKarpMatcher {
    pattern: Vec<char>,
    pattern_hash: u64,
}

impl RabinKarpMatcher {
    pub fn new(pattern: &str) -> Self {
        let pattern: Vec<char> = pattern.chars().collect();
        let pattern_hash = polynomial_hash(&pattern);

        RabinKarpMatcher {
            pattern,
            pattern_hash,
        }
    }

    pub fn pattern_hash(&self) -> u64 {
        self.pattern_hash
    }
}

impl Matcher for RabinKarpMatcher {
    fn name(&self) -> &'static str {
        "rabin-karp"
    }

    fn pattern(&self) -> &[char] {
        &self.pattern
    }

    fn find(&self, text: &str) -> Option<usize> {
        if self.pattern.is_empty() {
            return Some(0);
        }

        let text: Vec<char> = text.chars().collect();
        // Pattern longer than text: no window exists.
        let mut hasher = RollingHasher::new(&text, self.pattern.len()).ok()?;

        loop {
            if hasher.hash() == self.pattern_hash {
                if hasher.window() == self.pattern.as_slice() {
                    return Some(hasher.start());
                }
                debug!(start = hasher.start(), "hash collision rejected");
            }

            if !hasher.roll() {
                return None;
            }
        }
    }
}

pub fn rabin_karp(text: &str, pattern: &str) -> bool {
    RabinKarpMatcher::new(pattern).is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURES: &[(&str, &str, bool)] = &[
        ("abxabcabcaby", "abcaby", true),
        ("abcbcglx", "bcgl", true),
        ("abcxabcdabxabcdabcdabcy", "abcdabcy", true),
        ("aaaaab", "aab", true),
        ("abcdabce", "bcc", false),
        ("abcdefgh", "def", true),
        ("hello world", "hell test", false),
        ("hello world", "hello", true),
        ("hello world", "ello worl", true),
        ("abedabc", "abc", true),
        ("abcdabce", "bce", true),
        ("ccaccaaedba", "dba", true),
        ("ccaccaaedba", "dbacadadadadpakdakpdapdpadpadpkakpd", false),
    ];

    #[test]
    fn test_fixtures() {
        for &(text, pattern, expected) in FIXTURES {
            assert_eq!(
                rabin_karp(text, pattern),
                expected,
                "Expected {} for string \"{}\" using pattern \"{}\"",
                expected,
                text,
                pattern
            );
        }
    }

    #[test]
    fn test_find_offsets() {
        assert_eq!(RabinKarpMatcher::new("dba").find("ccaccaaedba"), Some(8));
        assert_eq!(RabinKarpMatcher::new("abc").find("abedabc"), Some(4));
        assert_eq!(RabinKarpMatcher::new("bcc").find("abcdabce"), None);
    }

    #[test]
    fn test_self_match_and_empty_inputs() {
        assert!(rabin_karp("ello worl", "ello worl"));
        assert!(rabin_karp("abc", ""));
        assert!(rabin_karp("", ""));
        assert!(!rabin_karp("", "a"));
    }

    #[test]
    fn test_collision_is_verified() {
        // [1, 3] hashes to 1 + 3*3 = 10, and so does [4, 2] = 4 + 2*3
        let code = |c: u32| char::from_u32(c).unwrap();
        let pattern: String = [code(1), code(3)].iter().collect();
        let decoy: String = [code(4), code(2)].iter().collect();

        let matcher = RabinKarpMatcher::new(&pattern);
        assert_eq!(matcher.pattern_hash(), 10);
        assert_eq!(RabinKarpMatcher::new(&decoy).pattern_hash(), 10);

        assert!(!matcher.is_match(&decoy));
        assert_eq!(matcher.find(&format!("{}{}", decoy, pattern)), Some(2));
    }
}
