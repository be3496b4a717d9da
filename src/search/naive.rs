use super::Matcher;

/// Brute-force matcher: tries every start offset where the pattern still fits.
pub struct NaiveMatcher {
    pattern: Vec<char>,
}

impl NaiveMatcher {
    pub fn new(pattern: &str) -> Self {
        NaiveMatcher {
            pattern: pattern.chars().collect(),
        }
    }
}

impl Matcher for NaiveMatcher {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn pattern(&self) -> &[char] {
        &self.pattern
    }

    fn find(&self, text: &str) -> Option<usize> {
        let text: Vec<char> = text.chars().collect();
        let m = self.pattern.len();

        if m > text.len() {
            return None;
        }

        (0..=text.len() - m).find(|&start| {
            self.pattern
                .iter()
                .zip(&text[start..start + m])
                .all(|(p, t)| p == t)
        })
    }
}

pub fn naive_search(text: &str, pattern: &str) -> bool {
    NaiveMatcher::new(pattern).is_match(text)
}
