use crate::error::{AlgoError, Result};

/// KMP failure function.
///
/// `table[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it. The first entry is always 0 and no entry
/// exceeds its own index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable {
    table: Vec<usize>,
}

impl PatternTable {
    pub fn build(pattern: &[char]) -> Result<Self> {
        if pattern.is_empty() {
            return Err(AlgoError::invalid_input(
                "cannot build a pattern table for an empty pattern",
            ));
        }

        let mut table = vec![0; pattern.len()];
        let mut j = 0;
        let mut i = 1;

        // Each fallback strictly shrinks j, so the loop is linear overall.
        while i < pattern.len() {
            if pattern[i] == pattern[j] {
                table[i] = j + 1;
                j += 1;
                i += 1;
            } else if j > 0 {
                j = table[j - 1];
            } else {
                table[i] = 0;
                i += 1;
            }
        }

        Ok(PatternTable { table })
    }

    pub fn for_pattern(pattern: &str) -> Result<Self> {
        let chars: Vec<char> = pattern.chars().collect();
        Self::build(&chars)
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.table.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.table
    }
}

impl std::ops::Index<usize> for PatternTable {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.table[index]
    }
}
