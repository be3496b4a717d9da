//! Binary indexed (Fenwick) tree over `i64` values.
//!
//! Positions are 1-indexed: slot `i` of the backing vector holds the sum of
//! the `lowbit(i)` values ending at position `i`.

use crate::error::{AlgoError, Result};

fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenwickTree {
    tree: Vec<i64>,
}

impl FenwickTree {
    /// Tree of `len` zeros.
    pub fn new(len: usize) -> Self {
        FenwickTree {
            tree: vec![0; len + 1],
        }
    }

    /// O(n) construction: each slot pushes its partial sum to its parent.
    pub fn from_slice(values: &[i64]) -> Self {
        let mut tree = vec![0; values.len() + 1];
        tree[1..].copy_from_slice(values);

        for i in 1..tree.len() {
            let parent = i + lowbit(i);
            if parent < tree.len() {
                tree[parent] += tree[i];
            }
        }

        FenwickTree { tree }
    }

    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self, index: usize) -> Result<()> {
        if index == 0 || index > self.len() {
            return Err(AlgoError::out_of_range(index, self.len()));
        }
        Ok(())
    }

    /// Sum of positions `1..=end`. `prefix_sum(0)` is 0.
    pub fn prefix_sum(&self, end: usize) -> Result<i64> {
        if end > self.len() {
            return Err(AlgoError::out_of_range(end, self.len()));
        }

        let mut sum = 0;
        let mut i = end;
        while i > 0 {
            sum += self.tree[i];
            i -= lowbit(i);
        }
        Ok(sum)
    }

    /// Sum of positions `start..=end`.
    pub fn range_sum(&self, start: usize, end: usize) -> Result<i64> {
        self.check(start)?;
        self.check(end)?;
        if start > end {
            return Err(AlgoError::invalid_input(format!(
                "range start {} is after end {}",
                start, end
            )));
        }

        Ok(self.prefix_sum(end)? - self.prefix_sum(start - 1)?)
    }

    /// Adds `delta` to the value at `index`.
    pub fn update(&mut self, index: usize, delta: i64) -> Result<()> {
        self.check(index)?;

        let mut i = index;
        while i < self.tree.len() {
            self.tree[i] += delta;
            i += lowbit(i);
        }
        Ok(())
    }

    /// Value currently stored at `index`.
    pub fn get(&self, index: usize) -> Result<i64> {
        self.range_sum(index, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const VALUES: [i64; 10] = [3, 2, 4, 0, 42, 33, -1, -2, 4, 4];

    fn naive_range(values: &[i64], start: usize, end: usize) -> i64 {
        values[start - 1..end].iter().sum()
    }

    #[test]
    fn test_range_sums_match_slice_sums() {
        let fenwick = FenwickTree::from_slice(&VALUES);

        assert_eq!(fenwick.range_sum(3, 10).unwrap(), naive_range(&VALUES, 3, 10));
        assert_eq!(fenwick.range_sum(3, 5).unwrap(), 46);
        assert_eq!(fenwick.range_sum(1, 10).unwrap(), 89);
        assert_eq!(fenwick.range_sum(5, 8).unwrap(), 72);
    }

    #[test]
    fn test_updates_shift_sums() {
        let mut fenwick = FenwickTree::from_slice(&VALUES);

        fenwick.update(5, -2).unwrap();
        assert_eq!(fenwick.range_sum(3, 5).unwrap(), 44);

        fenwick.update(6, 7).unwrap();
        assert_eq!(fenwick.range_sum(4, 7).unwrap(), 79);
        assert_eq!(fenwick.get(6).unwrap(), 40);
    }

    #[test]
    fn test_incremental_fill_equals_bulk_fill() {
        let mut incremental = FenwickTree::new(VALUES.len());
        for (i, &value) in VALUES.iter().enumerate() {
            incremental.update(i + 1, value).unwrap();
        }
        assert_eq!(incremental, FenwickTree::from_slice(&VALUES));
    }

    #[test]
    fn test_out_of_range() {
        let mut fenwick = FenwickTree::from_slice(&VALUES);

        assert_eq!(fenwick.range_sum(0, 3), Err(AlgoError::out_of_range(0, 10)));
        assert_eq!(fenwick.range_sum(1, 11), Err(AlgoError::out_of_range(11, 10)));
        assert_eq!(fenwick.update(11, 1), Err(AlgoError::out_of_range(11, 10)));
        assert!(matches!(
            fenwick.range_sum(5, 3),
            Err(AlgoError::InvalidInput { .. })
        ));
        assert_eq!(fenwick.prefix_sum(0), Ok(0));
    }

    #[test]
    fn test_random_ranges() {
        let mut rng = rand::thread_rng();
        let values: Vec<i64> = (0..10_000).map(|_| rng.gen_range(-1_000..=1_000)).collect();
        let fenwick = FenwickTree::from_slice(&values);

        for _ in 0..200 {
            let start = rng.gen_range(1..=values.len());
            let end = rng.gen_range(start..=values.len());
            assert_eq!(
                fenwick.range_sum(start, end).unwrap(),
                naive_range(&values, start, end),
                "range {}..={}",
                start,
                end
            );
        }
    }

    #[test]
    fn test_empty_tree() {
        let fenwick = FenwickTree::new(0);
        assert!(fenwick.is_empty());
        assert_eq!(fenwick.prefix_sum(0), Ok(0));
        assert!(fenwick.range_sum(1, 1).is_err());
    }
}
