use std::marker::PhantomData;

use crate::error::{AlgoError, Result};

// =============================================================================
// Heap ordering markers
// =============================================================================

pub struct MinHeap;
pub struct MaxHeap;

pub trait HeapOrder {
    /// True when `child` must sit above `parent`.
    fn should_swap<T: Ord>(parent: &T, child: &T) -> bool;
}

impl HeapOrder for MinHeap {
    fn should_swap<T: Ord>(parent: &T, child: &T) -> bool {
        parent > child
    }
}

impl HeapOrder for MaxHeap {
    fn should_swap<T: Ord>(parent: &T, child: &T) -> bool {
        parent < child
    }
}

// =============================================================================
// Array-backed binary heap
// =============================================================================

pub struct PriorityQueue<T, Order = MinHeap> {
    items: Vec<T>,
    _order: PhantomData<Order>,
}

impl<T: Ord, Order: HeapOrder> Default for PriorityQueue<T, Order> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord, Order: HeapOrder> PriorityQueue<T, Order> {
    pub fn new() -> Self {
        PriorityQueue {
            items: Vec::new(),
            _order: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            items: Vec::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Elements in heap-array order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = Self::parent(i);
            if !Order::should_swap(&self.items[parent], &self.items[i]) {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
        i
    }

    fn sift_down(items: &mut [T], mut i: usize) {
        let len = items.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut swap_with = i;

            if left < len && Order::should_swap(&items[swap_with], &items[left]) {
                swap_with = left;
            }
            if right < len && Order::should_swap(&items[swap_with], &items[right]) {
                swap_with = right;
            }

            if swap_with == i {
                break;
            }

            items.swap(i, swap_with);
            i = swap_with;
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        let last = self.items.len() - 1;
        self.sift_up(last);
    }

    /// Removes and returns the head.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }

        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let result = self.items.pop();

        if !self.items.is_empty() {
            Self::sift_down(&mut self.items, 0);
        }

        result
    }

    /// Removes the first element equal to `value`, wherever it sits.
    pub fn remove(&mut self, value: &T) -> Result<T> {
        if self.items.is_empty() {
            return Err(AlgoError::EmptyCollection);
        }

        let index = self
            .items
            .iter()
            .position(|item| item == value)
            .ok_or_else(|| AlgoError::not_found("heap element"))?;

        let removed = self.items.swap_remove(index);

        // The element moved into `index` may violate the heap either way.
        if index < self.items.len() {
            let settled = self.sift_up(index);
            Self::sift_down(&mut self.items, settled);
        }

        Ok(removed)
    }

    /// O(n) heap construction.
    pub fn from_vec(mut vec: Vec<T>) -> Self {
        if !vec.is_empty() {
            let last_parent = (vec.len() / 2).saturating_sub(1);
            for idx in (0..=last_parent).rev() {
                Self::sift_down(&mut vec, idx);
            }
        }

        PriorityQueue {
            items: vec,
            _order: PhantomData,
        }
    }

    /// Drains the queue in priority order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

// =============================================================================
// Iterator integration
// =============================================================================

impl<T, Order> IntoIterator for PriorityQueue<T, Order>
where
    T: Ord,
    Order: HeapOrder,
{
    type Item = T;
    type IntoIter = IntoIter<T, Order>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

pub struct IntoIter<T, Order> {
    queue: PriorityQueue<T, Order>,
}

impl<T: Ord, Order: HeapOrder> Iterator for IntoIter<T, Order> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T: Ord, Order: HeapOrder> ExactSizeIterator for IntoIter<T, Order> {}

impl<T: Ord, Order: HeapOrder> FromIterator<T> for PriorityQueue<T, Order> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Ord, Order: HeapOrder> Extend<T> for PriorityQueue<T, Order> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
