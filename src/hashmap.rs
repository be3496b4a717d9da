//! String-keyed hash map with open addressing and linear probing.
//!
//! The slot table is always a power of two so probing can wrap with a mask.
//! Inserting a new key into a table at 3/4 load doubles the table first.

use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

use tracing::debug;

use crate::error::{AlgoError, Result};

pub struct OpenHashMap<V, S = RandomState> {
    slots: Vec<Option<(String, V)>>,
    occupied: usize,
    max_load: usize,
    hasher: S,
}

fn max_load_for(capacity: usize) -> usize {
    capacity * 3 / 4
}

impl<V> OpenHashMap<V, RandomState> {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<V, S: BuildHasher> OpenHashMap<V, S> {
    /// `capacity` is rounded up to the next power of two.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Result<Self> {
        if capacity == 0 {
            return Err(AlgoError::InvalidCapacity);
        }

        let capacity = capacity.next_power_of_two();
        Ok(OpenHashMap {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            occupied: 0,
            max_load: max_load_for(capacity),
            hasher,
        })
    }

    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.occupied as f64 / self.capacity() as f64
    }

    fn mask(&self) -> usize {
        self.slots.len() - 1
    }

    fn home(&self, key: &str) -> usize {
        (self.hasher.hash_one(key) as usize) & self.mask()
    }

    // Slot holding `key`, or the first free slot on its probe path.
    fn probe(&self, key: &str) -> (usize, bool) {
        let mask = self.mask();
        let mut i = self.home(key);

        loop {
            match &self.slots[i] {
                None => return (i, false),
                Some((existing, _)) if existing == key => return (i, true),
                Some(_) => i = (i + 1) & mask,
            }
        }
    }

    fn rehash(&mut self) {
        let new_capacity = self.slots.len() * 2;
        debug!(from = self.slots.len(), to = new_capacity, "rehashing");

        let old = std::mem::replace(
            &mut self.slots,
            std::iter::repeat_with(|| None).take(new_capacity).collect(),
        );
        self.max_load = max_load_for(new_capacity);

        for (key, value) in old.into_iter().flatten() {
            let (slot, _) = self.probe(&key);
            self.slots[slot] = Some((key, value));
        }
    }

    /// Inserts or updates `key`. Returns the previous value on update.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>> {
        let key = key.into();
        if key.is_empty() {
            return Err(AlgoError::EmptyKey);
        }

        let (slot, found) = self.probe(&key);
        if found {
            let previous = self.slots[slot]
                .as_mut()
                .map(|(_, existing)| std::mem::replace(existing, value));
            return Ok(previous);
        }

        let slot = if self.occupied >= self.max_load {
            self.rehash();
            self.probe(&key).0
        } else {
            slot
        };

        self.slots[slot] = Some((key, value));
        self.occupied += 1;
        Ok(None)
    }

    pub fn get(&self, key: &str) -> Result<Option<&V>> {
        if key.is_empty() {
            return Err(AlgoError::EmptyKey);
        }

        let (slot, found) = self.probe(key);
        Ok(if found {
            self.slots[slot].as_ref().map(|(_, value)| value)
        } else {
            None
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.slots
            .iter()
            .flatten()
            .map(|(key, value)| (key.as_str(), value))
    }
}
