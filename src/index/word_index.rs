//! Index by word count, mapping each count to sorted slots.

use std::collections::HashMap;

/// Maps each word count to a sorted list of slots.
pub struct WordCountIndex {
    index: HashMap<usize, Vec<u64>>,
}

impl WordCountIndex {
    /// Create a new, empty word count index.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
        }
    }

    /// All slots with exactly `count` words.
    pub fn get(&self, count: usize) -> &[u64] {
        self.index
            .get(&count)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Incrementally add a record.
    pub fn add(&mut self, slot: u64, count: usize) {
        let list = self.index.entry(count).or_default();
        let pos = list.binary_search(&slot).unwrap_or_else(|p| p);
        list.insert(pos, slot);
    }

    /// Remove a record from the index.
    pub fn remove(&mut self, slot: u64, count: usize) {
        if let Some(list) = self.index.get_mut(&count) {
            if let Ok(pos) = list.binary_search(&slot) {
                list.remove(pos);
            }
            if list.is_empty() {
                self.index.remove(&count);
            }
        }
    }

    /// Clear the index.
    pub fn clear(&mut self) {
        self.index.clear();
    }

    /// Number of distinct word counts present.
    pub fn distinct_counts(&self) -> usize {
        self.index.len()
    }
}

impl Default for WordCountIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorted slots of every palindromic record.
pub struct PalindromeIndex {
    slots: Vec<u64>,
}

impl PalindromeIndex {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn slots(&self) -> &[u64] {
        &self.slots
    }

    pub fn add(&mut self, slot: u64) {
        let pos = self.slots.binary_search(&slot).unwrap_or_else(|p| p);
        self.slots.insert(pos, slot);
    }

    pub fn remove(&mut self, slot: u64) {
        if let Ok(pos) = self.slots.binary_search(&slot) {
            self.slots.remove(pos);
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for PalindromeIndex {
    fn default() -> Self {
        Self::new()
    }
}
