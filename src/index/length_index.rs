//! Length index: sorted (length, slot) pairs for length-range queries.

/// Sorted list of (length, slot) pairs.
pub struct LengthIndex {
    entries: Vec<(usize, u64)>,
}

impl LengthIndex {
    /// Create a new, empty length index.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Slots whose length lies within `[min, max]`. Either bound may be open.
    ///
    /// Bounds are signed so that filters such as `max_length = -1` simply
    /// select nothing.
    pub fn range(&self, min: Option<i64>, max: Option<i64>) -> Vec<u64> {
        let lo = match min {
            Some(m) if m > 0 => self.entries.partition_point(|(len, _)| (*len as i64) < m),
            _ => 0,
        };
        let hi = match max {
            Some(m) if m < 0 => 0,
            Some(m) => self.entries.partition_point(|(len, _)| (*len as i64) <= m),
            None => self.entries.len(),
        };
        if lo >= hi {
            return Vec::new();
        }
        self.entries[lo..hi].iter().map(|(_, slot)| *slot).collect()
    }

    /// Incrementally add a record.
    pub fn add(&mut self, slot: u64, length: usize) {
        let entry = (length, slot);
        let pos = self.entries.partition_point(|e| *e < entry);
        self.entries.insert(pos, entry);
    }

    /// Remove a record from the index.
    pub fn remove(&mut self, slot: u64, length: usize) {
        if let Ok(pos) = self.entries.binary_search(&(length, slot)) {
            self.entries.remove(pos);
        }
    }

    /// Clear the index.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LengthIndex {
    fn default() -> Self {
        Self::new()
    }
}
