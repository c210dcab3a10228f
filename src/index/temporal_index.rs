//! Temporal index: sorted (created_at, slot) pairs for newest-first listing.

/// Sorted list of (created_at, slot) pairs.
///
/// Slots increase with insertion order, so equal timestamps still order
/// by which record arrived last.
pub struct TemporalIndex {
    /// Sorted ascending.
    entries: Vec<(u64, u64)>,
}

impl TemporalIndex {
    /// Create a new, empty temporal index.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// All slots, newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().rev().map(|(_, slot)| *slot)
    }

    /// Incrementally add a record.
    pub fn add(&mut self, slot: u64, created_at: u64) {
        let entry = (created_at, slot);
        let pos = self.entries.partition_point(|e| *e < entry);
        self.entries.insert(pos, entry);
    }

    /// Remove a record from the index.
    pub fn remove(&mut self, slot: u64, created_at: u64) {
        if let Ok(pos) = self.entries.binary_search(&(created_at, slot)) {
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

impl Default for TemporalIndex {
    fn default() -> Self {
        Self::new()
    }
}
