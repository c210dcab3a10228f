//! In-memory record store with secondary indexes.

use std::collections::{HashMap, HashSet};

use log::debug;

use super::RecordStore;
use crate::index::{LengthIndex, PalindromeIndex, TemporalIndex, WordCountIndex};
use crate::types::{FilterSet, StringRecord, StrsError, StrsResult};

/// Records held in memory, addressed internally by insertion slot.
pub struct MemoryStore {
    /// Slot -> record.
    records: HashMap<u64, StringRecord>,
    /// Content hash -> slot.
    by_id: HashMap<String, u64>,
    /// Raw value -> slot. Enforces value uniqueness.
    by_value: HashMap<String, u64>,
    /// Next slot to assign.
    next_slot: u64,
    pub(crate) temporal_index: TemporalIndex,
    pub(crate) length_index: LengthIndex,
    pub(crate) word_index: WordCountIndex,
    pub(crate) palindrome_index: PalindromeIndex,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            by_id: HashMap::new(),
            by_value: HashMap::new(),
            next_slot: 0,
            temporal_index: TemporalIndex::new(),
            length_index: LengthIndex::new(),
            word_index: WordCountIndex::new(),
            palindrome_index: PalindromeIndex::new(),
        }
    }

    /// Build a store from records in insertion order (used by the reader).
    pub fn from_records(records: Vec<StringRecord>) -> StrsResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.create(record)?;
        }
        Ok(store)
    }

    /// Records in insertion order, oldest first (used by the writer).
    pub fn records_in_insertion_order(&self) -> Vec<&StringRecord> {
        let mut slots: Vec<u64> = self.records.keys().copied().collect();
        slots.sort_unstable();
        slots.iter().filter_map(|s| self.records.get(s)).collect()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
        self.by_id.clear();
        self.by_value.clear();
        self.temporal_index.clear();
        self.length_index.clear();
        self.word_index.clear();
        self.palindrome_index.clear();
    }

    /// Get the palindrome index.
    pub fn palindrome_index(&self) -> &PalindromeIndex {
        &self.palindrome_index
    }

    /// Get the word count index.
    pub fn word_index(&self) -> &WordCountIndex {
        &self.word_index
    }

    /// Narrow the candidate slots using the most selective index available.
    fn candidates(&self, filters: &FilterSet) -> Option<HashSet<u64>> {
        if let Some(count) = filters.word_count {
            let slots = usize::try_from(count)
                .map(|c| self.word_index.get(c).to_vec())
                .unwrap_or_default();
            return Some(slots.into_iter().collect());
        }
        if filters.min_length.is_some() || filters.max_length.is_some() {
            let slots = self
                .length_index
                .range(filters.min_length, filters.max_length);
            return Some(slots.into_iter().collect());
        }
        if filters.is_palindrome == Some(true) {
            return Some(self.palindrome_index.slots().iter().copied().collect());
        }
        None
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    fn create(&mut self, record: StringRecord) -> StrsResult<&StringRecord> {
        if self.by_value.contains_key(&record.value) || self.by_id.contains_key(&record.id) {
            return Err(StrsError::Duplicate(record.id));
        }

        let slot = self.next_slot;
        self.next_slot += 1;

        self.temporal_index.add(slot, record.created_at);
        self.length_index.add(slot, record.properties.length);
        self.word_index.add(slot, record.properties.word_count);
        if record.properties.is_palindrome {
            self.palindrome_index.add(slot);
        }
        self.by_id.insert(record.id.clone(), slot);
        self.by_value.insert(record.value.clone(), slot);
        debug!("stored record {} in slot {}", record.id, slot);

        let stored: &StringRecord = self.records.entry(slot).or_insert(record);
        Ok(stored)
    }

    fn get_by_value(&self, value: &str) -> Option<&StringRecord> {
        self.by_value
            .get(value)
            .and_then(|slot| self.records.get(slot))
    }

    fn get_by_id(&self, id: &str) -> Option<&StringRecord> {
        self.by_id.get(id).and_then(|slot| self.records.get(slot))
    }

    fn filter(&self, filters: &FilterSet) -> Vec<&StringRecord> {
        let candidates = self.candidates(filters);
        self.temporal_index
            .newest_first()
            .filter(|slot| candidates.as_ref().map_or(true, |c| c.contains(slot)))
            .filter_map(|slot| self.records.get(&slot))
            .filter(|record| record.matches(filters))
            .collect()
    }

    fn delete_by_value(&mut self, value: &str) -> Option<StringRecord> {
        let slot = self.by_value.remove(value)?;
        let record = self.records.remove(&slot)?;

        self.by_id.remove(&record.id);
        self.temporal_index.remove(slot, record.created_at);
        self.length_index.remove(slot, record.properties.length);
        self.word_index.remove(slot, record.properties.word_count);
        self.palindrome_index.remove(slot);
        debug!("deleted record {} from slot {}", record.id, slot);

        Some(record)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
