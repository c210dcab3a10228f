//! Record storage: the trait the request layer talks to, plus an in-memory implementation.

pub mod memory_store;

pub use memory_store::MemoryStore;

use crate::types::{FilterSet, StringRecord, StrsResult};

/// Storage for analyzed strings, at most one record per distinct value.
///
/// Mutation takes `&mut self`, so a store shared between threads sits behind a
/// lock and two concurrent creates of the same string serialize: the second
/// fails with [`crate::StrsError::Duplicate`].
pub trait RecordStore {
    /// Insert a new record. Fails with `Duplicate` if its value or id already exists.
    fn create(&mut self, record: StringRecord) -> StrsResult<&StringRecord>;

    /// Look up a record by its exact string value.
    fn get_by_value(&self, value: &str) -> Option<&StringRecord>;

    /// Look up a record by its content hash.
    fn get_by_id(&self, id: &str) -> Option<&StringRecord>;

    /// All records satisfying `filters`, newest first.
    fn filter(&self, filters: &FilterSet) -> Vec<&StringRecord>;

    /// Remove the record holding `value`, returning it.
    fn delete_by_value(&mut self, value: &str) -> Option<StringRecord>;

    /// All records, newest first.
    fn list(&self) -> Vec<&StringRecord> {
        self.filter(&FilterSet::new())
    }

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
