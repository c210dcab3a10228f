//! Reads .strs files into an in-memory store.

use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::engine::analyze;
use crate::store::MemoryStore;
use crate::types::error::{StrsError, StrsResult};
use crate::types::header::{read_u64, FileHeader, HEADER_SIZE};
use crate::types::StringRecord;

use super::compression::decompress_value;
use super::{DIGEST_SIZE, RECORD_ENTRY_SIZE};

/// Reader for .strs binary files.
pub struct StoreReader;

impl StoreReader {
    /// Read a .strs file into a MemoryStore.
    pub fn read_from_file(path: &Path) -> StrsResult<MemoryStore> {
        let data = std::fs::read(path)?;
        let mut cursor = std::io::Cursor::new(data);
        Self::read_from(&mut cursor)
    }

    /// Read a .strs file, or start an empty store if the file does not exist yet.
    pub fn load_or_default(path: &Path) -> StrsResult<MemoryStore> {
        if !path.exists() {
            info!("{} does not exist, starting with an empty store", path.display());
            return Ok(MemoryStore::new());
        }
        Self::read_from_file(path)
    }

    /// Read from any reader into a MemoryStore.
    ///
    /// Properties are recomputed from each value; a value whose hash differs
    /// from its stored id is reported as corrupt.
    pub fn read_from(reader: &mut impl Read) -> StrsResult<MemoryStore> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        if (data.len() as u64) < HEADER_SIZE {
            return Err(StrsError::Truncated);
        }

        let header = FileHeader::read_from(&mut std::io::Cursor::new(&data[..]))?;
        let table_start = header.record_table_offset;
        let content_start = header.content_block_offset;

        let capacity = usize::try_from(header.record_count)
            .unwrap_or(usize::MAX)
            .min(data.len() / RECORD_ENTRY_SIZE as usize);
        let mut records = Vec::with_capacity(capacity);
        for i in 0..header.record_count {
            // Entry i starts at table_start + i * RECORD_ENTRY_SIZE.
            let offset = i
                .checked_mul(RECORD_ENTRY_SIZE)
                .and_then(|rel| table_start.checked_add(rel))
                .ok_or(StrsError::Corrupt(table_start))?;
            let entry_bytes = slice_at(&data, offset, RECORD_ENTRY_SIZE)?;
            let entry = parse_record_entry(entry_bytes);

            let start = content_start
                .checked_add(entry.content_offset)
                .ok_or(StrsError::Corrupt(offset))?;
            let compressed = slice_at(&data, start, u64::from(entry.content_length))?;
            let value = decompress_value(compressed)?;

            let properties = analyze(&value);
            if properties.content_hash != entry.id {
                return Err(StrsError::Corrupt(offset));
            }
            records.push(StringRecord::new(value, properties, entry.created_at));
        }

        debug!("read {} records", records.len());
        // A repeated value can only come from a damaged record table.
        MemoryStore::from_records(records).map_err(|e| match e {
            StrsError::Duplicate(_) => StrsError::Corrupt(table_start),
            other => other,
        })
    }
}

/// The `len` bytes at `offset`, or `Truncated` when they run past the end of `data`.
fn slice_at(data: &[u8], offset: u64, len: u64) -> StrsResult<&[u8]> {
    let end = offset.checked_add(len).ok_or(StrsError::Truncated)?;
    if end > data.len() as u64 {
        return Err(StrsError::Truncated);
    }
    // Both bounds fit in usize since end <= data.len().
    Ok(&data[offset as usize..end as usize])
}

/// A decoded record-table entry.
struct RecordEntry {
    id: String,
    created_at: u64,
    content_offset: u64,
    content_length: u32,
}

/// Parse a 56-byte record entry.
fn parse_record_entry(data: &[u8]) -> RecordEntry {
    let id = hex::encode(&data[0..DIGEST_SIZE]);
    let created_at = read_u64(data, 32);
    let content_offset = read_u64(data, 40);
    let content_length = u32::from_le_bytes([data[48], data[49], data[50], data[51]]);
    // bytes 52..56: padding

    RecordEntry {
        id,
        created_at,
        content_offset,
        content_length,
    }
}
