//! Writes .strs files from an in-memory store.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::store::{MemoryStore, RecordStore};
use crate::types::error::{StrsError, StrsResult};
use crate::types::header::{FileHeader, HEADER_SIZE};
use crate::types::StringRecord;

use super::compression::compress_value;
use super::{DIGEST_SIZE, RECORD_ENTRY_SIZE};

/// Writer for .strs binary files.
pub struct StoreWriter;

impl StoreWriter {
    /// Write a complete store to a .strs file, creating parent directories as needed.
    ///
    /// The file is written to a sibling `.tmp` path and renamed over `path`;
    /// a failed write leaves the previous file in place.
    pub fn write_to_file(store: &MemoryStore, path: &Path) -> StrsResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let temp_path = temp_path_for(path);
        let result = std::fs::File::create(&temp_path)
            .map_err(StrsError::from)
            .and_then(|file| {
                let mut writer = std::io::BufWriter::new(file);
                Self::write_to(store, &mut writer)?;
                writer.get_ref().sync_all()?;
                Ok(())
            });
        if let Err(e) = result {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e);
        }
        std::fs::rename(&temp_path, path)?;
        debug!("wrote {} records to {}", store.len(), path.display());
        Ok(())
    }

    /// Write a complete store to any writer. Records are written oldest first.
    pub fn write_to(store: &MemoryStore, writer: &mut impl Write) -> StrsResult<()> {
        let records = store.records_in_insertion_order();
        let record_count = records.len() as u64;

        // Step 1: Compress all values and record their offsets
        let mut compressed: Vec<Vec<u8>> = Vec::with_capacity(records.len());
        let mut offsets: Vec<u64> = Vec::with_capacity(records.len());
        let mut content_total: u64 = 0;
        for record in &records {
            let bytes = compress_value(&record.value);
            offsets.push(content_total);
            content_total += bytes.len() as u64;
            compressed.push(bytes);
        }

        // Step 2: Header (the record table follows it directly)
        let header = FileHeader {
            record_count,
            content_block_offset: HEADER_SIZE + record_count * RECORD_ENTRY_SIZE,
            ..FileHeader::new()
        };
        header.write_to(writer)?;

        // Step 3: Record table
        for (i, record) in records.iter().enumerate() {
            write_record_entry(writer, record, offsets[i], compressed[i].len() as u32)?;
        }

        // Step 4: Content block
        for bytes in &compressed {
            writer.write_all(bytes)?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// `store.strs` becomes `store.strs.tmp` in the same directory.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write a single 56-byte record entry.
fn write_record_entry(
    writer: &mut impl Write,
    record: &StringRecord,
    content_offset: u64,
    content_length: u32,
) -> StrsResult<()> {
    let digest = hex::decode(&record.id).map_err(|_| StrsError::Corrupt(0))?;
    if digest.len() != DIGEST_SIZE {
        return Err(StrsError::Corrupt(0));
    }
    writer.write_all(&digest)?; // 32 bytes
    writer.write_all(&record.created_at.to_le_bytes())?; // 8 bytes
    writer.write_all(&content_offset.to_le_bytes())?; // 8 bytes
    writer.write_all(&content_length.to_le_bytes())?; // 4 bytes
    writer.write_all(&[0u8; 4])?; // 4 bytes padding
                                  // Total: 32+8+8+4+4 = 56
    Ok(())
}
