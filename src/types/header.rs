//! File header for .strs store files.

use std::io::{Read, Write};

use crate::types::error::{StrsError, StrsResult};
use crate::types::{FORMAT_VERSION, STRS_MAGIC};

/// Header of a .strs file. Fixed size: 32 bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileHeader {
    /// Magic bytes: [0x53, 0x54, 0x52, 0x53] ("STRS").
    pub magic: [u8; 4],
    /// Format version (currently 1).
    pub version: u32,
    /// Total number of records in the file.
    pub record_count: u64,
    /// Byte offset where the record table starts.
    pub record_table_offset: u64,
    /// Byte offset where the content block starts.
    pub content_block_offset: u64,
}

/// The fixed size of a FileHeader on disk: 32 bytes.
pub const HEADER_SIZE: u64 = 32;

impl FileHeader {
    /// Create a header for an empty file.
    pub fn new() -> Self {
        Self {
            magic: STRS_MAGIC,
            version: FORMAT_VERSION,
            record_count: 0,
            record_table_offset: HEADER_SIZE,
            content_block_offset: HEADER_SIZE,
        }
    }

    /// Write this header to the given writer. Writes exactly 32 bytes.
    ///
    /// Layout (all little-endian):
    /// - 0x00..0x04: magic (4 bytes)
    /// - 0x04..0x08: version (u32)
    /// - 0x08..0x10: record_count (u64)
    /// - 0x10..0x18: record_table_offset (u64)
    /// - 0x18..0x20: content_block_offset (u64)
    pub fn write_to(&self, writer: &mut impl Write) -> StrsResult<()> {
        writer.write_all(&self.magic)?;
        writer.write_all(&self.version.to_le_bytes())?;
        writer.write_all(&self.record_count.to_le_bytes())?;
        writer.write_all(&self.record_table_offset.to_le_bytes())?;
        writer.write_all(&self.content_block_offset.to_le_bytes())?;
        Ok(())
    }

    /// Read a header from the given reader. Reads exactly 32 bytes.
    pub fn read_from(reader: &mut impl Read) -> StrsResult<Self> {
        let mut buf = [0u8; HEADER_SIZE as usize];
        reader.read_exact(&mut buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                StrsError::Truncated
            } else {
                StrsError::Io(e)
            }
        })?;

        let magic = [buf[0], buf[1], buf[2], buf[3]];
        if magic != STRS_MAGIC {
            return Err(StrsError::InvalidMagic);
        }

        let version = u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
        if version != FORMAT_VERSION {
            return Err(StrsError::UnsupportedVersion(version));
        }

        Ok(Self {
            magic,
            version,
            record_count: read_u64(&buf, 8),
            record_table_offset: read_u64(&buf, 16),
            content_block_offset: read_u64(&buf, 24),
        })
    }
}


/// Read a little-endian u64 at `offset`. The caller guarantees 8 bytes are available.
pub(crate) fn read_u64(buf: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buf[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}
