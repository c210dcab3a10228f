//! Binary file I/O for .strs store files.

pub mod compression;
pub mod reader;
pub mod writer;

pub use reader::StoreReader;
pub use writer::StoreWriter;

/// Size of a single record entry on disk: 56 bytes.
pub const RECORD_ENTRY_SIZE: u64 = 56;

/// Raw digest bytes stored per record.
pub(crate) const DIGEST_SIZE: usize = 32;
