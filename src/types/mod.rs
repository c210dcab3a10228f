//! All data types for the string-analyzer library.

pub mod error;
pub mod filter;
pub mod header;
pub mod properties;
pub mod record;

pub use error::{FilterParamError, StrsError, StrsResult};
pub use filter::FilterSet;
pub use header::{FileHeader, HEADER_SIZE};
pub use properties::PropertySet;
pub use record::StringRecord;

/// Magic bytes at the start of every .strs file.
pub const STRS_MAGIC: [u8; 4] = [0x53, 0x54, 0x52, 0x53]; // "STRS"

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

/// Length of a content hash rendered as hex.
pub const HASH_HEX_LEN: usize = 64;

/// Returns the current time as Unix epoch microseconds.
pub fn now_micros() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}
