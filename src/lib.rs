//! Content-addressed string analysis with rule-based filters.
//!
//! Computes deterministic properties of strings (length, palindrome check,
//! character frequency, word count, SHA-256 content hash), stores one record
//! per distinct string keyed by its hash, and filters records either by
//! explicit parameters or by a small fixed set of English phrase patterns.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod index;
pub mod service;
pub mod store;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{analyze, content_hash, detect_conflict, matches, parse};
pub use format::{StoreReader, StoreWriter};
pub use index::{LengthIndex, PalindromeIndex, TemporalIndex, WordCountIndex};
pub use service::{ApiResponse, StatusCode, StringService};
pub use store::{MemoryStore, RecordStore};
pub use types::{
    now_micros, FilterParamError, FilterSet, PropertySet, StringRecord, StrsError, StrsResult,
    FORMAT_VERSION, HASH_HEX_LEN, STRS_MAGIC,
};
