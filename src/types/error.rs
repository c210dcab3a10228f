//! Error types for the string-analyzer library.

use thiserror::Error;

/// All errors that can occur in the string-analyzer library.
#[derive(Error, Debug)]
pub enum StrsError {
    /// Invalid magic bytes in file header.
    #[error("Invalid magic bytes in file header")]
    InvalidMagic,

    /// Unsupported format version.
    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(u32),

    /// A record with the same value (and therefore the same id) already exists.
    #[error("String already exists with id {0}")]
    Duplicate(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Compression error.
    #[error("Compression error: {0}")]
    Compression(String),

    /// File is empty or truncated.
    #[error("File is empty or truncated")]
    Truncated,

    /// Corrupt data at a given offset.
    #[error("Corrupt data at offset {0}")]
    Corrupt(u64),

    /// Configuration file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type for string-analyzer operations.
pub type StrsResult<T> = Result<T, StrsError>;

/// A structured filter parameter that failed type checking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterParamError {
    #[error("is_palindrome must be 'true' or 'false'.")]
    InvalidBoolean,

    /// The named parameter is not an integer.
    #[error("{0} must be an integer.")]
    InvalidInteger(&'static str),

    #[error("contains_character must be a single character.")]
    InvalidCharacter,
}
