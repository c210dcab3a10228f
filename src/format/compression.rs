//! LZ4 value compression/decompression.

use crate::types::error::{StrsError, StrsResult};

/// Compress a stored value with LZ4 (size prepended for decompression).
pub fn compress_value(value: &str) -> Vec<u8> {
    lz4_flex::compress_prepend_size(value.as_bytes())
}

/// Decompress LZ4-compressed bytes back to a UTF-8 string.
pub fn decompress_value(data: &[u8]) -> StrsResult<String> {
    let bytes = lz4_flex::decompress_size_prepended(data)
        .map_err(|e| StrsError::Compression(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| StrsError::Compression(e.to_string()))
}
