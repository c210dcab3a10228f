//! Derived properties of a single string.

use std::collections::BTreeMap;

use serde::Serialize;

/// The immutable bundle of facts computed from one input string.
///
/// Produced by [`crate::engine::analyze`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySet {
    /// Number of characters (code points, not bytes).
    pub length: usize,
    /// Whether the string, with spaces removed and case folded, reads the same reversed.
    pub is_palindrome: bool,
    /// Number of distinct characters (case-sensitive).
    pub unique_characters: usize,
    /// Number of whitespace-delimited tokens.
    pub word_count: usize,
    /// Lowercase hex SHA-256 of the UTF-8 bytes. Doubles as the record id.
    #[serde(rename = "sha256_hash")]
    pub content_hash: String,
    /// Occurrences of every character, spaces and punctuation included.
    #[serde(rename = "character_frequency_map")]
    pub character_frequency: BTreeMap<char, usize>,
}

impl PropertySet {
    /// Occurrences of `c` in the analyzed string.
    pub fn frequency(&self, c: char) -> usize {
        self.character_frequency.get(&c).copied().unwrap_or(0)
    }
}
