//! String analysis: derives a [`PropertySet`] from raw text.

use std::collections::{BTreeMap, HashSet};

use sha2::{Digest, Sha256};

use crate::types::PropertySet;

/// Compute every property of `value`.
///
/// Total over all inputs: the empty string yields zero counts, an empty
/// frequency map, `is_palindrome == true`, and the digest of zero bytes.
pub fn analyze(value: &str) -> PropertySet {
    let unique: HashSet<char> = value.chars().collect();

    PropertySet {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: unique.len(),
        word_count: value.split_whitespace().count(),
        content_hash: content_hash(value),
        character_frequency: character_frequency(value),
    }
}

/// Lowercase hex SHA-256 of the UTF-8 bytes of `value`.
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// Only ASCII spaces are dropped; punctuation and other whitespace still count.
fn is_palindrome(value: &str) -> bool {
    let folded: Vec<char> = value.replace(' ', "").to_lowercase().chars().collect();
    folded.iter().eq(folded.iter().rev())
}

fn character_frequency(value: &str) -> BTreeMap<char, usize> {
    let mut freq = BTreeMap::new();
    for c in value.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}
