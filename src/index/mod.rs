//! Secondary indexes over stored records. Each index is independent and incrementally updateable.

pub mod length_index;
pub mod temporal_index;
pub mod word_index;

pub use length_index::LengthIndex;
pub use temporal_index::TemporalIndex;
pub use word_index::{PalindromeIndex, WordCountIndex};
