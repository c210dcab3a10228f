//! Pure computation: string analysis and phrase interpretation.

pub mod analyze;
pub mod interpret;

pub use analyze::{analyze, content_hash};
pub use interpret::{detect_conflict, matches, parse};
