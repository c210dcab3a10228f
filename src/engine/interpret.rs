//! Phrase interpreter mapping constrained English phrases to a [`FilterSet`].
//!
//! The interpreter is an ordered table of independent rules. Every rule is
//! tried against the lower-cased phrase and fires at most once; rules later
//! in the table overwrite fields set by earlier ones. This is pattern
//! matching, not language understanding; anything outside the table is
//! silently ignored.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::{FilterSet, PropertySet};

/// A single phrase rule: a pattern plus the effect applied when it matches.
struct Rule {
    pattern: Regex,
    apply: fn(&Captures<'_>, &mut FilterSet) -> Option<()>,
}

impl Rule {
    fn new(pattern: &str, apply: fn(&Captures<'_>, &mut FilterSet) -> Option<()>) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("rule pattern is a valid regex"),
            apply,
        }
    }
}

/// Rules in evaluation order. "first vowel" is last so it wins over "contains".
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(r"palindrom(?:e|ic)", |_, f| {
            f.is_palindrome = Some(true);
            Some(())
        }),
        Rule::new(r"single word", |_, f| {
            f.word_count = Some(1);
            Some(())
        }),
        // Strictly longer than N.
        Rule::new(r"longer than ([0-9]+)", |caps, f| {
            let n: i64 = caps[1].parse().ok()?;
            f.min_length = Some(n.checked_add(1)?);
            Some(())
        }),
        // Strictly shorter than N.
        Rule::new(r"shorter than ([0-9]+)", |caps, f| {
            let n: i64 = caps[1].parse().ok()?;
            f.max_length = Some(n - 1);
            Some(())
        }),
        Rule::new(r"contain(?:s|ing)\s+(?:letter\s+)?([a-z])", |caps, f| {
            f.contains_character = caps[1].chars().next();
            Some(())
        }),
        Rule::new(r"first vowel", |_, f| {
            f.contains_character = Some('a');
            Some(())
        }),
    ]
});

/// Translate a phrase into filters. Unrecognized phrases yield an empty set.
pub fn parse(phrase: &str) -> FilterSet {
    let lowered = phrase.to_lowercase();
    let mut filters = FilterSet::new();
    for rule in RULES.iter() {
        if let Some(caps) = rule.pattern.captures(&lowered) {
            // A rule whose capture does not fit the filter type leaves it unset.
            let _ = (rule.apply)(&caps, &mut filters);
        }
    }
    filters
}

/// True when the length bounds cannot both hold (`min_length > max_length`).
pub fn detect_conflict(filters: &FilterSet) -> bool {
    matches!(
        (filters.min_length, filters.max_length),
        (Some(min), Some(max)) if min > max
    )
}

/// Whether a string with the given properties satisfies every present filter.
///
/// `contains_character` is tested against the raw `value`, not the frequency map.
pub fn matches(value: &str, properties: &PropertySet, filters: &FilterSet) -> bool {
    let length = properties.length as i64;

    if let Some(wanted) = filters.is_palindrome {
        if properties.is_palindrome != wanted {
            return false;
        }
    }
    if let Some(min) = filters.min_length {
        if length < min {
            return false;
        }
    }
    if let Some(max) = filters.max_length {
        if length > max {
            return false;
        }
    }
    if let Some(count) = filters.word_count {
        if properties.word_count as i64 != count {
            return false;
        }
    }
    if let Some(c) = filters.contains_character {
        if !value.contains(c) {
            return false;
        }
    }
    true
}
