//! Query constraints over analyzed strings.

use serde::Serialize;

use crate::types::error::FilterParamError;

/// A set of optional constraints. Absent fields impose nothing; an empty set matches all.
///
/// Built either by the phrase interpreter ([`crate::engine::parse`]) or from
/// explicit query parameters ([`FilterSet::from_params`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    /// Inclusive upper bound on length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no constraint is present.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Build a filter set from raw query parameters, type-checking each recognized key.
    ///
    /// Unknown keys are ignored. Keys are checked in a fixed order
    /// (is_palindrome, min_length, max_length, word_count, contains_character)
    /// and the first malformed one is reported.
    pub fn from_params<'a, I>(params: I) -> Result<Self, FilterParamError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut palindrome = None;
        let mut min_length = None;
        let mut max_length = None;
        let mut word_count = None;
        let mut contains = None;

        for (key, value) in params {
            match key {
                "is_palindrome" => palindrome = Some(value),
                "min_length" => min_length = Some(value),
                "max_length" => max_length = Some(value),
                "word_count" => word_count = Some(value),
                "contains_character" => contains = Some(value),
                _ => {}
            }
        }

        let mut filters = Self::new();
        if let Some(raw) = palindrome {
            filters.is_palindrome = Some(parse_bool(raw)?);
        }
        if let Some(raw) = min_length {
            filters.min_length = Some(parse_int(raw, "min_length")?);
        }
        if let Some(raw) = max_length {
            filters.max_length = Some(parse_int(raw, "max_length")?);
        }
        if let Some(raw) = word_count {
            filters.word_count = Some(parse_int(raw, "word_count")?);
        }
        if let Some(raw) = contains {
            filters.contains_character = Some(parse_char(raw)?);
        }
        Ok(filters)
    }
}

fn parse_bool(raw: &str) -> Result<bool, FilterParamError> {
    match raw.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FilterParamError::InvalidBoolean),
    }
}

fn parse_int(raw: &str, name: &'static str) -> Result<i64, FilterParamError> {
    raw.trim()
        .parse()
        .map_err(|_| FilterParamError::InvalidInteger(name))
}

fn parse_char(raw: &str) -> Result<char, FilterParamError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(FilterParamError::InvalidCharacter),
    }
}
