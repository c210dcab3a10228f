//! Phase 2 tests: phrase interpretation, conflicts, matching, structured filters.

use string_analyzer::engine::{analyze, detect_conflict, matches, parse};
use string_analyzer::types::{FilterParamError, FilterSet, StringRecord};

// ==================== Helper ====================

fn record(value: &str) -> StringRecord {
    StringRecord::analyzed(value)
}

// ==================== Rule Tests ====================

#[test]
fn test_parse_palindrome() {
    assert_eq!(parse("palindrome").is_palindrome, Some(true));
    assert_eq!(parse("all palindromic strings").is_palindrome, Some(true));
    assert_eq!(parse("PALINDROMES please").is_palindrome, Some(true));
}

#[test]
fn test_parse_single_word() {
    let filters = parse("single word");
    assert_eq!(filters.word_count, Some(1));
    assert_eq!(filters.is_palindrome, None);
}

#[test]
fn test_parse_longer_than() {
    assert_eq!(parse("longer than 3 characters").min_length, Some(4));
    assert_eq!(parse("strings Longer Than 10").min_length, Some(11));
}

#[test]
fn test_parse_shorter_than() {
    assert_eq!(parse("shorter than 5").max_length, Some(4));
    assert_eq!(parse("shorter than 0").max_length, Some(-1));
}

#[test]
fn test_parse_contains_letter() {
    assert_eq!(parse("contains letter a").contains_character, Some('a'));
    assert_eq!(parse("strings containing z").contains_character, Some('z'));
    assert_eq!(parse("Contains the letter q").contains_character, Some('t'));
    assert_eq!(parse("contains X").contains_character, Some('x'));
}

#[test]
fn test_parse_contains_requires_a_letter() {
    assert_eq!(parse("contains 5").contains_character, None);
    assert_eq!(parse("contain a").contains_character, None);
}

#[test]
fn test_parse_first_vowel() {
    assert_eq!(parse("first vowel").contains_character, Some('a'));
}

#[test]
fn test_first_vowel_wins_over_contains() {
    let filters = parse("strings containing z and the first vowel");
    assert_eq!(filters.contains_character, Some('a'));
}

#[test]
fn test_parse_combined_phrase() {
    let filters = parse("all single word palindromic strings longer than 2");
    assert_eq!(filters.is_palindrome, Some(true));
    assert_eq!(filters.word_count, Some(1));
    assert_eq!(filters.min_length, Some(3));
    assert_eq!(filters.max_length, None);
    assert_eq!(filters.contains_character, None);
}

#[test]
fn test_parse_unrecognized_phrase_is_empty() {
    assert!(parse("").is_empty());
    assert!(parse("show me everything").is_empty());
}

#[test]
fn test_parse_oversized_number_is_ignored() {
    let filters = parse("longer than 99999999999999999999999");
    assert_eq!(filters.min_length, None);
}

#[test]
fn test_parse_uses_first_occurrence() {
    let filters = parse("longer than 2 or longer than 8");
    assert_eq!(filters.min_length, Some(3));
}

// ==================== Conflict Tests ====================

#[test]
fn test_detect_conflict() {
    assert!(detect_conflict(&parse("longer than 10 and shorter than 5")));
    assert!(!detect_conflict(&parse("longer than 3 and shorter than 10")));
    assert!(!detect_conflict(&parse("longer than 10")));
    assert!(!detect_conflict(&FilterSet::new()));
}

#[test]
fn test_equal_bounds_do_not_conflict() {
    let filters = FilterSet {
        min_length: Some(4),
        max_length: Some(4),
        ..FilterSet::new()
    };
    assert!(!detect_conflict(&filters));
}

#[test]
fn test_adjacent_bounds_conflict() {
    // "longer than 4" -> min 5, "shorter than 5" -> max 4
    assert!(detect_conflict(&parse("longer than 4 and shorter than 5")));
}

// ==================== Matching Tests ====================

#[test]
fn test_empty_filter_matches_everything() {
    let empty = FilterSet::new();
    for value in ["", "racecar", "hello world", "!!"] {
        let r = record(value);
        assert!(matches(&r.value, &r.properties, &empty));
    }
}

#[test]
fn test_match_each_filter() {
    let r = record("racecar");

    assert!(r.matches(&parse("palindrome")));
    assert!(r.matches(&parse("single word")));
    assert!(r.matches(&parse("longer than 6")));
    assert!(!r.matches(&parse("longer than 7")));
    assert!(r.matches(&parse("shorter than 8")));
    assert!(!r.matches(&parse("shorter than 7")));
    assert!(r.matches(&parse("contains letter e")));
    assert!(!r.matches(&parse("contains letter z")));
    assert!(r.matches(&parse("first vowel")));
}

#[test]
fn test_match_palindrome_false() {
    let filters = FilterSet {
        is_palindrome: Some(false),
        ..FilterSet::new()
    };
    assert!(record("hello").matches(&filters));
    assert!(!record("noon").matches(&filters));
}

#[test]
fn test_contains_checks_raw_value() {
    let filters = FilterSet {
        contains_character: Some(' '),
        ..FilterSet::new()
    };
    assert!(record("hello world").matches(&filters));
    assert!(!record("hello").matches(&filters));

    // Case-sensitive: the phrase rule only yields lowercase letters.
    assert!(!record("ABC").matches(&parse("contains letter a")));
}

#[test]
fn test_negative_bounds() {
    let r = record("abc");
    let below = FilterSet {
        max_length: Some(-1),
        ..FilterSet::new()
    };
    assert!(!r.matches(&below));
    let above = FilterSet {
        min_length: Some(-5),
        ..FilterSet::new()
    };
    assert!(r.matches(&above));
}

#[test]
fn test_matches_uses_given_properties() {
    let props = analyze("two words");
    assert!(matches("two words", &props, &parse("contains letter w")));
    assert!(!matches("two words", &props, &parse("single word")));
}

// ==================== Structured Parameter Tests ====================

#[test]
fn test_params_all_filters() {
    let filters = FilterSet::from_params([
        ("is_palindrome", "TRUE"),
        ("min_length", "2"),
        ("max_length", " 9 "),
        ("word_count", "1"),
        ("contains_character", "a"),
    ])
    .unwrap();

    assert_eq!(filters.is_palindrome, Some(true));
    assert_eq!(filters.min_length, Some(2));
    assert_eq!(filters.max_length, Some(9));
    assert_eq!(filters.word_count, Some(1));
    assert_eq!(filters.contains_character, Some('a'));
}

#[test]
fn test_params_ignore_unknown_keys() {
    let filters = FilterSet::from_params([("page", "2"), ("is_palindrome", "false")]).unwrap();
    assert_eq!(filters.is_palindrome, Some(false));
    assert_eq!(filters.min_length, None);
}

#[test]
fn test_params_reject_bad_boolean() {
    let err = FilterSet::from_params([("is_palindrome", "yes")]).unwrap_err();
    assert_eq!(err, FilterParamError::InvalidBoolean);
    assert_eq!(err.to_string(), "is_palindrome must be 'true' or 'false'.");
}

#[test]
fn test_params_reject_bad_integer() {
    let err = FilterSet::from_params([("min_length", "abc")]).unwrap_err();
    assert_eq!(err, FilterParamError::InvalidInteger("min_length"));
    assert_eq!(err.to_string(), "min_length must be an integer.");

    let err = FilterSet::from_params([("word_count", "1.5")]).unwrap_err();
    assert_eq!(err.to_string(), "word_count must be an integer.");
}

#[test]
fn test_params_accept_negative_integer() {
    let filters = FilterSet::from_params([("max_length", "-3")]).unwrap();
    assert_eq!(filters.max_length, Some(-3));
}

#[test]
fn test_params_reject_multi_character() {
    let err = FilterSet::from_params([("contains_character", "ab")]).unwrap_err();
    assert_eq!(err, FilterParamError::InvalidCharacter);
    let err = FilterSet::from_params([("contains_character", "")]).unwrap_err();
    assert_eq!(err, FilterParamError::InvalidCharacter);

    let filters = FilterSet::from_params([("contains_character", "é")]).unwrap();
    assert_eq!(filters.contains_character, Some('é'));
}

#[test]
fn test_params_report_first_bad_key_in_fixed_order() {
    let err =
        FilterSet::from_params([("contains_character", "xy"), ("min_length", "n")]).unwrap_err();
    assert_eq!(err, FilterParamError::InvalidInteger("min_length"));
}

#[test]
fn test_filter_json_has_only_present_keys() {
    let json = serde_json::to_value(parse("single word palindrome")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "is_palindrome": true, "word_count": 1 })
    );
}
