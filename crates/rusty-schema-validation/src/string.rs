//! Length, pattern, equality and presence validators

use regex::Regex;

use crate::Outcome;

/// Line terminators that make a value multi-line
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

fn single_line_length(value: &str) -> Option<usize> {
    if value.contains(&LINE_TERMINATORS[..]) {
        None
    } else {
        Some(value.chars().count())
    }
}

/// Passes when the value is a single line of at least `length` characters
pub fn has_minimum(length: usize, value: &str, message: Option<&str>) -> Outcome {
    let passed = single_line_length(value).is_some_and(|count| count >= length);
    Outcome::check(passed, message)
}

/// Passes when the value is a single line of at most `length` characters
pub fn has_maximum(length: usize, value: &str, message: Option<&str>) -> Outcome {
    let passed = single_line_length(value).is_some_and(|count| count <= length);
    Outcome::check(passed, message)
}

/// Passes when `pattern` matches anywhere in the value
pub fn has_pattern(pattern: &Regex, value: &str, message: Option<&str>) -> Outcome {
    Outcome::check(pattern.is_match(value), message)
}

/// Passes when the value is exactly `expected`
///
/// The expected value is compared literally; regex metacharacters in it
/// carry no special meaning.
pub fn matching(expected: &str, value: &str, message: Option<&str>) -> Outcome {
    Outcome::check(value == expected, message)
}

/// Passes when the value has at least one non-whitespace character
pub fn is_required(value: &str, message: Option<&str>) -> Outcome {
    Outcome::check(!value.trim().is_empty(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_validators() {
        assert_eq!(has_minimum(2, "ab", Some("ERROR")), Outcome::Valid);
        assert_eq!(has_minimum(2, "a", None), Outcome::Invalid(None));
        assert_eq!(has_maximum(2, "ab", Some("ERROR")), Outcome::Valid);
        assert_eq!(
            has_maximum(2, "abc", Some("ERROR")),
            Outcome::Invalid(Some("ERROR".to_string()))
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(has_maximum(3, "äöü", None).is_valid());
        assert!(has_minimum(3, "äöü", None).is_valid());
        assert!(!has_minimum(4, "äöü", None).is_valid());
    }

    #[test]
    fn test_length_rejects_multiline_values() {
        assert!(!has_minimum(1, "ab\ncd", None).is_valid());
        assert!(!has_maximum(10, "ab\r\ncd", None).is_valid());
        assert!(has_minimum(0, "", None).is_valid());
        assert!(has_maximum(0, "", None).is_valid());
    }

    #[test]
    fn test_pattern() {
        let pattern = Regex::new("abc").unwrap();
        assert_eq!(has_pattern(&pattern, "xabcx", None), Outcome::Valid);
        assert_eq!(
            has_pattern(&pattern, "def", Some("ERROR")),
            Outcome::Invalid(Some("ERROR".to_string()))
        );
    }

    #[test]
    fn test_matching_is_literal() {
        assert!(matching("abc$$", "abc$$", None).is_valid());
        assert!(!matching("abc$$", "a", None).is_valid());
        assert!(!matching("a.c", "abc", None).is_valid());
        assert!(!matching("abc", "abcd", None).is_valid());
    }

    #[test]
    fn test_required() {
        assert!(is_required("ab", None).is_valid());
        assert_eq!(is_required("", None), Outcome::Invalid(None));
        assert_eq!(
            is_required("   ", Some("ERROR")),
            Outcome::Invalid(Some("ERROR".to_string()))
        );
    }
}
