//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Outcome;

// Word characters are ASCII only; TLD segments are two or three characters.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_]+(-?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+(-?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$",
    )
    .unwrap()
});

/// Validates basic email format
///
/// Accepts `local@domain.tld` where the local and domain parts are word
/// characters optionally joined by single hyphens, followed by one or more
/// two- or three-character dot segments.
pub fn is_email(value: &str, message: Option<&str>) -> Outcome {
    Outcome::check(EMAIL_REGEX.is_match(value), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_email("abc@def.com", None).is_valid());
        assert!(is_email("user_name@example-domain.com", None).is_valid());
        assert!(is_email("first-last@mail.co.uk", None).is_valid());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(is_email("a", None), Outcome::Invalid(None));
        assert_eq!(
            is_email("a", Some("ERROR")),
            Outcome::Invalid(Some("ERROR".to_string()))
        );
        assert!(!is_email("", None).is_valid());
        assert!(!is_email("@example.com", None).is_valid());
        assert!(!is_email("user@example", None).is_valid());
        assert!(!is_email("user@@example.com", None).is_valid());
        assert!(!is_email("user@example.info", None).is_valid());
        assert!(!is_email("user--name@example.com", None).is_valid());
        assert!(!is_email("user.name@example.com", None).is_valid());
    }
}
