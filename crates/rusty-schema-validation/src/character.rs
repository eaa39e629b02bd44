//! Character-class validators

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Outcome;

static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());

static SYMBOL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).unwrap());

static LOWERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").unwrap());

static UPPERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());

/// Passes when the value contains at least one ASCII digit
pub fn has_digit(value: &str, message: Option<&str>) -> Outcome {
    Outcome::check(DIGIT_REGEX.is_match(value), message)
}

/// Passes when the value contains at least one of `!@#$%^&*(),.?":{}|<>`
pub fn has_symbol(value: &str, message: Option<&str>) -> Outcome {
    Outcome::check(SYMBOL_REGEX.is_match(value), message)
}

/// Passes when the value contains at least one ASCII lowercase letter
pub fn has_lowercase(value: &str, message: Option<&str>) -> Outcome {
    Outcome::check(LOWERCASE_REGEX.is_match(value), message)
}

/// Passes when the value contains at least one ASCII uppercase letter
pub fn has_uppercase(value: &str, message: Option<&str>) -> Outcome {
    Outcome::check(UPPERCASE_REGEX.is_match(value), message)
}
