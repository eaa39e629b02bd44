// File: src/messages.rs
// Purpose: Default rule failure messages

pub const DIGIT: &str = "must include at least one digit";
pub const SYMBOL: &str = "must include at least one special character";
pub const PATTERN: &str = "does not match the pattern provided";
pub const MINIMUM: &str = "must be at least LENGTH character(s) long";
pub const MAXIMUM: &str = "must not be longer than LENGTH character(s)";
pub const MATCHING: &str = "does not match PROPERTY";
pub const REQUIRED: &str = "must not be empty";
pub const LOWERCASE: &str = "must include at least one lowercase character";
pub const UPPERCASE: &str = "must include at least one uppercase character";
pub const CUSTOM_VALIDATOR: &str = "must match given validator";

pub(crate) fn minimum(length: usize) -> String {
    MINIMUM.replace("LENGTH", &length.to_string())
}

pub(crate) fn maximum(length: usize) -> String {
    MAXIMUM.replace("LENGTH", &length.to_string())
}

pub(crate) fn matching(property: &str) -> String {
    MATCHING.replace("PROPERTY", property)
}

/// Prefix a message with the field label when requested
pub(crate) fn with_label(label: Option<&str>, message: &str, include_label: bool) -> String {
    match label {
        Some(label) if include_label => format!("{} {}", label, message),
        _ => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates() {
        assert_eq!(minimum(4), "must be at least 4 character(s) long");
        assert_eq!(maximum(10), "must not be longer than 10 character(s)");
        assert_eq!(matching("password"), "does not match password");
    }

    #[test]
    fn test_with_label() {
        assert_eq!(with_label(Some("Name"), REQUIRED, true), "Name must not be empty");
        assert_eq!(with_label(Some("Name"), REQUIRED, false), REQUIRED);
        assert_eq!(with_label(None, REQUIRED, true), REQUIRED);
    }
}
