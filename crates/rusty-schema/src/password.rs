// File: src/password.rs
// Purpose: Preset schemas for password strength tiers

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, SchemaError};
use crate::options::ValidateOptions;
use crate::result::ValidationResult;
use crate::schema::Schema;

const LABEL: &str = "Password";

/// Password strength tiers
///
/// - `Weak`: 4+ characters
/// - `Medium`: 6+ characters with a digit
/// - `Strong`: 8+ characters with a digit, a special character and a lowercase letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    #[default]
    Medium,
    Strong,
}

impl FromStr for PasswordStrength {
    type Err = SchemaError;

    /// Parse a strength tier from its name
    ///
    /// # Examples
    /// ```
    /// use rusty_schema::PasswordStrength;
    /// assert_eq!("weak".parse::<PasswordStrength>().unwrap(), PasswordStrength::Weak);
    /// assert_eq!("strong".parse::<PasswordStrength>().unwrap(), PasswordStrength::Strong);
    /// assert!("ultra".parse::<PasswordStrength>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self> {
        match value {
            "weak" => Ok(PasswordStrength::Weak),
            "medium" => Ok(PasswordStrength::Medium),
            "strong" => Ok(PasswordStrength::Strong),
            other => Err(SchemaError::InvalidStrength(other.to_string())),
        }
    }
}

impl TryFrom<u8> for PasswordStrength {
    type Error = SchemaError;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            1 => Ok(PasswordStrength::Weak),
            2 => Ok(PasswordStrength::Medium),
            3 => Ok(PasswordStrength::Strong),
            other => Err(SchemaError::InvalidStrength(other.to_string())),
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        };
        f.write_str(name)
    }
}

/// Password validation with a fixed preset per strength tier
///
/// # Example
///
/// ```
/// use rusty_schema::{PasswordSchema, PasswordStrength, ValidateOptions};
///
/// let password = PasswordSchema::new(PasswordStrength::Strong);
/// let result = password.validate("abc", &ValidateOptions::new().include_label(true)).unwrap();
/// assert_eq!(result.errors[0], "Password must be at least 8 character(s) long");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordSchema {
    strength: PasswordStrength,
}

impl PasswordSchema {
    pub fn new(strength: PasswordStrength) -> Self {
        Self { strength }
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    /// The preset as a plain schema, e.g. to place it in a form
    pub fn schema(&self) -> Schema {
        let schema = Schema::new().with_label(LABEL);

        match self.strength {
            PasswordStrength::Weak => schema.min(4, None),
            PasswordStrength::Medium => schema.min(6, None).has_digit(None),
            PasswordStrength::Strong => schema
                .min(8, None)
                .has_digit(None)
                .has_symbol(None)
                .has_lowercase(None),
        }
    }

    pub fn validate(&self, value: &str, options: &ValidateOptions) -> Result<ValidationResult> {
        self.schema().validate(value, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;
    use crate::rule::RuleKey;
    use pretty_assertions::assert_eq;

    fn validate(strength: PasswordStrength, value: &str) -> ValidationResult {
        PasswordSchema::new(strength)
            .validate(value, &ValidateOptions::default())
            .unwrap()
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(PasswordSchema::default().strength(), PasswordStrength::Medium);
    }

    #[test]
    fn test_weak_password() {
        assert!(validate(PasswordStrength::Weak, "abcd").is_valid);
        assert!(!validate(PasswordStrength::Weak, "abc").is_valid);
    }

    #[test]
    fn test_medium_password() {
        assert!(validate(PasswordStrength::Medium, "abcde1").is_valid);
        assert_eq!(
            validate(PasswordStrength::Medium, "abcdef").errors,
            vec![messages::DIGIT]
        );
        assert_eq!(validate(PasswordStrength::Medium, "abc1").errors.len(), 1);
    }

    #[test]
    fn test_strong_password() {
        assert!(validate(PasswordStrength::Strong, "Ab3!defg").is_valid);

        let result = PasswordSchema::new(PasswordStrength::Strong)
            .validate("abc", &ValidateOptions::new().include_rules(true))
            .unwrap();
        assert_eq!(
            result.errors,
            vec![messages::minimum(8), messages::DIGIT.to_string(), messages::SYMBOL.to_string()]
        );
        assert_eq!(result.passed(&RuleKey::HasLowercase), Some(true));
    }

    #[test]
    fn test_empty_password_is_optional() {
        assert!(validate(PasswordStrength::Strong, "").is_valid);
    }

    #[test]
    fn test_strength_parsing() {
        assert_eq!(PasswordStrength::try_from(1).unwrap(), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::try_from(3).unwrap(), PasswordStrength::Strong);
        assert!(matches!(
            PasswordStrength::try_from(4),
            Err(SchemaError::InvalidStrength(_))
        ));
        assert_eq!("medium".parse::<PasswordStrength>().unwrap().to_string(), "medium");
    }
}
