//! Rusty-Schema-Validation
//!
//! Leaf string validators used by `rusty-schema` rules.
//!
//! Every validator follows the same call contract: the rule parameters come
//! first, then the value under test, then an optional failure message.
//!
//! ```
//! use rusty_schema_validation::{has_digit, Outcome};
//!
//! assert_eq!(has_digit("a1", None), Outcome::Valid);
//! assert_eq!(has_digit("a", None), Outcome::Invalid(None));
//! assert_eq!(
//!     has_digit("a", Some("needs a digit")),
//!     Outcome::Invalid(Some("needs a digit".to_string()))
//! );
//! ```

pub mod character;
pub mod email;
pub mod string;

// Re-export all validators
pub use character::*;
pub use email::*;
pub use string::*;

/// Result of a single leaf validator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The value satisfied the check
    Valid,

    /// The value failed; carries the caller's message when one was given
    Invalid(Option<String>),
}

impl Outcome {
    /// Build an outcome from a predicate result and the optional failure message
    pub fn check(passed: bool, message: Option<&str>) -> Self {
        if passed {
            Outcome::Valid
        } else {
            Outcome::Invalid(message.map(str::to_string))
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// Failure message, if the validator failed with one
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Invalid(Some(message)) => Some(message),
            _ => None,
        }
    }
}
