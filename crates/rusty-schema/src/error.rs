// File: src/error.rs
// Purpose: Configuration and input errors raised by schemas and forms

use thiserror::Error;

/// Broad category of a [`SchemaError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong kind of input (a non-string value, a non-object form)
    Type,
    /// A bound outside its allowed range
    Range,
    /// A schema or form that cannot be evaluated as configured
    Configuration,
}

/// Errors raised while building or evaluating schemas
///
/// Rule failures are never errors; they are reported in the result's
/// message list. These variants cover malformed configuration or input only.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Input must be a string.")]
    NotAString,

    #[error("Form and schema must be objects.")]
    InvalidSchemaOrForm,

    #[error("Length cannot be negative.")]
    NegativeLength,

    #[error("Minimum length cannot be greater than the maximum length.")]
    MinOverMax { minimum: usize, maximum: usize },

    #[error("Label cannot be an empty string.")]
    EmptyLabel,

    #[error("Must include validator function.")]
    NoValidator { key: String },

    #[error("Custom rule key cannot be empty.")]
    EmptyRuleKey,

    #[error("No property {0} to match")]
    NoMatchingProperty(String),

    #[error("No schema for property {0}")]
    MissingSchema(String),

    #[error("Invalid password strength {0}. Use 'weak', 'medium', or 'strong'")]
    InvalidStrength(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl SchemaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchemaError::NotAString | SchemaError::InvalidSchemaOrForm => ErrorKind::Type,
            SchemaError::NegativeLength | SchemaError::MinOverMax { .. } => ErrorKind::Range,
            SchemaError::EmptyLabel
            | SchemaError::NoValidator { .. }
            | SchemaError::EmptyRuleKey
            | SchemaError::NoMatchingProperty(_)
            | SchemaError::MissingSchema(_)
            | SchemaError::InvalidStrength(_)
            | SchemaError::InvalidPattern(_) => ErrorKind::Configuration,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;

/// Convert a signed length from untyped input into a bound
pub(crate) fn length_from(value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| SchemaError::NegativeLength)
}
