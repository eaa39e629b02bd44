// File: src/rule.rs
// Purpose: Rule identities, inputs and custom rule descriptors

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use rusty_schema_validation::{self as leaf, Outcome};
use serde::{Serialize, Serializer};

use crate::error::SchemaError;
use crate::messages;

/// Signature shared by user-supplied validators
///
/// Called with the rule's input (if any), the value under test and the
/// rule's failure message.
pub type ValidatorFn =
    Arc<dyn Fn(Option<&RuleInput>, &str, Option<&str>) -> Outcome + Send + Sync>;

/// Identity of a rule within a schema
///
/// Registering a second rule with the same key replaces the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleKey {
    IsRequired,
    Minimum,
    Maximum,
    HasDigit,
    HasSymbol,
    HasLowercase,
    HasUppercase,
    HasPattern,
    Matching,
    Custom(String),
}

impl RuleKey {
    pub fn as_str(&self) -> &str {
        match self {
            RuleKey::IsRequired => "isRequired",
            RuleKey::Minimum => "minimum",
            RuleKey::Maximum => "maximum",
            RuleKey::HasDigit => "hasDigit",
            RuleKey::HasSymbol => "hasSymbol",
            RuleKey::HasLowercase => "hasLowercase",
            RuleKey::HasUppercase => "hasUppercase",
            RuleKey::HasPattern => "hasPattern",
            RuleKey::Matching => "matching",
            RuleKey::Custom(key) => key,
        }
    }
}

impl From<&str> for RuleKey {
    fn from(name: &str) -> Self {
        match name {
            "isRequired" => RuleKey::IsRequired,
            "minimum" => RuleKey::Minimum,
            "maximum" => RuleKey::Maximum,
            "hasDigit" => RuleKey::HasDigit,
            "hasSymbol" => RuleKey::HasSymbol,
            "hasLowercase" => RuleKey::HasLowercase,
            "hasUppercase" => RuleKey::HasUppercase,
            "hasPattern" => RuleKey::HasPattern,
            "matching" => RuleKey::Matching,
            custom => RuleKey::Custom(custom.to_string()),
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RuleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Auxiliary parameter handed to a validator before the value
#[derive(Debug, Clone)]
pub enum RuleInput {
    Length(usize),
    Pattern(Regex),
    Text(String),
}

/// Descriptor for a user-supplied rule
///
/// # Example
///
/// ```
/// use rusty_schema::{CustomRule, RuleInput, Schema};
/// use rusty_schema::validation::Outcome;
///
/// let no_spaces = CustomRule::new("noSpaces")
///     .message("must not contain spaces")
///     .validator(|_, value, message| Outcome::check(!value.contains(' '), message));
///
/// let schema = Schema::with_validator(no_spaces).unwrap();
/// ```
#[derive(Clone)]
pub struct CustomRule {
    key: String,
    input: Option<RuleInput>,
    message: Option<String>,
    validator: Option<ValidatorFn>,
}

impl CustomRule {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            input: None,
            message: None,
            validator: None,
        }
    }

    pub fn input(mut self, input: RuleInput) -> Self {
        self.input = Some(input);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(Option<&RuleInput>, &str, Option<&str>) -> Outcome + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl TryFrom<CustomRule> for Rule {
    type Error = SchemaError;

    fn try_from(custom: CustomRule) -> Result<Self, Self::Error> {
        if custom.key.trim().is_empty() {
            return Err(SchemaError::EmptyRuleKey);
        }
        let validator = custom
            .validator
            .ok_or_else(|| SchemaError::NoValidator { key: custom.key.clone() })?;

        Ok(Rule::new(
            RuleKey::from(custom.key.as_str()),
            Check::Custom {
                input: custom.input,
                validator,
            },
            custom
                .message
                .unwrap_or_else(|| messages::CUSTOM_VALIDATOR.to_string()),
        ))
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRule")
            .field("key", &self.key)
            .field("input", &self.input)
            .field("message", &self.message)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// What a registered rule checks
#[derive(Clone)]
pub(crate) enum Check {
    Required,
    Minimum(usize),
    Maximum(usize),
    Digit,
    Symbol,
    Lowercase,
    Uppercase,
    Pattern(Regex),
    /// Expected value is supplied per evaluation, never stored
    Matching,
    Custom {
        input: Option<RuleInput>,
        validator: ValidatorFn,
    },
}

/// A rule registered on a schema
#[derive(Clone)]
pub(crate) struct Rule {
    pub(crate) key: RuleKey,
    pub(crate) message: String,
    pub(crate) check: Check,
}

impl Rule {
    pub(crate) fn new(key: RuleKey, check: Check, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
            check,
        }
    }

    /// Run the rule's validator against `value`
    ///
    /// `matching` must be resolved by the caller whenever this is a matching rule.
    pub(crate) fn run(&self, value: &str, matching: Option<&str>) -> Outcome {
        let message = Some(self.message.as_str());

        match &self.check {
            Check::Required => leaf::is_required(value, message),
            Check::Minimum(length) => leaf::has_minimum(*length, value, message),
            Check::Maximum(length) => leaf::has_maximum(*length, value, message),
            Check::Digit => leaf::has_digit(value, message),
            Check::Symbol => leaf::has_symbol(value, message),
            Check::Lowercase => leaf::has_lowercase(value, message),
            Check::Uppercase => leaf::has_uppercase(value, message),
            Check::Pattern(pattern) => leaf::has_pattern(pattern, value, message),
            Check::Matching => leaf::matching(matching.unwrap_or_default(), value, message),
            Check::Custom { input, validator } => validator(input.as_ref(), value, message),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("key", &self.key)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
