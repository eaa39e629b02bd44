// File: src/schema.rs
// Purpose: Fluent rule registry for one string field

use regex::Regex;
use serde_json::Value;

use crate::error::{Result, SchemaError};
use crate::evaluate::{evaluate, skips_rules};
use crate::messages;
use crate::normalize::normalize;
use crate::options::ValidateOptions;
use crate::result::ValidationResult;
use crate::rule::{Check, CustomRule, Rule, RuleKey};

/// Validation rules for one string value
///
/// Builders consume and return the schema so calls chain. Rules run in the
/// order they were first registered; registering the same rule again
/// replaces it in place.
///
/// # Example
///
/// ```
/// use rusty_schema::{Schema, ValidateOptions};
///
/// let username = Schema::new()
///     .label("Username")
///     .unwrap()
///     .is_required(None)
///     .min(3, None)
///     .max(16, None);
///
/// let result = username.validate("al", &ValidateOptions::new().include_label(true)).unwrap();
/// assert!(!result.is_valid);
/// assert_eq!(result.errors, vec!["Username must be at least 3 character(s) long"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Schema {
    label: Option<String>,
    matching_property: Option<String>,
    rules: Vec<Rule>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema seeded with one custom rule
    pub fn with_validator(rule: CustomRule) -> Result<Self> {
        Self::new().add_validator(rule)
    }

    /// Create a schema seeded with several custom rules
    pub fn with_validators<I>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = CustomRule>,
    {
        Self::new().add_validators(rules)
    }

    /// Set the label used to prefix error messages
    pub fn label(self, value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(SchemaError::EmptyLabel);
        }
        Ok(self.with_label(value))
    }

    pub(crate) fn with_label(mut self, value: &str) -> Self {
        self.label = Some(value.to_string());
        self
    }

    pub fn min(self, length: usize, message: Option<&str>) -> Self {
        let message = message.map_or_else(|| messages::minimum(length), str::to_string);
        self.insert(Rule::new(RuleKey::Minimum, Check::Minimum(length), message))
    }

    pub fn max(self, length: usize, message: Option<&str>) -> Self {
        let message = message.map_or_else(|| messages::maximum(length), str::to_string);
        self.insert(Rule::new(RuleKey::Maximum, Check::Maximum(length), message))
    }

    pub fn is_required(self, message: Option<&str>) -> Self {
        let message = message.unwrap_or(messages::REQUIRED);
        self.insert(Rule::new(RuleKey::IsRequired, Check::Required, message))
    }

    pub fn has_digit(self, message: Option<&str>) -> Self {
        let message = message.unwrap_or(messages::DIGIT);
        self.insert(Rule::new(RuleKey::HasDigit, Check::Digit, message))
    }

    pub fn has_symbol(self, message: Option<&str>) -> Self {
        let message = message.unwrap_or(messages::SYMBOL);
        self.insert(Rule::new(RuleKey::HasSymbol, Check::Symbol, message))
    }

    pub fn has_lowercase(self, message: Option<&str>) -> Self {
        let message = message.unwrap_or(messages::LOWERCASE);
        self.insert(Rule::new(RuleKey::HasLowercase, Check::Lowercase, message))
    }

    pub fn has_uppercase(self, message: Option<&str>) -> Self {
        let message = message.unwrap_or(messages::UPPERCASE);
        self.insert(Rule::new(RuleKey::HasUppercase, Check::Uppercase, message))
    }

    pub fn has_pattern(self, pattern: Regex, message: Option<&str>) -> Self {
        let message = message.unwrap_or(messages::PATTERN);
        self.insert(Rule::new(RuleKey::HasPattern, Check::Pattern(pattern), message))
    }

    /// Like [`Schema::has_pattern`], compiling the pattern from a string
    pub fn has_pattern_str(self, pattern: &str, message: Option<&str>) -> Result<Self> {
        let pattern = Regex::new(pattern)?;
        Ok(self.has_pattern(pattern, message))
    }

    /// Require the value to equal the sibling field `name`
    ///
    /// The expected value is resolved when a form is validated. While a
    /// matching rule is set, every other rule except `is_required` is skipped.
    pub fn has_matching_property(mut self, name: &str, message: Option<&str>) -> Self {
        let message = message.map_or_else(|| messages::matching(name), str::to_string);
        self.matching_property = Some(name.to_string());
        self.insert(Rule::new(RuleKey::Matching, Check::Matching, message))
    }

    /// Sibling field this schema must match, if any
    pub fn matching_property(&self) -> Option<&str> {
        self.matching_property.as_deref()
    }

    pub fn add_validator(self, rule: CustomRule) -> Result<Self> {
        let rule = Rule::try_from(rule)?;
        Ok(self.insert(rule))
    }

    /// Register several custom rules in order
    ///
    /// Fails on the first descriptor without a validator; nothing is registered then.
    pub fn add_validators<I>(self, rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = CustomRule>,
    {
        let rules = rules
            .into_iter()
            .map(Rule::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(rules.into_iter().fold(self, Schema::insert))
    }

    /// Keys of the registered rules, in evaluation order
    pub fn rule_keys(&self) -> impl Iterator<Item = &RuleKey> {
        self.rules.iter().map(|rule| &rule.key)
    }

    /// Run the coherence checks without evaluating a value
    pub fn check(&self) -> Result<()> {
        normalize(&self.rules).map(|_| ())
    }

    /// Validate a value
    ///
    /// A schema with a matching rule can only be evaluated through a form or
    /// [`Schema::validate_against`]; here it fails with `NoMatchingProperty`
    /// unless the value is blank and optional, in which case no rule runs.
    pub fn validate(&self, value: &str, options: &ValidateOptions) -> Result<ValidationResult> {
        self.run(value, None, options)
    }

    /// Validate a value, using `matching_value` as the matching rule's expected value
    pub fn validate_against(
        &self,
        value: &str,
        matching_value: &str,
        options: &ValidateOptions,
    ) -> Result<ValidationResult> {
        self.run(value, Some(matching_value), options)
    }

    /// Validate an untyped value, rejecting anything that is not a string
    pub fn validate_json(&self, value: &Value, options: &ValidateOptions) -> Result<ValidationResult> {
        let value = value.as_str().ok_or(SchemaError::NotAString)?;
        self.validate(value, options)
    }

    fn run(
        &self,
        value: &str,
        matching: Option<&str>,
        options: &ValidateOptions,
    ) -> Result<ValidationResult> {
        let rules = normalize(&self.rules)?;

        let unresolved = matching.is_none()
            && !skips_rules(value, &rules)
            && rules.iter().any(|rule| matches!(rule.check, Check::Matching));
        if unresolved {
            let property = self.matching_property.clone().unwrap_or_default();
            return Err(SchemaError::NoMatchingProperty(property));
        }

        Ok(evaluate(value, self.label.as_deref(), &rules, matching, options))
    }

    fn insert(mut self, rule: Rule) -> Self {
        match self.rules.iter_mut().find(|existing| existing.key == rule.key) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
        self
    }
}
