// File: src/result.rs
// Purpose: Results returned by schema and form validation

use indexmap::IndexMap;
use serde::Serialize;

use crate::rule::RuleKey;

/// Pass/fail per executed rule, in execution order
pub type RuleMap = IndexMap<RuleKey, bool>;

/// Result of validating one value against a schema
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleMap>,
}

impl ValidationResult {
    pub(crate) fn new(errors: Vec<String>, rules: Option<RuleMap>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            rules,
        }
    }

    /// First error message, if any
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    /// Whether the rule passed; `None` when it was not executed or rules were not requested
    pub fn passed(&self, key: &RuleKey) -> Option<bool> {
        self.rules.as_ref().and_then(|rules| rules.get(key).copied())
    }
}

/// Result of validating a whole form
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResult {
    pub is_valid: bool,
    /// Messages for invalid fields only
    pub errors: IndexMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<IndexMap<String, RuleMap>>,
}

impl FormResult {
    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get first error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&String> {
        self.errors.get(field).and_then(|errors| errors.first())
    }

    /// Get all errors for a specific field
    pub fn get_errors(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}
