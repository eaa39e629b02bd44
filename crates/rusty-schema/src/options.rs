// File: src/options.rs
// Purpose: Options recognized by every validation entry point

use serde::Deserialize;

/// Validation options
///
/// All flags default to `false`. Deserializes from either snake_case or
/// camelCase keys so the same options can come from TOML or JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidateOptions {
    /// Stop at the first failing rule
    #[serde(alias = "abortEarly")]
    pub abort_early: bool,

    /// Attach the per-rule pass/fail map to the result
    #[serde(alias = "includeRules")]
    pub include_rules: bool,

    /// Prefix each error message with the schema's label
    #[serde(alias = "includeLabel")]
    pub include_label: bool,
}

impl ValidateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort_early(mut self, value: bool) -> Self {
        self.abort_early = value;
        self
    }

    pub fn include_rules(mut self, value: bool) -> Self {
        self.include_rules = value;
        self
    }

    pub fn include_label(mut self, value: bool) -> Self {
        self.include_label = value;
        self
    }
}
