// File: src/config.rs
// Purpose: Declarative form schemas loaded from TOML

use std::fs;
use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use rusty_schema_validation::is_email;
use serde::Deserialize;

use crate::error::length_from;
use crate::form::FormSchema;
use crate::options::ValidateOptions;
use crate::password::{PasswordSchema, PasswordStrength};
use crate::rule::CustomRule;
use crate::schema::Schema;

/// A form definition: validation options plus one entry per field
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub options: ValidateOptions,

    #[serde(default)]
    pub fields: IndexMap<String, FieldConfig>,
}

/// Rules for one field
///
/// Lengths are signed so that a negative bound is reported as a range error
/// rather than a parse error. Values of the wrong type (`min = 1.5`,
/// `label = 3`) are rejected while parsing, as `anyhow` errors from
/// [`FormConfig::from_toml_str`], not as a `SchemaError`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    #[serde(default)]
    pub label: Option<String>,

    /// Start from a password preset
    #[serde(default)]
    pub password: Option<PasswordStrength>,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub min: Option<i64>,

    #[serde(default)]
    pub max: Option<i64>,

    #[serde(default)]
    pub digit: bool,

    #[serde(default)]
    pub symbol: bool,

    #[serde(default)]
    pub lowercase: bool,

    #[serde(default)]
    pub uppercase: bool,

    #[serde(default)]
    pub email: bool,

    #[serde(default)]
    pub pattern: Option<String>,

    /// Sibling field this one must equal
    #[serde(default)]
    pub matches: Option<String>,

    /// Custom messages keyed by rule name (`minimum`, `hasDigit`, ...)
    #[serde(default)]
    pub messages: IndexMap<String, String>,
}

impl FormConfig {
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        toml::from_str(source).context("Failed to parse form configuration")
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form configuration from {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid form configuration in {}", path.display()))
    }

    /// Build one schema per configured field, in file order
    pub fn build(&self) -> crate::Result<FormSchema> {
        self.fields
            .iter()
            .map(|(field, config)| config.build().map(|schema| (field.clone(), schema)))
            .collect()
    }
}

impl FieldConfig {
    pub fn build(&self) -> crate::Result<Schema> {
        let mut schema = match self.password {
            Some(strength) => PasswordSchema::new(strength).schema(),
            None => Schema::new(),
        };

        if let Some(label) = &self.label {
            schema = schema.label(label)?;
        }
        if self.required {
            schema = schema.is_required(self.message("isRequired"));
        }
        if let Some(min) = self.min {
            schema = schema.min(length_from(min)?, self.message("minimum"));
        }
        if let Some(max) = self.max {
            schema = schema.max(length_from(max)?, self.message("maximum"));
        }
        if self.digit {
            schema = schema.has_digit(self.message("hasDigit"));
        }
        if self.symbol {
            schema = schema.has_symbol(self.message("hasSymbol"));
        }
        if self.lowercase {
            schema = schema.has_lowercase(self.message("hasLowercase"));
        }
        if self.uppercase {
            schema = schema.has_uppercase(self.message("hasUppercase"));
        }
        if let Some(pattern) = &self.pattern {
            schema = schema.has_pattern_str(pattern, self.message("hasPattern"))?;
        }
        if self.email {
            let mut rule = CustomRule::new("isEmail")
                .message("must be a valid email address")
                .validator(|_, value, message| is_email(value, message));
            if let Some(message) = self.message("isEmail") {
                rule = rule.message(message);
            }
            schema = schema.add_validator(rule)?;
        }
        if let Some(target) = &self.matches {
            schema = schema.has_matching_property(target, self.message("matching"));
        }

        schema.check()?;
        Ok(schema)
    }

    fn message(&self, rule: &str) -> Option<&str> {
        self.messages.get(rule).map(String::as_str)
    }
}
