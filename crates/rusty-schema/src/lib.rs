//! # rusty-schema
//!
//! Fluent validation schemas for string values and flat forms.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_schema::{validate_form, Form, FormSchema, Schema, ValidateOptions};
//!
//! let mut schemas = FormSchema::new();
//! schemas.insert(
//!     "password".to_string(),
//!     Schema::new().label("Password").unwrap().is_required(None).min(8, None).has_digit(None),
//! );
//! schemas.insert(
//!     "confirm".to_string(),
//!     Schema::new().has_matching_property("password", None),
//! );
//!
//! let mut form = Form::new();
//! form.insert("password".to_string(), "hunter2".to_string());
//! form.insert("confirm".to_string(), "hunter3".to_string());
//!
//! let result = validate_form(&form, &schemas, &ValidateOptions::new().include_label(true)).unwrap();
//! assert!(!result.is_valid);
//! assert_eq!(
//!     result.get_error("password").map(String::as_str),
//!     Some("Password must be at least 8 character(s) long")
//! );
//! assert_eq!(
//!     result.get_error("confirm").map(String::as_str),
//!     Some("does not match password")
//! );
//! ```
//!
//! ## Evaluation
//!
//! - Rules run in registration order; `abort_early` stops at the first failure.
//! - Without `is_required`, an empty or whitespace-only value is valid and no
//!   other rule runs.
//! - A matching rule is exclusive: only it and `is_required` run.
//! - A minimum above the maximum is a configuration error, raised on every
//!   validation.
//!
//! ## Architecture
//!
//! - **`rusty-schema-validation`** - leaf validators (`has_digit`, `is_email`, ...),
//!   re-exported as [`validation`]
//! - **`rusty-schema`** - schemas, form evaluation, password presets and TOML
//!   form definitions

pub mod config;
pub mod error;
mod evaluate;
pub mod form;
pub mod messages;
mod normalize;
pub mod options;
pub mod password;
pub mod result;
pub mod rule;
pub mod schema;

pub use rusty_schema_validation as validation;
pub use rusty_schema_validation::Outcome;

pub use config::{FieldConfig, FormConfig};
pub use error::{ErrorKind, Result, SchemaError};
pub use form::{validate_form, validate_form_json, Form, FormSchema};
pub use options::ValidateOptions;
pub use password::{PasswordSchema, PasswordStrength};
pub use result::{FormResult, RuleMap, ValidationResult};
pub use rule::{CustomRule, RuleInput, RuleKey, ValidatorFn};
pub use schema::Schema;
