// File: src/form.rs
// Purpose: Validate a flat form against per-field schemas

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SchemaError};
use crate::options::ValidateOptions;
use crate::result::{FormResult, ValidationResult};
use crate::schema::Schema;

/// Field name to candidate value, in the caller's order
pub type Form = IndexMap<String, String>;

/// Field name to the schema validating that field
pub type FormSchema = IndexMap<String, Schema>;

/// Validate every field of `form` against its schema
///
/// Fields are visited in the form's order. A schema with a matching property
/// is evaluated against the sibling field's current value; the schema itself
/// is never modified, so shared schemas are safe across forms and threads.
///
/// # Errors
///
/// - `MissingSchema` when a form field has no schema
/// - `NoMatchingProperty` when a matching target is absent from the form
/// - any schema configuration error raised while evaluating a field
pub fn validate_form(
    form: &Form,
    schemas: &FormSchema,
    options: &ValidateOptions,
) -> Result<FormResult> {
    let mut errors = IndexMap::new();
    let mut rules = IndexMap::new();

    for (field, value) in form {
        let schema = schemas
            .get(field)
            .ok_or_else(|| SchemaError::MissingSchema(field.clone()))?;

        let result = match schema.matching_property() {
            Some(target) => {
                let expected = form
                    .get(target)
                    .ok_or_else(|| SchemaError::NoMatchingProperty(target.to_string()))?;
                schema.validate_against(value, expected, options)?
            }
            None => schema.validate(value, options)?,
        };

        let ValidationResult {
            is_valid,
            errors: field_errors,
            rules: field_rules,
        } = result;
        debug!(field = %field, is_valid, "form field validated");

        if let Some(field_rules) = field_rules {
            rules.insert(field.clone(), field_rules);
        }
        if !is_valid {
            errors.insert(field.clone(), field_errors);
        }
    }

    Ok(FormResult {
        is_valid: errors.is_empty(),
        errors,
        rules: options.include_rules.then_some(rules),
    })
}

/// Validate an untyped form, such as a decoded JSON request body
///
/// The form must be an object whose values are all strings.
pub fn validate_form_json(
    form: &Value,
    schemas: &FormSchema,
    options: &ValidateOptions,
) -> Result<FormResult> {
    let object = form.as_object().ok_or(SchemaError::InvalidSchemaOrForm)?;

    let form = object
        .iter()
        .map(|(field, value)| {
            value
                .as_str()
                .map(|value| (field.clone(), value.to_string()))
                .ok_or(SchemaError::NotAString)
        })
        .collect::<Result<Form>>()?;

    validate_form(&form, schemas, options)
}
