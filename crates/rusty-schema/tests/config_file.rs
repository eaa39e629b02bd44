//! Form definitions loaded from disk

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rusty_schema::{validate_form, Form, FormConfig};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn form(entries: &[(&str, &str)]) -> Form {
    entries
        .iter()
        .map(|(field, value)| (field.to_string(), value.to_string()))
        .collect()
}

#[test]
fn test_signup_form_accepts_valid_submission() {
    let config = FormConfig::from_file(fixture("signup.toml")).unwrap();
    let schemas = config.build().unwrap();

    let result = validate_form(
        &form(&[
            ("username", "jane_doe"),
            ("email", "jane@example.com"),
            ("password", "secret1"),
            ("confirm_password", "secret1"),
        ]),
        &schemas,
        &config.options,
    )
    .unwrap();

    assert!(result.is_valid, "{:?}", result.errors);
}

#[test]
fn test_signup_form_reports_first_error_per_field() {
    let config = FormConfig::from_file(fixture("signup.toml")).unwrap();
    let schemas = config.build().unwrap();

    let result = validate_form(
        &form(&[
            ("username", "Jane Doe"),
            ("email", ""),
            ("password", "secret"),
            ("confirm_password", ""),
        ]),
        &schemas,
        &config.options,
    )
    .unwrap();

    let first_errors: Vec<(&str, &str)> = result
        .errors
        .iter()
        .map(|(field, errors)| (field.as_str(), errors[0].as_str()))
        .collect();

    assert_eq!(
        first_errors,
        vec![
            (
                "username",
                "Username may only contain lowercase letters, digits and underscores"
            ),
            ("email", "Email must not be empty"),
            ("password", "Password must include at least one digit"),
            ("confirm_password", "Confirmation does not match password"),
        ]
    );
    assert!(result.errors.values().all(|errors| errors.len() == 1));
}
