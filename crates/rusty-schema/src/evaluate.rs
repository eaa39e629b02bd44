// File: src/evaluate.rs
// Purpose: Run a normalized rule set against one value

use tracing::{debug, trace};

use crate::messages;
use crate::options::ValidateOptions;
use crate::result::{RuleMap, ValidationResult};
use crate::rule::{Rule, RuleKey};

/// Evaluate `value` against `rules` in order
///
/// Without a required rule, an empty or whitespace-only value is valid and no
/// rule runs. `matching` is the resolved expected value for a matching rule.
pub(crate) fn evaluate(
    value: &str,
    label: Option<&str>,
    rules: &[&Rule],
    matching: Option<&str>,
    options: &ValidateOptions,
) -> ValidationResult {
    if skips_rules(value, rules) {
        debug!("optional value is empty; rules skipped");
        let rules = options
            .include_rules
            .then(|| RuleMap::from([(RuleKey::IsRequired, false)]));
        return ValidationResult::new(Vec::new(), rules);
    }

    let mut errors = Vec::new();
    let mut outcomes = RuleMap::new();

    for rule in rules {
        let outcome = rule.run(value, matching);
        let passed = outcome.is_valid();
        trace!(rule = %rule.key, passed, "rule evaluated");

        outcomes.insert(rule.key.clone(), passed);
        if passed {
            continue;
        }

        let message = outcome.message().unwrap_or(&rule.message);
        errors.push(messages::with_label(label, message, options.include_label));

        if options.abort_early {
            break;
        }
    }

    ValidationResult::new(errors, options.include_rules.then_some(outcomes))
}

/// Whether `value` is blank and optional, so no rule runs
pub(crate) fn skips_rules(value: &str, rules: &[&Rule]) -> bool {
    let required = rules.iter().any(|rule| rule.key == RuleKey::IsRequired);
    !required && value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Check, CustomRule};
    use pretty_assertions::assert_eq;
    use rusty_schema_validation::Outcome;

    fn rules() -> Vec<Rule> {
        vec![
            Rule::new(RuleKey::Minimum, Check::Minimum(3), messages::minimum(3)),
            Rule::new(RuleKey::HasSymbol, Check::Symbol, messages::SYMBOL),
            Rule::new(RuleKey::HasDigit, Check::Digit, messages::DIGIT),
        ]
    }

    fn run(value: &str, rules: &[Rule], options: ValidateOptions) -> ValidationResult {
        let view: Vec<&Rule> = rules.iter().collect();
        evaluate(value, Some("Code"), &view, None, &options)
    }

    #[test]
    fn test_collects_all_failures_in_order() {
        let result = run("a", &rules(), ValidateOptions::default());
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![messages::minimum(3), messages::SYMBOL.to_string(), messages::DIGIT.to_string()]
        );
        assert!(result.rules.is_none());
    }

    #[test]
    fn test_abort_early_stops_at_first_failure() {
        let options = ValidateOptions::new().abort_early(true).include_rules(true);
        let result = run("abc", &rules(), options);

        assert_eq!(result.errors, vec![messages::SYMBOL.to_string()]);
        let rules = result.rules.unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.get(&RuleKey::Minimum), Some(&true));
        assert_eq!(rules.get(&RuleKey::HasSymbol), Some(&false));
        assert!(rules.get(&RuleKey::HasDigit).is_none());
    }

    #[test]
    fn test_include_label_prefixes_messages() {
        let result = run("a", &rules(), ValidateOptions::new().include_label(true));
        assert!(result.errors.iter().all(|error| error.starts_with("Code ")));
    }

    #[test]
    fn test_empty_optional_value_short_circuits() {
        let result = run("   ", &rules(), ValidateOptions::new().include_rules(true));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(
            result.rules,
            Some(RuleMap::from([(RuleKey::IsRequired, false)]))
        );
    }

    #[test]
    fn test_required_rule_runs_on_empty_value() {
        let mut rules = rules();
        rules.push(Rule::new(RuleKey::IsRequired, Check::Required, messages::REQUIRED));
        let result = run("", &rules, ValidateOptions::default());

        assert!(!result.is_valid);
        assert!(result.errors.contains(&messages::REQUIRED.to_string()));
    }

    #[test]
    fn test_silent_failure_reports_configured_message() {
        let rule = Rule::try_from(
            CustomRule::new("never")
                .message("never passes")
                .validator(|_, _, _| Outcome::Invalid(None)),
        )
        .unwrap();
        let result = run("abc", &[rule], ValidateOptions::default());
        assert_eq!(result.errors, vec!["never passes".to_string()]);
    }

    #[test]
    fn test_validator_message_wins_over_configured() {
        let rule = Rule::try_from(
            CustomRule::new("own")
                .message("configured")
                .validator(|_, _, _| Outcome::Invalid(Some("own words".into()))),
        )
        .unwrap();
        let result = run("abc", &[rule], ValidateOptions::default());
        assert_eq!(result.errors, vec!["own words".to_string()]);
    }
}
