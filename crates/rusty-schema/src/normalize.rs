// File: src/normalize.rs
// Purpose: Cross-rule coherence checks run before every evaluation

use tracing::debug;

use crate::error::{Result, SchemaError};
use crate::rule::{Check, Rule, RuleKey};

/// Narrow a rule set to the rules that take part in evaluation
///
/// A matching rule is exclusive: only it and the required rule (if any)
/// survive, in that order. Otherwise the full set is returned, provided the
/// minimum length does not exceed the maximum.
pub(crate) fn normalize(rules: &[Rule]) -> Result<Vec<&Rule>> {
    if let Some(matching) = find(rules, &RuleKey::Matching) {
        let mut narrowed = vec![matching];
        narrowed.extend(find(rules, &RuleKey::IsRequired));
        if narrowed.len() < rules.len() {
            debug!(
                dropped = rules.len() - narrowed.len(),
                "matching rule set; other rules skipped"
            );
        }
        return Ok(narrowed);
    }

    let minimum = rules.iter().find_map(|rule| match rule.check {
        Check::Minimum(length) => Some(length),
        _ => None,
    });
    let maximum = rules.iter().find_map(|rule| match rule.check {
        Check::Maximum(length) => Some(length),
        _ => None,
    });

    if let (Some(minimum), Some(maximum)) = (minimum, maximum) {
        if minimum > maximum {
            return Err(SchemaError::MinOverMax { minimum, maximum });
        }
    }

    Ok(rules.iter().collect())
}

fn find<'a>(rules: &'a [Rule], key: &RuleKey) -> Option<&'a Rule> {
    rules.iter().find(|rule| &rule.key == key)
}
