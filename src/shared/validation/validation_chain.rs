use super::validation_rules::FieldRule;
use crate::shared::errors::EntityValidationError;

/// One step of a chain: a field, its current value and the rule to apply
#[derive(Debug, Clone)]
struct ValidationStep<'a> {
    field_name: &'a str,
    value: Option<&'a str>,
    rule: FieldRule,
}

/// Ordered list of field checks.
///
/// Steps run in insertion order and the chain stops at the first failure, so
/// the error returned is always the one for the earliest violated rule.
#[derive(Debug, Clone, Default)]
pub struct ValidationChain<'a> {
    steps: Vec<ValidationStep<'a>>,
}

impl<'a> ValidationChain<'a> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append `rules` for one field, in the given order
    pub fn field(mut self, field_name: &'a str, value: Option<&'a str>, rules: &[FieldRule]) -> Self {
        self.steps.extend(rules.iter().map(|rule| ValidationStep {
            field_name,
            value,
            rule: *rule,
        }));
        self
    }

    pub fn validate(&self) -> Result<(), EntityValidationError> {
        for step in &self.steps {
            if let Err(err) = step.rule.check(step.value, step.field_name) {
                log::debug!(
                    "Validation rule '{}' failed for field '{}'",
                    step.rule.rule_name(),
                    step.field_name
                );
                return Err(err);
            }
        }
        Ok(())
    }

    pub fn rule_count(&self) -> usize {
        self.steps.len()
    }
}
