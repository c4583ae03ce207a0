use crate::shared::errors::EntityValidationError;

/// Field-level checks shared by every aggregate.
///
/// Each check is parameterised by the field's logical name so the same
/// wording is produced for `Name`, `Description`, or any other field.
/// Lengths are counted in characters, not bytes.
pub struct DomainValidation;

impl DomainValidation {
    pub fn not_null<T>(target: Option<T>, field_name: &str) -> Result<(), EntityValidationError> {
        match target {
            Some(_) => Ok(()),
            None => Err(EntityValidationError::new(format!(
                "{} should not be null",
                field_name
            ))),
        }
    }

    pub fn not_null_or_empty(
        target: Option<&str>,
        field_name: &str,
    ) -> Result<(), EntityValidationError> {
        match target {
            Some(value) if !value.trim().is_empty() => Ok(()),
            _ => Err(EntityValidationError::new(format!(
                "{} should not be empty or null",
                field_name
            ))),
        }
    }

    pub fn min_length(
        target: &str,
        min_length: usize,
        field_name: &str,
    ) -> Result<(), EntityValidationError> {
        if target.chars().count() < min_length {
            return Err(EntityValidationError::new(format!(
                "{} should be at least {} characters long",
                field_name, min_length
            )));
        }
        Ok(())
    }

    pub fn max_length(
        target: &str,
        max_length: usize,
        field_name: &str,
    ) -> Result<(), EntityValidationError> {
        if target.chars().count() > max_length {
            return Err(EntityValidationError::new(format!(
                "{} should be less or equal {} characters long",
                field_name, max_length
            )));
        }
        Ok(())
    }
}

/// A single predicate applied to one field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    NotNull,
    NotNullOrEmpty,
    MinLength(usize),
    MaxLength(usize),
}

impl FieldRule {
    /// Run this rule against `value`.
    ///
    /// Length rules treat a missing value as passing; pair them with
    /// `NotNull` or `NotNullOrEmpty` earlier in the chain.
    pub fn check(&self, value: Option<&str>, field_name: &str) -> Result<(), EntityValidationError> {
        match (self, value) {
            (FieldRule::NotNull, _) => DomainValidation::not_null(value, field_name),
            (FieldRule::NotNullOrEmpty, _) => DomainValidation::not_null_or_empty(value, field_name),
            (FieldRule::MinLength(min), Some(v)) => DomainValidation::min_length(v, *min, field_name),
            (FieldRule::MaxLength(max), Some(v)) => DomainValidation::max_length(v, *max, field_name),
            (_, None) => Ok(()),
        }
    }

    pub fn rule_name(&self) -> &'static str {
        match self {
            FieldRule::NotNull => "NotNull",
            FieldRule::NotNullOrEmpty => "NotNullOrEmpty",
            FieldRule::MinLength(_) => "MinLength",
            FieldRule::MaxLength(_) => "MaxLength",
        }
    }
}
