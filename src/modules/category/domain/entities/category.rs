use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::{
    domain::AggregateRoot,
    errors::EntityValidationError,
    validation::{FieldRule, ValidationChain},
};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

/// Values for a new category.
///
/// `new` fills in the defaults: an empty description and an active category.
/// A `None` description stands for an explicitly missing value and is
/// rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(String::new()),
            is_active: true,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Category Aggregate Root
///
/// Every constructor and mutator validates the full candidate state before
/// anything is assigned, so an instance can never be observed with an
/// invalid name or description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: Uuid,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create an active category with an empty description
    pub fn new(name: impl Into<String>) -> Result<Self, EntityValidationError> {
        Self::create(NewCategory::new(name))
    }

    pub fn create(input: NewCategory) -> Result<Self, EntityValidationError> {
        let NewCategory {
            name,
            description,
            is_active,
        } = input;

        Self::validate(Some(name.as_str()), description.as_deref())?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            // presence checked by validate
            description: description.unwrap_or_default(),
            is_active,
            created_at: Utc::now(),
        })
    }

    // ============================================================================================
    // BUSINESS OPERATIONS (Commands)
    // ============================================================================================

    pub fn activate(&mut self) -> Result<(), EntityValidationError> {
        self.revalidate()?;
        self.is_active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) -> Result<(), EntityValidationError> {
        self.revalidate()?;
        self.is_active = false;
        Ok(())
    }

    /// Replace the name, and the description when one is given.
    ///
    /// On error the category is left exactly as it was.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), EntityValidationError> {
        let name = name.into();
        let next_description = description.as_deref().unwrap_or(self.description.as_str());

        Self::validate(Some(name.as_str()), Some(next_description))?;

        self.name = name;
        if let Some(description) = description {
            self.description = description;
        }
        Ok(())
    }

    // ============================================================================================
    // QUERIES (Read-only)
    // ============================================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // ============================================================================================
    // INVARIANTS
    // ============================================================================================

    fn revalidate(&self) -> Result<(), EntityValidationError> {
        Self::validate(Some(self.name.as_str()), Some(self.description.as_str()))
    }

    fn validate(name: Option<&str>, description: Option<&str>) -> Result<(), EntityValidationError> {
        ValidationChain::new()
            .field(
                "Name",
                name,
                &[
                    FieldRule::NotNullOrEmpty,
                    FieldRule::MinLength(NAME_MIN_LENGTH),
                    FieldRule::MaxLength(NAME_MAX_LENGTH),
                ],
            )
            .field(
                "Description",
                description,
                &[FieldRule::NotNull, FieldRule::MaxLength(DESCRIPTION_MAX_LENGTH)],
            )
            .validate()
    }
}

impl AggregateRoot for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}
