use serde::{Deserialize, Serialize};

use crate::modules::category::domain::NewCategory;

fn default_description() -> Option<String> {
    Some(String::new())
}

fn default_is_active() -> bool {
    true
}

/// Request for creating a new category
///
/// A missing `description` becomes `""` and a missing `isActive` becomes
/// `true`. An explicit `"description": null` is kept as `None` and rejected
/// by the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryInput {
    pub name: String,
    #[serde(default = "default_description")]
    pub description: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

impl CreateCategoryInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: default_description(),
            is_active: default_is_active(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

impl From<CreateCategoryInput> for NewCategory {
    fn from(input: CreateCategoryInput) -> Self {
        NewCategory::new(input.name)
            .with_description(input.description)
            .with_is_active(input.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let input: CreateCategoryInput = serde_json::from_str(r#"{"name":"Action"}"#).unwrap();

        assert_eq!(input, CreateCategoryInput::new("Action"));
        assert_eq!(input.description.as_deref(), Some(""));
        assert!(input.is_active);
    }

    #[test]
    fn explicit_null_description_is_kept() {
        let input: CreateCategoryInput =
            serde_json::from_str(r#"{"name":"Action","description":null,"isActive":false}"#)
                .unwrap();

        assert_eq!(input.description, None);
        assert!(!input.is_active);
    }

    #[test]
    fn converts_into_new_category() {
        let new_category: NewCategory = CreateCategoryInput::new("Action")
            .with_description("Action movies")
            .with_is_active(false)
            .into();

        assert_eq!(new_category.name, "Action");
        assert_eq!(new_category.description.as_deref(), Some("Action movies"));
        assert!(!new_category.is_active);
    }
}
