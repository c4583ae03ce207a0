use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::category::domain::Category;
use crate::shared::domain::AggregateRoot;

/// Snapshot of a category right after it was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryOutput {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}
