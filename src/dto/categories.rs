use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aggregate::AggregateRoot;
use crate::domain::category::Category;

/// Input of the create-category use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryCommand {
    pub fn with(name: Option<&str>, description: Option<&str>, is_active: bool) -> Self {
        Self {
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            is_active,
        }
    }
}

/// Input of the update-category use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpdateCategoryCommand {
    pub fn with(
        id: impl Into<String>,
        name: Option<&str>,
        description: Option<&str>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCategoryOutput {
    pub id: String,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCategoryOutput {
    pub id: String,
}

impl From<&Category> for UpdateCategoryOutput {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().to_string(),
        }
    }
}

/// Full view of a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOutput {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryOutput {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().map(str::to_string),
            description: value.description().map(str::to_string),
            is_active: value.is_active(),
            created_at: value.created_at(),
            updated_at: value.updated_at(),
            deleted_at: value.deleted_at(),
        }
    }
}

/// Row of a category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListOutput {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryListOutput {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().map(str::to_string),
            description: value.description().map(str::to_string),
            is_active: value.is_active(),
            created_at: value.created_at(),
        }
    }
}
