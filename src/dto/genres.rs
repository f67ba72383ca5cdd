use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aggregate::AggregateRoot;
use crate::domain::genre::Genre;
use crate::domain::types::CategoryId;

/// Input of the create-genre use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGenreCommand {
    pub name: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl CreateGenreCommand {
    pub fn with(name: Option<&str>, is_active: bool, categories: &[&str]) -> Self {
        Self {
            name: name.map(str::to_string),
            is_active,
            categories: categories.iter().map(|id| id.to_string()).collect(),
        }
    }

    pub(crate) fn category_ids(&self) -> Vec<CategoryId> {
        self.categories.iter().map(CategoryId::from_value).collect()
    }
}

/// Input of the update-genre use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGenreCommand {
    pub id: String,
    pub name: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl UpdateGenreCommand {
    pub fn with(
        id: impl Into<String>,
        name: Option<&str>,
        is_active: bool,
        categories: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.map(str::to_string),
            is_active,
            categories: categories.iter().map(|id| id.to_string()).collect(),
        }
    }

    pub(crate) fn category_ids(&self) -> Vec<CategoryId> {
        self.categories.iter().map(CategoryId::from_value).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateGenreOutput {
    pub id: String,
}

impl From<&Genre> for CreateGenreOutput {
    fn from(value: &Genre) -> Self {
        Self {
            id: value.id().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateGenreOutput {
    pub id: String,
}

impl From<&Genre> for UpdateGenreOutput {
    fn from(value: &Genre) -> Self {
        Self {
            id: value.id().to_string(),
        }
    }
}

/// Full view of a single genre, categories in stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreOutput {
    pub id: String,
    pub name: Option<String>,
    pub is_active: bool,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Genre> for GenreOutput {
    fn from(value: &Genre) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().map(str::to_string),
            is_active: value.is_active(),
            categories: value.categories().iter().map(ToString::to_string).collect(),
            created_at: value.created_at(),
            updated_at: value.updated_at(),
            deleted_at: value.deleted_at(),
        }
    }
}

/// Row of a genre listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreListOutput {
    pub id: String,
    pub name: Option<String>,
    pub is_active: bool,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Genre> for GenreListOutput {
    fn from(value: &Genre) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().map(str::to_string),
            is_active: value.is_active(),
            categories: value.categories().iter().map(ToString::to_string).collect(),
            created_at: value.created_at(),
            deleted_at: value.deleted_at(),
        }
    }
}
