use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::aggregate::AggregateRoot;
use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryId, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Insertable/patchable form of [`Category`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(treat_none_as_null = true)]
pub struct NewCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<Category> for DomainCategory {
    fn from(category: Category) -> Self {
        Self::with(
            CategoryId::from(category.id),
            Some(category.name),
            category.description,
            category.active,
            category.created_at.and_utc(),
            category.updated_at.and_utc(),
            category.deleted_at.map(|at| at.and_utc()),
        )
    }
}

impl TryFrom<&DomainCategory> for NewCategory {
    type Error = TypeConstraintError;

    fn try_from(category: &DomainCategory) -> Result<Self, Self::Error> {
        let name = category
            .name()
            .ok_or(TypeConstraintError::MissingValue("category name"))?;

        Ok(Self {
            id: category.id().as_str().to_string(),
            name: name.to_string(),
            description: category.description().map(str::to_string),
            active: category.is_active(),
            created_at: category.created_at().naive_utc(),
            updated_at: category.updated_at().naive_utc(),
            deleted_at: category.deleted_at().map(|at| at.naive_utc()),
        })
    }
}
