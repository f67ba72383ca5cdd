use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::aggregate::AggregateRoot;
use crate::domain::errors::DomainError;
use crate::domain::genre::Genre as DomainGenre;
use crate::domain::types::{CategoryId, GenreId, TypeConstraintError};

/// Diesel model representing the `genres` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::genres)]
pub struct Genre {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Insertable/patchable form of [`Genre`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::genres)]
#[diesel(treat_none_as_null = true)]
pub struct NewGenre {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Link row keeping the ordered category list of a genre.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::genres_categories)]
pub struct GenreCategory {
    pub genre_id: String,
    pub position: i32,
    pub category_id: String,
}

impl Genre {
    /// Rebuild the domain aggregate with its ordered category ids.
    pub fn into_domain(self, categories: Vec<CategoryId>) -> Result<DomainGenre, DomainError> {
        DomainGenre::with(
            GenreId::from(self.id),
            Some(self.name),
            self.active,
            categories,
            self.created_at.and_utc(),
            self.updated_at.and_utc(),
            self.deleted_at.map(|at| at.and_utc()),
        )
    }
}

impl TryFrom<&DomainGenre> for NewGenre {
    type Error = TypeConstraintError;

    fn try_from(genre: &DomainGenre) -> Result<Self, Self::Error> {
        let name = genre
            .name()
            .ok_or(TypeConstraintError::MissingValue("genre name"))?;

        Ok(Self {
            id: genre.id().as_str().to_string(),
            name: name.to_string(),
            active: genre.is_active(),
            created_at: genre.created_at().naive_utc(),
            updated_at: genre.updated_at().naive_utc(),
            deleted_at: genre.deleted_at().map(|at| at.naive_utc()),
        })
    }
}

impl GenreCategory {
    /// Link rows for every category of `genre`, numbered in list order.
    pub fn rows_for(genre: &DomainGenre) -> Vec<Self> {
        genre
            .categories()
            .iter()
            .enumerate()
            .map(|(position, category_id)| Self {
                genre_id: genre.id().as_str().to_string(),
                position: position as i32,
                category_id: category_id.as_str().to_string(),
            })
            .collect()
    }
}
