use crate::domain::category::Category;
use crate::domain::genre::Genre;
use crate::domain::pagination::{Pagination, SearchQuery};
use crate::domain::types::{CategoryId, GenreId, TypeConstraintError};

#[cfg(feature = "server")]
use crate::db::{DbConnection, DbPool};

#[cfg(feature = "server")]
pub mod category;
pub mod errors;
#[cfg(feature = "server")]
pub mod genre;

use errors::RepositoryResult;

/// Gateway implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely.
#[cfg(feature = "server")]
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

#[cfg(feature = "server")]
impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// `LIKE` pattern matching `terms` literally anywhere in a column.
///
/// Use with `.escape('\\')`.
#[cfg(feature = "server")]
fn like_pattern(terms: &str) -> String {
    let mut pattern = String::with_capacity(terms.len() + 2);
    pattern.push('%');
    for c in terms.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// OFFSET and LIMIT of the requested page.
///
/// `None` when the page starts beyond any row SQLite can address.
#[cfg(feature = "server")]
fn page_bounds(query: &SearchQuery) -> Option<(i64, i64)> {
    let offset = i64::try_from(query.offset()).ok()?;
    let limit = i64::try_from(query.per_page).unwrap_or(i64::MAX);
    Some((offset, limit))
}

/// Columns a category listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySortField {
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

impl TryFrom<&str> for CategorySortField {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "name" => Ok(Self::Name),
            "description" => Ok(Self::Description),
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            "updatedAt" | "updated_at" => Ok(Self::UpdatedAt),
            other => Err(TypeConstraintError::UnsupportedSortField(other.to_string())),
        }
    }
}

/// Columns a genre listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreSortField {
    Name,
    CreatedAt,
    UpdatedAt,
}

impl TryFrom<&str> for GenreSortField {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "name" => Ok(Self::Name),
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            "updatedAt" | "updated_at" => Ok(Self::UpdatedAt),
            other => Err(TypeConstraintError::UnsupportedSortField(other.to_string())),
        }
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>>;
    /// List categories matching the search terms, one page at a time.
    fn list_categories(&self, query: SearchQuery) -> RepositoryResult<Pagination<Category>>;
    /// Return the subset of `ids` that are stored.
    fn existing_category_ids(&self, ids: &[CategoryId]) -> RepositoryResult<Vec<CategoryId>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category.
    fn create_category(&self, category: &Category) -> RepositoryResult<Category>;
    /// Overwrite a stored category. Fails with `NotFound` when it is missing.
    fn update_category(&self, category: &Category) -> RepositoryResult<Category>;
    /// Delete a category. Deleting a missing id is not an error.
    fn delete_category(&self, id: &CategoryId) -> RepositoryResult<()>;
}

/// Read-only operations for genre entities.
pub trait GenreReader {
    /// Retrieve a genre, with its categories, by its identifier.
    fn get_genre_by_id(&self, id: &GenreId) -> RepositoryResult<Option<Genre>>;
    /// List genres matching the search terms, one page at a time.
    fn list_genres(&self, query: SearchQuery) -> RepositoryResult<Pagination<Genre>>;
}

/// Write operations for genre entities and their category links.
pub trait GenreWriter {
    /// Persist a new genre together with its categories.
    fn create_genre(&self, genre: &Genre) -> RepositoryResult<Genre>;
    /// Overwrite a stored genre and replace its categories.
    fn update_genre(&self, genre: &Genre) -> RepositoryResult<Genre>;
    /// Delete a genre. Deleting a missing id is not an error.
    fn delete_genre(&self, id: &GenreId) -> RepositoryResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sort_fields() {
        assert_eq!(
            CategorySortField::try_from("createdAt").unwrap(),
            CategorySortField::CreatedAt
        );
        assert_eq!(
            GenreSortField::try_from("name").unwrap(),
            GenreSortField::Name
        );
        assert_eq!(
            GenreSortField::try_from("description").unwrap_err(),
            TypeConstraintError::UnsupportedSortField("description".to_string())
        );
    }

    #[cfg(feature = "server")]
    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("drama"), "%drama%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b\\c"), "%a\\_b\\\\c%");
    }

    #[cfg(feature = "server")]
    #[test]
    fn page_bounds_rejects_unaddressable_offsets() {
        assert_eq!(page_bounds(&SearchQuery::new(2, 10)), Some((20, 10)));
        assert_eq!(page_bounds(&SearchQuery::new(1 << 62, 4)), None);
        assert_eq!(
            page_bounds(&SearchQuery::new(0, usize::MAX)),
            Some((0, i64::MAX))
        );
    }
}
