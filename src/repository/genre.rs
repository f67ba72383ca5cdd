use std::collections::HashMap;

use diesel::prelude::*;

use crate::db::DbConnection;
use crate::domain::aggregate::AggregateRoot;
use crate::domain::genre::Genre;
use crate::domain::pagination::{Pagination, SearchQuery};
use crate::domain::types::{CategoryId, GenreId, SortDirection};
use crate::models::genre::{Genre as DbGenre, GenreCategory, NewGenre as DbNewGenre};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, GenreReader, GenreSortField, GenreWriter, like_pattern, page_bounds,
};

/// Load the ordered category ids of every genre in `genre_ids`.
fn load_categories(
    conn: &mut DbConnection,
    genre_ids: &[&str],
) -> RepositoryResult<HashMap<String, Vec<CategoryId>>> {
    use crate::schema::genres_categories;

    let links = genres_categories::table
        .filter(genres_categories::genre_id.eq_any(genre_ids.to_vec()))
        .order((
            genres_categories::genre_id.asc(),
            genres_categories::position.asc(),
        ))
        .load::<GenreCategory>(conn)?;

    let mut categories: HashMap<String, Vec<CategoryId>> = HashMap::new();
    for link in links {
        categories
            .entry(link.genre_id)
            .or_default()
            .push(CategoryId::from(link.category_id));
    }
    Ok(categories)
}

/// Replace the stored category links of `genre`.
fn replace_links(conn: &mut DbConnection, genre: &Genre) -> RepositoryResult<()> {
    use crate::schema::genres_categories;

    let links = GenreCategory::rows_for(genre);

    diesel::delete(
        genres_categories::table.filter(genres_categories::genre_id.eq(genre.id().as_str())),
    )
    .execute(conn)?;

    if !links.is_empty() {
        diesel::insert_into(genres_categories::table)
            .values(&links)
            .execute(conn)?;
    }
    Ok(())
}

impl GenreReader for DieselRepository {
    fn get_genre_by_id(&self, id: &GenreId) -> RepositoryResult<Option<Genre>> {
        use crate::schema::genres;

        let mut conn = self.conn()?;

        let Some(genre) = genres::table
            .filter(genres::id.eq(id.as_str()))
            .first::<DbGenre>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let categories = load_categories(&mut conn, &[id.as_str()])?
            .remove(id.as_str())
            .unwrap_or_default();

        Ok(Some(genre.into_domain(categories)?))
    }

    fn list_genres(&self, query: SearchQuery) -> RepositoryResult<Pagination<Genre>> {
        use crate::schema::genres;

        let sort = GenreSortField::try_from(query.sort.as_str())?;
        let pattern = query.search_terms().map(like_pattern);

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = genres::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(pattern) = &pattern {
                items = items.filter(genres::name.like(pattern.clone()).escape('\\'));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let Some((offset, limit)) = page_bounds(&query) else {
            return Ok(Pagination::new(query.page, query.per_page, total, Vec::new()));
        };

        let items = match (sort, query.direction) {
            (GenreSortField::Name, SortDirection::Asc) => {
                query_builder().order((genres::name.asc(), genres::id.asc()))
            }
            (GenreSortField::Name, SortDirection::Desc) => {
                query_builder().order((genres::name.desc(), genres::id.asc()))
            }
            (GenreSortField::CreatedAt, SortDirection::Asc) => {
                query_builder().order((genres::created_at.asc(), genres::id.asc()))
            }
            (GenreSortField::CreatedAt, SortDirection::Desc) => {
                query_builder().order((genres::created_at.desc(), genres::id.asc()))
            }
            (GenreSortField::UpdatedAt, SortDirection::Asc) => {
                query_builder().order((genres::updated_at.asc(), genres::id.asc()))
            }
            (GenreSortField::UpdatedAt, SortDirection::Desc) => {
                query_builder().order((genres::updated_at.desc(), genres::id.asc()))
            }
        };

        let rows = items
            .offset(offset)
            .limit(limit)
            .load::<DbGenre>(&mut conn)?;

        let genre_ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
        let mut categories = load_categories(&mut conn, &genre_ids)?;

        let items = rows
            .into_iter()
            .map(|row| {
                let genre_categories = categories.remove(&row.id).unwrap_or_default();
                row.into_domain(genre_categories)
            })
            .collect::<Result<Vec<Genre>, _>>()?;

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }
}

impl GenreWriter for DieselRepository {
    fn create_genre(&self, genre: &Genre) -> RepositoryResult<Genre> {
        use crate::schema::genres;

        let mut conn = self.conn()?;
        let db_genre = DbNewGenre::try_from(genre)?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::insert_into(genres::table)
                .values(&db_genre)
                .execute(conn)?;
            replace_links(conn, genre)
        })?;

        Ok(genre.clone())
    }

    fn update_genre(&self, genre: &Genre) -> RepositoryResult<Genre> {
        use crate::schema::genres;

        let mut conn = self.conn()?;
        let db_genre = DbNewGenre::try_from(genre)?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let affected = diesel::update(genres::table.filter(genres::id.eq(db_genre.id.as_str())))
                .set(&db_genre)
                .execute(conn)?;

            if affected == 0 {
                return Err(RepositoryError::NotFound);
            }

            replace_links(conn, genre)
        })?;

        Ok(genre.clone())
    }

    fn delete_genre(&self, id: &GenreId) -> RepositoryResult<()> {
        use crate::schema::{genres, genres_categories};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(
                genres_categories::table.filter(genres_categories::genre_id.eq(id.as_str())),
            )
            .execute(conn)?;

            diesel::delete(genres::table.filter(genres::id.eq(id.as_str()))).execute(conn)?;

            Ok(())
        })?;

        Ok(())
    }
}
