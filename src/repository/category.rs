use diesel::prelude::*;

use crate::domain::category::Category;
use crate::domain::pagination::{Pagination, SearchQuery};
use crate::domain::types::{CategoryId, SortDirection};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CategoryReader, CategorySortField, CategoryWriter, DieselRepository, like_pattern, page_bounds,
};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(id.as_str()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(Into::into))
    }

    fn list_categories(&self, query: SearchQuery) -> RepositoryResult<Pagination<Category>> {
        use crate::schema::categories;

        let sort = CategorySortField::try_from(query.sort.as_str())?;
        let pattern = query.search_terms().map(like_pattern);

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = categories::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(pattern) = &pattern {
                items = items.filter(
                    categories::name
                        .like(pattern.clone())
                        .escape('\\')
                        .or(categories::description
                            .like(pattern.clone())
                            .escape('\\')),
                );
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let Some((offset, limit)) = page_bounds(&query) else {
            return Ok(Pagination::new(query.page, query.per_page, total, Vec::new()));
        };

        let items = match (sort, query.direction) {
            (CategorySortField::Name, SortDirection::Asc) => {
                query_builder().order((categories::name.asc(), categories::id.asc()))
            }
            (CategorySortField::Name, SortDirection::Desc) => {
                query_builder().order((categories::name.desc(), categories::id.asc()))
            }
            (CategorySortField::Description, SortDirection::Asc) => {
                query_builder().order((categories::description.asc(), categories::id.asc()))
            }
            (CategorySortField::Description, SortDirection::Desc) => {
                query_builder().order((categories::description.desc(), categories::id.asc()))
            }
            (CategorySortField::CreatedAt, SortDirection::Asc) => {
                query_builder().order((categories::created_at.asc(), categories::id.asc()))
            }
            (CategorySortField::CreatedAt, SortDirection::Desc) => {
                query_builder().order((categories::created_at.desc(), categories::id.asc()))
            }
            (CategorySortField::UpdatedAt, SortDirection::Asc) => {
                query_builder().order((categories::updated_at.asc(), categories::id.asc()))
            }
            (CategorySortField::UpdatedAt, SortDirection::Desc) => {
                query_builder().order((categories::updated_at.desc(), categories::id.asc()))
            }
        };

        let items = items
            .offset(offset)
            .limit(limit)
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Category>>();

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }

    fn existing_category_ids(&self, ids: &[CategoryId]) -> RepositoryResult<Vec<CategoryId>> {
        use crate::schema::categories;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let raw_ids: Vec<&str> = ids.iter().map(CategoryId::as_str).collect();

        let found = categories::table
            .filter(categories::id.eq_any(raw_ids))
            .select(categories::id)
            .load::<String>(&mut conn)?;

        Ok(found.into_iter().map(CategoryId::from).collect())
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &Category) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category = DbNewCategory::try_from(category)?;

        diesel::insert_into(categories::table)
            .values(&db_category)
            .execute(&mut conn)?;

        Ok(category.clone())
    }

    fn update_category(&self, category: &Category) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category = DbNewCategory::try_from(category)?;

        let affected = diesel::update(
            categories::table.filter(categories::id.eq(db_category.id.as_str())),
        )
        .set(&db_category)
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(category.clone())
    }

    fn delete_category(&self, id: &CategoryId) -> RepositoryResult<()> {
        use crate::schema::{categories, genres_categories};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(
                genres_categories::table.filter(genres_categories::category_id.eq(id.as_str())),
            )
            .execute(conn)?;

            diesel::delete(categories::table.filter(categories::id.eq(id.as_str())))
                .execute(conn)?;

            Ok(())
        })?;

        Ok(())
    }
}
