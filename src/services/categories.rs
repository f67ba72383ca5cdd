use crate::domain::aggregate::AggregateRoot;
use crate::domain::category::Category;
use crate::domain::errors::DomainError;
use crate::domain::pagination::{Pagination, SearchQuery};
use crate::domain::types::CategoryId;
use crate::domain::validation::{Notification, ValidationHandler};
use crate::dto::categories::{
    CategoryListOutput, CategoryOutput, CreateCategoryCommand, CreateCategoryOutput,
    UpdateCategoryCommand, UpdateCategoryOutput,
};
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceResult, UseCaseOutcome};

const CREATE_FAILURE: &str = "Could not create Aggregate Category";

pub fn create_category<R>(
    command: CreateCategoryCommand,
    repo: &R,
) -> ServiceResult<CreateCategoryOutput>
where
    R: CategoryWriter,
{
    let category = Category::new_category(
        command.name.as_deref(),
        command.description.as_deref(),
        command.is_active,
    );

    let mut notification = Notification::new();
    category.validate(&mut notification)?;
    if notification.has_errors() {
        return Err(DomainError::from_notification(CREATE_FAILURE, notification).into());
    }

    match repo.create_category(&category) {
        Ok(created) => {
            log::info!("Created category {}", created.id());
            Ok(CreateCategoryOutput::from(&created))
        }
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(e.into())
        }
    }
}

/// Applies `command` to a stored category.
///
/// Validation and gateway failures come back as
/// [`UseCaseOutcome::Failure`]; only a missing category is an `Err`.
pub fn update_category<R>(
    command: UpdateCategoryCommand,
    repo: &R,
) -> ServiceResult<UseCaseOutcome<UpdateCategoryOutput>>
where
    R: CategoryReader + CategoryWriter,
{
    let id = CategoryId::from_value(command.id);

    let Some(mut category) = repo.get_category_by_id(&id)? else {
        return Err(DomainError::not_found(Category::NAME, id).into());
    };

    category.update(
        command.name.as_deref(),
        command.description.as_deref(),
        command.is_active,
    );

    let mut notification = Notification::new();
    category.validate(&mut notification)?;
    if notification.has_errors() {
        return Ok(UseCaseOutcome::Failure(notification));
    }

    match repo.update_category(&category) {
        Ok(updated) => {
            log::info!("Updated category {}", updated.id());
            Ok(UseCaseOutcome::Success(UpdateCategoryOutput::from(&updated)))
        }
        Err(e) => {
            log::error!("Failed to update category {id}: {e}");
            Ok(UseCaseOutcome::Failure(Notification::from_failure(&e)))
        }
    }
}

pub fn get_category_by_id<R>(id: &str, repo: &R) -> ServiceResult<CategoryOutput>
where
    R: CategoryReader,
{
    let id = CategoryId::from(id);

    match repo.get_category_by_id(&id)? {
        Some(category) => Ok(CategoryOutput::from(&category)),
        None => Err(DomainError::not_found(Category::NAME, id).into()),
    }
}

/// Removes a category. Deleting an unknown id succeeds.
pub fn delete_category<R>(id: &str, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    let id = CategoryId::from(id);

    if let Err(e) = repo.delete_category(&id) {
        log::error!("Failed to delete category {id}: {e}");
        return Err(e.into());
    }
    log::info!("Deleted category {id}");
    Ok(())
}

pub fn list_categories<R>(
    query: SearchQuery,
    repo: &R,
) -> ServiceResult<Pagination<CategoryListOutput>>
where
    R: CategoryReader,
{
    match repo.list_categories(query) {
        Ok(page) => Ok(page.map(|category| CategoryListOutput::from(&category))),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(e.into())
        }
    }
}
