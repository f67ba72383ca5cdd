use crate::domain::aggregate::AggregateRoot;
use crate::domain::errors::DomainError;
use crate::domain::genre::Genre;
use crate::domain::pagination::{Pagination, SearchQuery};
use crate::domain::types::{CategoryId, GenreId};
use crate::domain::validation::{Notification, ValidationError, ValidationHandler};
use crate::dto::genres::{
    CreateGenreCommand, CreateGenreOutput, GenreListOutput, GenreOutput, UpdateGenreCommand,
    UpdateGenreOutput,
};
use crate::repository::{CategoryReader, GenreReader, GenreWriter};

use super::{ServiceResult, UseCaseOutcome};

const CREATE_FAILURE: &str = "Could not create Aggregate Genre";

/// Reports the ids in `ids` that the category gateway does not know.
///
/// An empty list is accepted without asking the gateway.
fn validate_categories<R>(ids: &[CategoryId], repo: &R) -> ServiceResult<Notification>
where
    R: CategoryReader,
{
    let mut notification = Notification::new();
    if ids.is_empty() {
        return Ok(notification);
    }

    let existing = repo.existing_category_ids(ids).map_err(|e| {
        log::error!("Failed to check category ids: {e}");
        e
    })?;

    let missing: Vec<&str> = ids
        .iter()
        .filter(|id| !existing.contains(id))
        .map(CategoryId::as_str)
        .collect();

    if !missing.is_empty() {
        notification.push(ValidationError::new(format!(
            "Some categories could not be found: {}",
            missing.join(", ")
        )));
    }
    Ok(notification)
}

pub fn create_genre<R>(command: CreateGenreCommand, repo: &R) -> ServiceResult<CreateGenreOutput>
where
    R: CategoryReader + GenreWriter,
{
    let categories = command.category_ids();

    let mut notification = validate_categories(&categories, repo)?;
    let genre =
        notification.validate(|| Genre::new_genre(command.name.as_deref(), command.is_active));

    let mut genre = match genre {
        Some(genre) if !notification.has_errors() => genre,
        _ => return Err(DomainError::from_notification(CREATE_FAILURE, notification).into()),
    };
    genre.add_categories(Some(categories));

    match repo.create_genre(&genre) {
        Ok(created) => {
            log::info!("Created genre {}", created.id());
            Ok(CreateGenreOutput::from(&created))
        }
        Err(e) => {
            log::error!("Failed to create genre: {e}");
            Err(e.into())
        }
    }
}

/// Replaces name, state and categories of a stored genre.
///
/// Unknown category ids are reported before the aggregate's own rules. Like
/// the category update, rule violations and a failed write come back as
/// [`UseCaseOutcome::Failure`]. A missing genre and a failed read are `Err`.
pub fn update_genre<R>(
    command: UpdateGenreCommand,
    repo: &R,
) -> ServiceResult<UseCaseOutcome<UpdateGenreOutput>>
where
    R: CategoryReader + GenreReader + GenreWriter,
{
    let id = GenreId::from_value(command.id.as_str());

    let Some(mut genre) = repo.get_genre_by_id(&id)? else {
        return Err(DomainError::not_found(Genre::NAME, id).into());
    };

    let categories = command.category_ids();

    let mut notification = validate_categories(&categories, repo)?;
    notification.validate(|| {
        genre
            .update(command.name.as_deref(), command.is_active, Some(categories))
            .map(|_| ())
    });

    if notification.has_errors() {
        log::debug!("Rejected update of genre {id}: {:?}", notification.errors());
        return Ok(UseCaseOutcome::Failure(notification));
    }

    match repo.update_genre(&genre) {
        Ok(updated) => {
            log::info!("Updated genre {id}");
            Ok(UseCaseOutcome::Success(UpdateGenreOutput::from(&updated)))
        }
        Err(e) => {
            log::error!("Failed to update genre {id}: {e}");
            Ok(UseCaseOutcome::Failure(Notification::from_failure(&e)))
        }
    }
}

pub fn get_genre_by_id<R>(id: &str, repo: &R) -> ServiceResult<GenreOutput>
where
    R: GenreReader,
{
    let id = GenreId::from(id);

    match repo.get_genre_by_id(&id)? {
        Some(genre) => Ok(GenreOutput::from(&genre)),
        None => Err(DomainError::not_found(Genre::NAME, id).into()),
    }
}

/// Removes a genre and its category links. Deleting an unknown id succeeds.
pub fn delete_genre<R>(id: &str, repo: &R) -> ServiceResult<()>
where
    R: GenreWriter,
{
    let id = GenreId::from(id);

    if let Err(e) = repo.delete_genre(&id) {
        log::error!("Failed to delete genre {id}: {e}");
        return Err(e.into());
    }
    log::info!("Deleted genre {id}");
    Ok(())
}

pub fn list_genres<R>(query: SearchQuery, repo: &R) -> ServiceResult<Pagination<GenreListOutput>>
where
    R: GenreReader,
{
    match repo.list_genres(query) {
        Ok(page) => Ok(page.map(|genre| GenreListOutput::from(&genre))),
        Err(e) => {
            log::error!("Failed to list genres: {e}");
            Err(e.into())
        }
    }
}
