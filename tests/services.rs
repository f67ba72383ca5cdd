use catalog_admin::domain::pagination::SearchQuery;
use catalog_admin::domain::validation::ValidationHandler;
use catalog_admin::dto::categories::{CreateCategoryCommand, UpdateCategoryCommand};
use catalog_admin::dto::genres::{CreateGenreCommand, UpdateGenreCommand};
use catalog_admin::repository::DieselRepository;
use catalog_admin::services::categories::{
    create_category, delete_category, get_category_by_id, list_categories, update_category,
};
use catalog_admin::services::genres::{
    create_genre, delete_genre, get_genre_by_id, list_genres, update_genre,
};
use catalog_admin::services::{ServiceError, UseCaseOutcome};

mod common;

#[test]
fn category_lifecycle_through_services() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = create_category(
        CreateCategoryCommand::with(Some("Filmes"), Some("A categoria"), true),
        &repo,
    )
    .expect("should create category");

    let outcome = update_category(
        UpdateCategoryCommand::with(created.id.as_str(), Some("Series"), None, false),
        &repo,
    )
    .expect("category should exist");
    assert!(outcome.is_success());

    let category = get_category_by_id(&created.id, &repo).expect("should load category");
    assert_eq!(category.name.as_deref(), Some("Series"));
    assert_eq!(category.description, None);
    assert!(!category.is_active);
    assert!(category.deleted_at.is_some());

    let page = list_categories(SearchQuery::new(0, 10), &repo).expect("should list categories");
    assert_eq!(page.total, 1);

    delete_category(&created.id, &repo).expect("should delete category");
    let err = get_category_by_id(&created.id, &repo).expect_err("category should be gone");
    assert!(err.is_not_found());
}

#[test]
fn invalid_category_update_is_reported_as_outcome() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = create_category(CreateCategoryCommand::with(Some("Filmes"), None, true), &repo)
        .expect("should create category");

    let outcome = update_category(
        UpdateCategoryCommand::with(created.id.as_str(), Some("Fi"), None, true),
        &repo,
    )
    .expect("category should exist");

    let UseCaseOutcome::Failure(notification) = outcome else {
        panic!("update should fail validation");
    };
    assert_eq!(
        notification.first_error().map(|e| e.message()),
        Some("'name' must be between 3 and 255 characters")
    );
    let category = get_category_by_id(&created.id, &repo).expect("should load category");
    assert_eq!(category.name.as_deref(), Some("Filmes"));
}

#[test]
fn genre_lifecycle_through_services() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let filmes = create_category(CreateCategoryCommand::with(Some("Filmes"), None, true), &repo)
        .expect("should create category");
    let series = create_category(CreateCategoryCommand::with(Some("Series"), None, true), &repo)
        .expect("should create category");

    let created = create_genre(
        CreateGenreCommand::with(Some("Ação"), true, &[filmes.id.as_str(), series.id.as_str()]),
        &repo,
    )
    .expect("should create genre");

    let genre = get_genre_by_id(&created.id, &repo).expect("should load genre");
    assert_eq!(genre.categories, vec![filmes.id.clone(), series.id.clone()]);

    let outcome = update_genre(
        UpdateGenreCommand::with(created.id.as_str(), Some("Drama"), false, &[series.id.as_str()]),
        &repo,
    )
    .expect("genre should exist");
    assert!(outcome.is_success());

    let page = list_genres(SearchQuery::new(0, 10), &repo).expect("should list genres");
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name.as_deref(), Some("Drama"));
    assert_eq!(page.items[0].categories, vec![series.id.clone()]);
    assert!(!page.items[0].is_active);

    delete_genre(&created.id, &repo).expect("should delete genre");
    delete_genre(&created.id, &repo).expect("second delete should succeed");
    assert!(get_genre_by_id(&created.id, &repo).is_err());
}

#[test]
fn genre_with_unknown_categories_is_rejected() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let err = create_genre(CreateGenreCommand::with(Some("Ação"), true, &["456"]), &repo)
        .expect_err("creation should fail");

    let ServiceError::Domain(err) = err else {
        panic!("expected a domain error");
    };
    assert_eq!(err.to_string(), "Could not create Aggregate Genre");
    assert_eq!(
        err.errors()[0].message(),
        "Some categories could not be found: 456"
    );
    let page = list_genres(SearchQuery::new(0, 10), &repo).expect("should list genres");
    assert_eq!(page.total, 0);
}

#[test]
fn genre_update_with_unknown_categories_is_reported_as_outcome() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = create_genre(CreateGenreCommand::with(Some("Ação"), true, &[]), &repo)
        .expect("should create genre");

    let outcome = update_genre(
        UpdateGenreCommand::with(created.id.as_str(), None, true, &["456", "789"]),
        &repo,
    )
    .expect("genre should exist");

    let notification = outcome.failure().expect("update should fail validation");
    let messages: Vec<&str> = notification.errors().iter().map(|e| e.message()).collect();
    assert_eq!(
        messages,
        vec![
            "Some categories could not be found: 456, 789",
            "'name' should not be null"
        ]
    );
    let genre = get_genre_by_id(&created.id, &repo).expect("should load genre");
    assert_eq!(genre.name.as_deref(), Some("Ação"));
}
