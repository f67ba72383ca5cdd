use chrono::{DateTime, Utc};

use crate::domain::aggregate::AggregateRoot;
use crate::domain::errors::DomainError;
use crate::domain::types::{CategoryId, GenreId, now};
use crate::domain::validation::{Notification, ValidationHandler, validate_name};

pub const NAME_MIN_LENGTH: usize = 1;
pub const NAME_MAX_LENGTH: usize = 255;

const SELF_VALIDATION_MESSAGE: &str = "Failed to validate an Aggregate Genre";

/// Catalog genre grouping an ordered list of categories.
///
/// Every factory and [`Genre::update`] validates the aggregate and fails with
/// all violated rules, so a `Genre` value always holds a valid name.
#[derive(Debug, Clone)]
pub struct Genre {
    id: GenreId,
    name: Option<String>,
    active: bool,
    categories: Vec<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Genre {
    pub fn new_genre(name: Option<&str>, is_active: bool) -> Result<Self, DomainError> {
        let now = now();
        let genre = Self {
            id: GenreId::unique(),
            name: name.map(str::to_string),
            active: is_active,
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: (!is_active).then_some(now),
        };
        genre.self_validate()?;
        Ok(genre)
    }

    /// Rebuilds a genre from previously stored fields.
    pub fn with(
        id: GenreId,
        name: Option<String>,
        active: bool,
        categories: Vec<CategoryId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        let genre = Self {
            id,
            name,
            active,
            categories,
            created_at,
            updated_at,
            deleted_at,
        };
        genre.self_validate()?;
        Ok(genre)
    }

    fn self_validate(&self) -> Result<(), DomainError> {
        let mut notification = Notification::new();
        self.validate(&mut notification)?;

        if notification.has_errors() {
            return Err(DomainError::from_notification(
                SELF_VALIDATION_MESSAGE,
                notification,
            ));
        }
        Ok(())
    }

    pub fn activate(&mut self) -> &mut Self {
        self.deleted_at = None;
        self.active = true;
        self.updated_at = now();
        self
    }

    pub fn deactivate(&mut self) -> &mut Self {
        let now = now();
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.active = false;
        self.updated_at = now;
        self
    }

    /// Replaces name, state and categories, then validates.
    ///
    /// The new values are kept even when validation fails.
    pub fn update(
        &mut self,
        name: Option<&str>,
        is_active: bool,
        categories: Option<Vec<CategoryId>>,
    ) -> Result<&mut Self, DomainError> {
        if is_active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name.map(str::to_string);
        self.categories = categories.unwrap_or_default();
        self.updated_at = now();

        self.self_validate()?;
        Ok(self)
    }

    pub fn add_category(&mut self, category_id: Option<CategoryId>) -> &mut Self {
        if let Some(category_id) = category_id {
            self.categories.push(category_id);
            self.updated_at = now();
        }
        self
    }

    pub fn add_categories(&mut self, categories: Option<Vec<CategoryId>>) -> &mut Self {
        match categories {
            Some(categories) if !categories.is_empty() => {
                self.categories.extend(categories);
                self.updated_at = now();
            }
            _ => {}
        }
        self
    }

    /// Removes the first occurrence of `category_id`, if any.
    pub fn remove_category(&mut self, category_id: Option<&CategoryId>) -> &mut Self {
        let position = category_id
            .and_then(|id| self.categories.iter().position(|existing| existing == id));
        if let Some(position) = position {
            self.categories.remove(position);
            self.updated_at = now();
        }
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl AggregateRoot for Genre {
    type Id = GenreId;

    const NAME: &'static str = "Genre";

    fn id(&self) -> &GenreId {
        &self.id
    }

    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), DomainError> {
        validate_name(self.name(), NAME_MIN_LENGTH, NAME_MAX_LENGTH, handler)
    }
}

impl PartialEq for Genre {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Genre {}

#[cfg(test)]
mod tests {
    use std::thread::sleep;
    use std::time::Duration;

    use super::*;

    fn pause() {
        sleep(Duration::from_millis(2));
    }

    fn messages(err: &DomainError) -> Vec<&str> {
        err.errors().iter().map(|e| e.message()).collect()
    }

    fn ids(values: &[&str]) -> Vec<CategoryId> {
        values.iter().copied().map(CategoryId::from).collect()
    }

    #[test]
    fn new_genre_starts_without_categories() {
        let genre = Genre::new_genre(Some("Ação"), true).unwrap();

        assert!(!genre.id().as_str().is_empty());
        assert_eq!(genre.name(), Some("Ação"));
        assert!(genre.is_active());
        assert!(genre.categories().is_empty());
        assert_eq!(genre.created_at(), genre.updated_at());
        assert!(genre.deleted_at().is_none());
    }

    #[test]
    fn new_inactive_genre_is_deleted() {
        let genre = Genre::new_genre(Some("Ação"), false).unwrap();
        assert!(genre.deleted_at().is_some());
    }

    #[test]
    fn new_genre_rejects_null_name() {
        let err = Genre::new_genre(None, true).unwrap_err();
        assert_eq!(err.to_string(), "Failed to validate an Aggregate Genre");
        assert_eq!(messages(&err), vec!["'name' should not be null"]);
    }

    #[test]
    fn new_genre_rejects_blank_name() {
        let err = Genre::new_genre(Some("     "), true).unwrap_err();
        assert_eq!(messages(&err), vec!["'name' should not be empty"]);
    }

    #[test]
    fn new_genre_rejects_long_name() {
        let name = "a".repeat(256);
        let err = Genre::new_genre(Some(&name), true).unwrap_err();
        assert_eq!(
            messages(&err),
            vec!["'name' must be between 1 and 255 characters"]
        );
    }

    #[test]
    fn single_character_name_is_valid() {
        assert!(Genre::new_genre(Some("A"), true).is_ok());
    }

    #[test]
    fn deactivate_and_activate_toggle_deleted_at() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        let created_at = genre.created_at();
        let updated_at = genre.updated_at();
        pause();

        genre.deactivate();
        assert!(!genre.is_active());
        assert!(genre.deleted_at().is_some());
        assert!(genre.updated_at() > updated_at);

        let deleted_at = genre.deleted_at();
        pause();
        genre.deactivate();
        assert_eq!(genre.deleted_at(), deleted_at);

        genre.activate();
        assert!(genre.is_active());
        assert!(genre.deleted_at().is_none());
        assert_eq!(genre.created_at(), created_at);
    }

    #[test]
    fn update_replaces_categories_and_state() {
        let mut genre = Genre::new_genre(Some("acao"), true).unwrap();
        let created_at = genre.created_at();
        let updated_at = genre.updated_at();
        pause();

        genre
            .update(Some("Ação"), false, Some(ids(&["123"])))
            .unwrap();

        assert_eq!(genre.name(), Some("Ação"));
        assert!(!genre.is_active());
        assert_eq!(genre.categories(), ids(&["123"]).as_slice());
        assert!(genre.deleted_at().is_some());
        assert_eq!(genre.created_at(), created_at);
        assert!(genre.updated_at() > updated_at);
    }

    #[test]
    fn update_with_none_categories_clears_them() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        genre.add_categories(Some(ids(&["123", "456"])));

        genre.update(Some("Ação"), true, None).unwrap();

        assert!(genre.categories().is_empty());
    }

    #[test]
    fn update_with_invalid_name_fails_but_assigns() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();

        let err = genre
            .update(Some(" "), false, Some(ids(&["123"])))
            .unwrap_err();
        assert_eq!(messages(&err), vec!["'name' should not be empty"]);

        let err = genre.update(None, false, Some(ids(&["123"]))).unwrap_err();
        assert_eq!(messages(&err), vec!["'name' should not be null"]);
        assert_eq!(genre.name(), None);
        assert!(!genre.is_active());
    }

    #[test]
    fn add_category_appends_in_order() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        let created_at = genre.created_at();
        let updated_at = genre.updated_at();
        pause();

        genre
            .add_category(Some(CategoryId::from("123")))
            .add_category(Some(CategoryId::from("456")));

        assert_eq!(genre.categories(), ids(&["123", "456"]).as_slice());
        assert_eq!(genre.created_at(), created_at);
        assert!(genre.updated_at() > updated_at);
    }

    #[test]
    fn add_categories_keeps_duplicates() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();

        genre.add_categories(Some(ids(&["123", "123"])));

        assert_eq!(genre.categories(), ids(&["123", "123"]).as_slice());
    }

    #[test]
    fn empty_or_missing_additions_are_no_ops() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        let updated_at = genre.updated_at();
        pause();

        genre
            .add_category(None)
            .add_categories(None)
            .add_categories(Some(Vec::new()));

        assert!(genre.categories().is_empty());
        assert_eq!(genre.updated_at(), updated_at);
    }

    #[test]
    fn remove_category_drops_matching_id() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        genre.add_categories(Some(ids(&["123", "456"])));
        let updated_at = genre.updated_at();
        pause();

        genre.remove_category(Some(&CategoryId::from("123")));

        assert_eq!(genre.categories(), ids(&["456"]).as_slice());
        assert!(genre.updated_at() > updated_at);
    }

    #[test]
    fn remove_missing_or_none_category_is_no_op() {
        let mut genre = Genre::new_genre(Some("Ação"), true).unwrap();
        genre.add_categories(Some(ids(&["456", "123"])));
        let updated_at = genre.updated_at();
        pause();

        genre
            .remove_category(None)
            .remove_category(Some(&CategoryId::from("999")));

        assert_eq!(genre.categories(), ids(&["456", "123"]).as_slice());
        assert_eq!(genre.updated_at(), updated_at);
    }

    #[test]
    fn with_rejects_invalid_stored_name() {
        let now = now();
        let err = Genre::with(GenreId::from("1"), None, true, Vec::new(), now, now, None)
            .unwrap_err();
        assert_eq!(messages(&err), vec!["'name' should not be null"]);
    }
}
