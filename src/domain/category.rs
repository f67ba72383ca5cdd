use chrono::{DateTime, Utc};

use crate::domain::aggregate::AggregateRoot;
use crate::domain::errors::DomainError;
use crate::domain::types::{CategoryId, now};
use crate::domain::validation::{ValidationHandler, validate_name};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

/// Catalog category.
///
/// Construction and updates never fail; call [`AggregateRoot::validate`] with
/// the handler of your choice to check the name rules. `deleted_at` is set
/// exactly when the category is inactive.
#[derive(Debug, Clone)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    pub fn new_category(name: Option<&str>, description: Option<&str>, is_active: bool) -> Self {
        let now = now();
        Self {
            id: CategoryId::unique(),
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            active: is_active,
            created_at: now,
            updated_at: now,
            deleted_at: (!is_active).then_some(now),
        }
    }

    /// Rebuilds a category from previously stored fields.
    pub fn with(
        id: CategoryId,
        name: Option<String>,
        description: Option<String>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            active,
            created_at,
            updated_at,
            deleted_at,
        }
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

    /// Assigns new values without validating them.
    pub fn update(
        &mut self,
        name: Option<&str>,
        description: Option<&str>,
        is_active: bool,
    ) -> &mut Self {
        if is_active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name.map(str::to_string);
        self.description = description.map(str::to_string);
        self.updated_at = now();
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
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

impl AggregateRoot for Category {
    type Id = CategoryId;

    const NAME: &'static str = "Category";

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), DomainError> {
        validate_name(self.name(), NAME_MIN_LENGTH, NAME_MAX_LENGTH, handler)
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}
