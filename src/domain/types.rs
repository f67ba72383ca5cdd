//! Strongly-typed value objects used by domain entities.
//!
//! Aggregates carry these wrappers instead of raw strings so that identifiers
//! of different aggregates cannot be mixed up at the gateway boundary.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when parsing constrained domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A sort direction other than `asc`/`desc` was supplied.
    #[error("invalid sort direction: {0}")]
    InvalidSortDirection(String),
    /// A sort field the aggregate cannot be ordered by.
    #[error("unsupported sort field: {0}")]
    UnsupportedSortField(String),
    /// A value required by storage was absent.
    #[error("{0} must be present")]
    MissingValue(&'static str),
}

/// Current wall-clock time truncated to microseconds.
///
/// Storage keeps microsecond precision, so stamping entities with the same
/// precision lets a stored entity compare equal to the one that was written.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Shared behavior of aggregate identifiers.
pub trait Identifier {
    /// Borrow the raw identifier value.
    fn value(&self) -> &str;
}

/// Macro to generate string-backed identifier newtypes.
macro_rules! string_id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a fresh random identifier.
            pub fn unique() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Wraps an existing identifier value.
            pub fn from_value<S: Into<String>>(value: S) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Identifier for $name {
            fn value(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

string_id_newtype!(CategoryId, "Unique identifier for a category.");
string_id_newtype!(GenreId, "Unique identifier for a genre.");

/// Ordering applied to a listing.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = TypeConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(TypeConstraintError::InvalidSortDirection(other.to_string())),
        }
    }
}

impl TryFrom<&str> for SortDirection {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_ids_differ() {
        assert_ne!(CategoryId::unique(), CategoryId::unique());
    }

    #[test]
    fn ids_compare_with_str() {
        let id = GenreId::from("123");
        assert_eq!(id, "123");
        assert_eq!(id.value(), "123");
    }

    #[test]
    fn parses_sort_direction_case_insensitively() {
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert_eq!(SortDirection::try_from(" asc ").unwrap(), SortDirection::Asc);
        assert_eq!(
            "up".parse::<SortDirection>().unwrap_err(),
            TypeConstraintError::InvalidSortDirection("up".to_string())
        );
    }

    #[test]
    fn now_has_microsecond_precision() {
        assert_eq!(now().timestamp_subsec_nanos() % 1_000, 0);
    }
}
