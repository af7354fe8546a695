use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

use crate::enums::Field;

/// Message used when every field on the form is missing.
pub const ALL_FIELDS_REQUIRED: &str = "All fields on the form are required";

/// Produced by `validate` when one or more mandatory fields are empty.
///
/// The missing fields collapse into a single banner message through
/// [`fmt::Display`]; see [`ValidationError::message`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    missing: BTreeSet<Field>,
}

impl ValidationError {
    /// Build an error from the failing fields. Returns `None` when nothing failed.
    pub fn from_missing(missing: impl IntoIterator<Item = Field>) -> Option<Self> {
        let missing: BTreeSet<Field> = missing.into_iter().collect();
        if missing.is_empty() {
            None
        } else {
            Some(Self { missing })
        }
    }

    /// Failing fields, in form order.
    pub fn missing(&self) -> impl Iterator<Item = Field> + '_ {
        self.missing.iter().copied()
    }

    pub fn is_missing(&self, field: Field) -> bool {
        self.missing.contains(&field)
    }

    /// The aggregate banner message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.missing.len();
        if count == Field::ALL.len() {
            return f.write_str(ALL_FIELDS_REQUIRED);
        }

        let joined = self
            .missing
            .iter()
            .map(|field| field.as_str().to_uppercase())
            .collect::<Vec<_>>()
            .join(" and ");
        let (noun, verb) = if count == 1 {
            ("field", "is")
        } else {
            ("fields", "are")
        };
        write!(f, "{} {} {} required", joined, noun, verb)
    }
}

impl std::error::Error for ValidationError {}

/// Failure of the catalog collaborator or of decoding its response.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("failed to decode location catalog: {0}")]
    Decode(String),
    #[error("location catalog unavailable: {0}")]
    Unavailable(String),
}

/// Produced when a [`crate::config::FormConfig`] cannot be loaded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("empty configuration")]
    Empty,
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// The date picker refused a day.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{date} is before the earliest selectable day {earliest}")]
pub struct DateRejected {
    pub date: NaiveDate,
    pub earliest: NaiveDate,
}
