//! Closed enumerations used throughout the filter form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A mandatory form field.
///
/// Variants are declared in form order, so an ordered set of fields always
/// iterates country, state, city, date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Country,
    State,
    City,
    Date,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 4] = [Field::Country, Field::State, Field::City, Field::Date];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Country => "country",
            Field::State => "state",
            Field::City => "city",
            Field::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the form is rendered.
///
/// Only the layout and the date picker's minimum date depend on this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    #[default]
    Default,
    Sheet,
}

/// Status of the catalog fetch, as observed by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    Pending,
    Success,
    Error,
}
