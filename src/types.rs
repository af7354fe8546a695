use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ─── Catalog ────────────────────────────────────────────────────────────────

/// The country → state → city directory the selects are populated from.
///
/// Iteration follows the order of the source document. City lists are
/// trusted as delivered: no sorting, no de-duplication.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationCatalog {
    countries: IndexMap<String, CountryNode>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryNode {
    #[serde(default)]
    pub states: IndexMap<String, StateNode>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateNode {
    #[serde(default)]
    pub cities: Vec<String>,
}

impl LocationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion used by callers assembling a catalog in code.
    pub fn with_city(
        mut self,
        country: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        self.countries
            .entry(country.into())
            .or_default()
            .states
            .entry(state.into())
            .or_default()
            .cities
            .push(city.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// States under `country`, or nothing if the country is unknown.
    pub fn states(&self, country: &str) -> impl Iterator<Item = &str> {
        self.countries
            .get(country)
            .into_iter()
            .flat_map(|node| node.states.keys().map(String::as_str))
    }

    /// Cities under `country`/`state`, or an empty slice if either is unknown.
    pub fn cities(&self, country: &str, state: &str) -> &[String] {
        self.countries
            .get(country)
            .and_then(|node| node.states.get(state))
            .map(|node| node.cities.as_slice())
            .unwrap_or(&[])
    }
}

// ─── Selection ──────────────────────────────────────────────────────────────

/// The in-progress choice on the form.
///
/// Fields are only reachable through [`crate::reduce::reduce`], which keeps
/// `state` empty whenever `country` is, and `city` empty whenever `state` is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub(crate) country: String,
    pub(crate) state: String,
    pub(crate) city: String,
    pub(crate) date: Option<NaiveDate>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }
}

// ─── Delivery details ───────────────────────────────────────────────────────

/// Payload handed to the shared store and to the submit callback.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryDetails {
    pub country: String,
    pub state: String,
    pub city: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
}

// ─── Select options ─────────────────────────────────────────────────────────

/// One entry of a rendered select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn choice(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
            disabled: false,
        }
    }

    pub fn placeholder(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            disabled: true,
        }
    }
}
