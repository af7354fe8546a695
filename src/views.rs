//! Read-only views derived from the catalog and the current selection.
//!
//! All views are recomputed on every call. Nothing is cached.

use crate::date::format_display_date;
use crate::enums::{FetchStatus, RenderMode};
use crate::types::{LocationCatalog, SelectOption, Selection};

/// Value of the disabled entry shown while the catalog is loading.
pub const LOADING_VALUE: &str = "loading";

/// Catalog as last observed by the form.
///
/// A catalog from an earlier successful fetch may be kept while a new fetch
/// is pending; it is never shown until that fetch succeeds.
#[derive(Clone, Debug)]
pub struct CatalogState {
    pub status: FetchStatus,
    pub catalog: Option<LocationCatalog>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            status: FetchStatus::Pending,
            catalog: None,
        }
    }
}

impl CatalogState {
    /// The catalog, when it may be shown.
    pub fn ready(&self) -> Option<&LocationCatalog> {
        match self.status {
            FetchStatus::Success => self.catalog.as_ref(),
            FetchStatus::Pending | FetchStatus::Error => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Pending
    }
}

// ─── Options ────────────────────────────────────────────────────────────────

pub fn available_countries(catalog: &CatalogState, loading_label: &str) -> Vec<SelectOption> {
    options(catalog, loading_label, |c| c.countries().map(SelectOption::choice).collect())
}

pub fn available_states(
    catalog: &CatalogState,
    selection: &Selection,
    loading_label: &str,
) -> Vec<SelectOption> {
    options(catalog, loading_label, |c| {
        if selection.country().is_empty() {
            return Vec::new();
        }
        c.states(selection.country()).map(SelectOption::choice).collect()
    })
}

pub fn available_cities(
    catalog: &CatalogState,
    selection: &Selection,
    loading_label: &str,
) -> Vec<SelectOption> {
    options(catalog, loading_label, |c| {
        if selection.country().is_empty() || selection.state().is_empty() {
            return Vec::new();
        }
        c.cities(selection.country(), selection.state())
            .iter()
            .map(|city| SelectOption::choice(city))
            .collect()
    })
}

fn options(
    catalog: &CatalogState,
    loading_label: &str,
    build: impl FnOnce(&LocationCatalog) -> Vec<SelectOption>,
) -> Vec<SelectOption> {
    if catalog.is_loading() {
        return vec![SelectOption::placeholder(LOADING_VALUE, loading_label)];
    }
    catalog.ready().map(build).unwrap_or_default()
}

// ─── Triggers ───────────────────────────────────────────────────────────────

pub fn country_trigger_label(catalog: &CatalogState, selection: &Selection) -> String {
    if catalog.is_loading() {
        "Loading countries...".to_string()
    } else if !selection.country().is_empty() {
        selection.country().to_string()
    } else {
        "Country".to_string()
    }
}

pub fn state_trigger_label(selection: &Selection) -> String {
    if selection.country().is_empty() {
        "Select country first".to_string()
    } else if !selection.state().is_empty() {
        selection.state().to_string()
    } else {
        "State".to_string()
    }
}

pub fn city_trigger_label(selection: &Selection) -> String {
    if selection.state().is_empty() {
        "Select state first".to_string()
    } else if !selection.city().is_empty() {
        selection.city().to_string()
    } else {
        "City".to_string()
    }
}

pub fn date_trigger_label(selection: &Selection, mode: RenderMode) -> String {
    match selection.date() {
        Some(date) => format_display_date(date),
        None => match mode {
            RenderMode::Default => "Pick a delivery date".to_string(),
            RenderMode::Sheet => "Delivery date".to_string(),
        },
    }
}

pub fn is_state_enabled(selection: &Selection) -> bool {
    !selection.country().is_empty()
}

pub fn is_city_enabled(selection: &Selection) -> bool {
    !selection.state().is_empty()
}
