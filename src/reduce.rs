//! Cascading selection transitions.
//!
//! ```text
//! SetCountry → clears state, city
//! SetState   → clears city
//! SetCity    → leaf
//! SetDate    → independent of the location chain
//! ```
//!
//! A parent change always invalidates every descendant, even when the new
//! value equals the old one.

use chrono::NaiveDate;

use crate::types::Selection;

/// A single edit to the selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SetCountry(String),
    SetState(String),
    SetCity(String),
    SetDate(Option<NaiveDate>),
}

/// Apply `action` to `selection`, returning the next selection.
///
/// Values are expected to exist in the catalog at the matching level; the
/// caller only offers valid choices, so membership is not checked here.
/// Setting a child while its parent is empty is ignored, which keeps the
/// ancestor invariant intact for every input.
pub fn reduce(selection: Selection, action: Action) -> Selection {
    match action {
        Action::SetCountry(country) => {
            tracing::debug!(%country, "country changed, clearing state and city");
            Selection {
                country,
                state: String::new(),
                city: String::new(),
                ..selection
            }
        }
        Action::SetState(state) => {
            if selection.country.is_empty() && !state.is_empty() {
                tracing::debug!(%state, "ignoring state without a country");
                return selection;
            }
            tracing::debug!(%state, "state changed, clearing city");
            Selection {
                state,
                city: String::new(),
                ..selection
            }
        }
        Action::SetCity(city) => {
            if selection.state.is_empty() && !city.is_empty() {
                tracing::debug!(%city, "ignoring city without a state");
                return selection;
            }
            Selection { city, ..selection }
        }
        Action::SetDate(date) => Selection { date, ..selection },
    }
}
