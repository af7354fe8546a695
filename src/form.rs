//! The location filter form.
//!
//! ```text
//! snapshot → seed selection → fetch catalog → edits cascade → submit
//!                                                             ├─ reset error slot
//!                                                             ├─ validate ── fail → set error slot
//!                                                             └─ ok → store write → on_submit
//! ```

use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;

use crate::config::FormConfig;
use crate::date::{DatePolicy, format_delivery_date};
use crate::enums::{FetchStatus, RenderMode};
use crate::error::{CatalogError, DateRejected, ValidationError};
use crate::ports::{CatalogSource, Clock, DeliveryDetailsStore, FormErrorSlot, KeyValueStore};
use crate::reduce::{Action, reduce};
use crate::snapshot::read_snapshot;
use crate::types::{DeliveryDetails, LocationCatalog, SelectOption, Selection};
use crate::validate::validate;
use crate::views::{self, CatalogState};

/// Callback invoked once per successful submission.
pub type SubmitHandler = Box<dyn FnMut(&DeliveryDetails) + Send>;

/// Shared collaborators written to or read from by the form.
#[derive(Clone)]
pub struct Collaborators {
    pub delivery: Arc<dyn DeliveryDetailsStore>,
    pub errors: Arc<dyn FormErrorSlot>,
    pub clock: Arc<dyn Clock>,
}

/// Proof that a catalog fetch was started by this form.
///
/// Only the most recently issued ticket of a mounted form is honoured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

pub struct LocationFilterForm {
    config: FormConfig,
    selection: Selection,
    catalog: CatalogState,
    generation: u64,
    mounted: bool,
    collaborators: Collaborators,
    on_submit: SubmitHandler,
}

impl fmt::Debug for LocationFilterForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationFilterForm")
            .field("config", &self.config)
            .field("selection", &self.selection)
            .field("catalog", &self.catalog)
            .field("generation", &self.generation)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl LocationFilterForm {
    /// Mount a form, pre-filled from the snapshot persisted under
    /// `config.snapshot_key`. The catalog starts out pending.
    pub fn new(
        config: FormConfig,
        persisted: &dyn KeyValueStore,
        collaborators: Collaborators,
        on_submit: impl FnMut(&DeliveryDetails) + Send + 'static,
    ) -> Self {
        let snapshot = read_snapshot(persisted, &config.snapshot_key);
        if !snapshot.is_empty() {
            tracing::debug!(
                country = %snapshot.country,
                state = %snapshot.state,
                city = %snapshot.city,
                "seeding selection from snapshot"
            );
        }

        Self {
            selection: snapshot.seed(),
            config,
            catalog: CatalogState::default(),
            generation: 0,
            mounted: true,
            collaborators,
            on_submit: Box::new(on_submit),
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn mode(&self) -> RenderMode {
        self.config.mode
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // ─── Cascading edits ────────────────────────────────────────────────────

    pub fn dispatch(&mut self, action: Action) {
        let current = std::mem::take(&mut self.selection);
        self.selection = reduce(current, action);
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.dispatch(Action::SetCountry(country.into()));
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.dispatch(Action::SetState(state.into()));
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.dispatch(Action::SetCity(city.into()));
    }

    // ─── Date ───────────────────────────────────────────────────────────────

    pub fn date_policy(&self) -> DatePolicy {
        DatePolicy::for_mode(self.config.mode)
    }

    /// Whether the picker offers `date` in this form's rendering mode.
    pub fn is_date_selectable(&self, date: NaiveDate) -> bool {
        self.date_policy()
            .is_selectable(date, self.collaborators.clock.today())
    }

    /// Select a delivery day through the picker.
    ///
    /// # Errors
    ///
    /// Returns [`DateRejected`] when the rendering mode disables `date`; the
    /// previous date is kept.
    pub fn pick_date(&mut self, date: NaiveDate) -> Result<(), DateRejected> {
        self.date_policy()
            .check(date, self.collaborators.clock.today())?;
        self.dispatch(Action::SetDate(Some(date)));
        Ok(())
    }

    pub fn clear_date(&mut self) {
        self.dispatch(Action::SetDate(None));
    }

    // ─── Catalog ────────────────────────────────────────────────────────────

    pub fn fetch_status(&self) -> FetchStatus {
        self.catalog.status
    }

    /// Mark a new fetch as in flight. Earlier tickets stop being honoured.
    pub fn begin_catalog_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.catalog.status = FetchStatus::Pending;
        tracing::debug!(generation = self.generation, "location catalog fetch started");
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply a fetch result. Returns `false` if the result was stale and discarded.
    pub fn finish_catalog_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<LocationCatalog, CatalogError>,
    ) -> bool {
        if !self.mounted || ticket.generation != self.generation {
            tracing::warn!(
                ticket = ticket.generation,
                current = self.generation,
                mounted = self.mounted,
                "discarding stale location catalog"
            );
            return false;
        }

        match result {
            Ok(catalog) => {
                self.catalog.status = FetchStatus::Success;
                self.catalog.catalog = Some(catalog);
            }
            Err(e) => {
                tracing::warn!(error = %e, "location catalog fetch failed");
                self.catalog.status = FetchStatus::Error;
            }
        }
        true
    }

    /// Fetch the catalog from `source` and apply it.
    ///
    /// The form stays mutably borrowed until the fetch resolves, so nothing
    /// can unmount it or start another fetch in between. Use
    /// [`Self::begin_catalog_fetch`] and
    /// [`Self::finish_catalog_fetch`] when the fetch may be abandoned by
    /// [`Self::unmount`] or superseded by a newer fetch while in flight.
    pub async fn load_catalog(&mut self, source: &dyn CatalogSource) -> bool {
        let ticket = self.begin_catalog_fetch();
        let result = source.fetch_locations().await;
        self.finish_catalog_fetch(ticket, result)
    }

    /// Abandon the form. In-flight fetch results are discarded from now on.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // ─── Views ──────────────────────────────────────────────────────────────

    pub fn available_countries(&self) -> Vec<SelectOption> {
        views::available_countries(&self.catalog, &self.config.loading_label)
    }

    pub fn available_states(&self) -> Vec<SelectOption> {
        views::available_states(&self.catalog, &self.selection, &self.config.loading_label)
    }

    pub fn available_cities(&self) -> Vec<SelectOption> {
        views::available_cities(&self.catalog, &self.selection, &self.config.loading_label)
    }

    pub fn country_label(&self) -> String {
        views::country_trigger_label(&self.catalog, &self.selection)
    }

    pub fn state_label(&self) -> String {
        views::state_trigger_label(&self.selection)
    }

    pub fn city_label(&self) -> String {
        views::city_trigger_label(&self.selection)
    }

    pub fn date_label(&self) -> String {
        views::date_trigger_label(&self.selection, self.config.mode)
    }

    pub fn is_state_enabled(&self) -> bool {
        views::is_state_enabled(&self.selection)
    }

    pub fn is_city_enabled(&self) -> bool {
        views::is_city_enabled(&self.selection)
    }

    // ─── Errors and submission ──────────────────────────────────────────────

    pub fn reset_error(&self) {
        self.collaborators.errors.reset_form_error();
    }

    pub fn error_message(&self) -> Option<String> {
        self.collaborators.errors.current()
    }

    /// Validate and hand off the selection.
    ///
    /// The error slot is cleared first on every attempt. On failure the
    /// aggregate message is placed in the slot and nothing else happens. On
    /// success the store is written before `on_submit` runs, so the callback
    /// may read the store.
    pub fn submit(&mut self) -> Result<DeliveryDetails, ValidationError> {
        self.reset_error();

        if let Err(err) = validate(&self.selection) {
            tracing::debug!(message = %err, "delivery filter rejected");
            self.collaborators.errors.set_form_error(err.message());
            return Err(err);
        }

        let details = DeliveryDetails {
            country: self.selection.country().to_string(),
            state: self.selection.state().to_string(),
            city: self.selection.city().to_string(),
            date: self
                .selection
                .date()
                .map(format_delivery_date)
                .unwrap_or_default(),
        };

        tracing::info!(
            country = %details.country,
            state = %details.state,
            city = %details.city,
            date = %details.date,
            "delivery filter submitted"
        );
        self.collaborators
            .delivery
            .set_delivery_details(details.clone());
        (self.on_submit)(&details);
        Ok(details)
    }
}
