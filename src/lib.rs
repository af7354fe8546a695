//! Cascading delivery-location filter for a marketplace storefront.
//!
//! Customers pick a country, a state within it, a city within that, and a
//! delivery date. This crate holds everything behind those four controls
//! except the rendering:
//!
//! ```text
//! snapshot → Selection ─reduce(action)→ Selection → validate → DeliveryDetails
//!               catalog fetch → CatalogState → available_* views
//! ```
//!
//! Collaborators (catalog source, shared delivery store, error banner,
//! clock, client-side storage) are traits in [`ports`] and are injected into
//! [`LocationFilterForm`].
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use location_filter::ports::{FixedClock, MemoryDeliveryStore, MemoryErrorSlot, MemoryKeyValueStore};
//! use location_filter::{Collaborators, FormConfig, LocationFilterForm, parse_catalog};
//!
//! let store = Arc::new(MemoryDeliveryStore::new());
//! let collaborators = Collaborators {
//!     delivery: store.clone(),
//!     errors: Arc::new(MemoryErrorSlot::new()),
//!     clock: Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())),
//! };
//! let mut form = LocationFilterForm::new(
//!     FormConfig::default(),
//!     &MemoryKeyValueStore::new(),
//!     collaborators,
//!     |details| println!("searching vendors in {}", details.city),
//! );
//!
//! let ticket = form.begin_catalog_fetch();
//! let catalog = parse_catalog(r#"{"data":{"NG":{"states":{"Lagos":{"cities":["Ikeja"]}}}}}"#);
//! form.finish_catalog_fetch(ticket, catalog);
//!
//! form.set_country("NG");
//! form.set_state("Lagos");
//! form.set_city("Ikeja");
//! form.pick_date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()).unwrap();
//!
//! let details = form.submit().expect("complete selection");
//! assert_eq!(details.date, "2024-03-15");
//! assert_eq!(store.current(), Some(details));
//! ```

pub mod config;
pub mod date;
pub mod enums;
pub mod error;
pub mod form;
pub mod parse;
pub mod ports;
pub mod reduce;
pub mod snapshot;
pub mod types;
pub mod validate;
pub mod views;

pub use error::*;
pub use types::*;

// Re-export entry points at the crate root for convenience.
pub use config::FormConfig;
pub use form::{Collaborators, FetchTicket, LocationFilterForm};
pub use parse::parse_catalog;
pub use reduce::{Action, reduce};
pub use validate::validate;
