//! Persisted delivery details.
//!
//! The client-side store keeps one JSON document per key:
//!
//! ```text
//! { "state": { "deliveryDetails": { "country", "state", "city", "date" } }, "version": 0 }
//! ```
//!
//! A previous session's choice is read back at form construction to
//! pre-fill the selects. The date is never restored.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::ports::{DeliveryDetailsStore, KeyValueStore};
use crate::reduce::{Action, reduce};
use crate::types::{DeliveryDetails, Selection};

/// Default storage key of the persisted document.
pub const DEFAULT_SNAPSHOT_KEY: &str = "delivery-storage";

const DOCUMENT_VERSION: u32 = 0;

#[derive(Debug, Serialize)]
struct PersistedDocument<'a> {
    state: PersistedState<'a>,
    version: u32,
}

#[derive(Debug, Serialize)]
struct PersistedState<'a> {
    #[serde(rename = "deliveryDetails")]
    delivery_details: &'a DeliveryDetails,
}

// Read side is lenient: any field may be absent or null, and the date is ignored.
#[derive(Debug, Default, Deserialize)]
struct StoredDocument {
    #[serde(default)]
    state: Option<StoredState>,
}

#[derive(Debug, Default, Deserialize)]
struct StoredState {
    #[serde(rename = "deliveryDetails", default)]
    delivery_details: Option<StoredLocation>,
}

#[derive(Debug, Default, Deserialize)]
struct StoredLocation {
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    city: Option<String>,
}

/// The location part of a previous session's selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub country: String,
    pub state: String,
    pub city: String,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.country.is_empty() && self.state.is_empty() && self.city.is_empty()
    }

    /// Replay the snapshot through the reducer.
    ///
    /// A child is only applied when its parent was, so orphaned values in a
    /// corrupt document are dropped instead of breaking the selection.
    pub fn seed(&self) -> Selection {
        let mut selection = Selection::new();
        if self.country.is_empty() {
            return selection;
        }
        selection = reduce(selection, Action::SetCountry(self.country.clone()));
        if self.state.is_empty() {
            return selection;
        }
        selection = reduce(selection, Action::SetState(self.state.clone()));
        if !self.city.is_empty() {
            selection = reduce(selection, Action::SetCity(self.city.clone()));
        }
        selection
    }
}

/// Read the snapshot stored under `key`.
///
/// Absent, empty, or unreadable documents give an empty snapshot.
pub fn read_snapshot(store: &dyn KeyValueStore, key: &str) -> Snapshot {
    let Some(raw) = store.get(key) else {
        return Snapshot::default();
    };
    if raw.trim().is_empty() {
        return Snapshot::default();
    }

    match serde_json::from_str::<StoredDocument>(&raw) {
        Ok(doc) => doc
            .state
            .and_then(|state| state.delivery_details)
            .map(|location| Snapshot {
                country: location.country.unwrap_or_default(),
                state: location.state.unwrap_or_default(),
                city: location.city.unwrap_or_default(),
            })
            .unwrap_or_default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring unreadable delivery snapshot");
            Snapshot::default()
        }
    }
}

/// Encode `details` as the persisted document.
pub fn encode_snapshot(details: &DeliveryDetails) -> Result<String, serde_json::Error> {
    serde_json::to_string(&PersistedDocument {
        state: PersistedState {
            delivery_details: details,
        },
        version: DOCUMENT_VERSION,
    })
}

/// Delivery-details store that persists every write to a [`KeyValueStore`].
pub struct PersistentDeliveryStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
}

impl PersistentDeliveryStore {
    pub fn new(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }
}

impl DeliveryDetailsStore for PersistentDeliveryStore {
    fn set_delivery_details(&self, details: DeliveryDetails) {
        match encode_snapshot(&details) {
            Ok(doc) => self.backend.set(&self.key, doc),
            Err(e) => tracing::warn!(key = %self.key, error = %e, "failed to persist delivery details"),
        }
    }
}
