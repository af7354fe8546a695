//! Collaborators the form talks to, injected at construction.
//!
//! Each port comes with an in-memory implementation that records what it
//! was given, so callers can substitute it and assert exact arguments.

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use std::collections::HashMap;

use crate::error::CatalogError;
use crate::parse::parse_catalog;
use crate::types::{DeliveryDetails, LocationCatalog};

// ─── Catalog source ─────────────────────────────────────────────────────────

/// Remote location directory.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_locations(&self) -> Result<LocationCatalog, CatalogError>;
}

/// Serves a fixed response body, decoded on every fetch.
pub struct StaticCatalogSource {
    body: Result<String, CatalogError>,
}

impl StaticCatalogSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Ok(body.into()),
        }
    }

    pub fn failing(error: CatalogError) -> Self {
        Self { body: Err(error) }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_locations(&self) -> Result<LocationCatalog, CatalogError> {
        match &self.body {
            Ok(body) => parse_catalog(body),
            Err(e) => Err(e.clone()),
        }
    }
}

// ─── Key-value persistence ──────────────────────────────────────────────────

/// Client-side key-value storage that outlives the form.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
}

#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(key, value.into());
        store
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries.lock().insert(key.to_string(), value);
    }
}

// ─── Delivery details ───────────────────────────────────────────────────────

/// Shared store the selection is written to on a successful submit.
pub trait DeliveryDetailsStore: Send + Sync {
    fn set_delivery_details(&self, details: DeliveryDetails);
}

/// Keeps every write, last one wins.
#[derive(Debug, Default)]
pub struct MemoryDeliveryStore {
    writes: Mutex<Vec<DeliveryDetails>>,
}

impl MemoryDeliveryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<DeliveryDetails> {
        self.writes.lock().last().cloned()
    }

    pub fn writes(&self) -> Vec<DeliveryDetails> {
        self.writes.lock().clone()
    }
}

impl DeliveryDetailsStore for MemoryDeliveryStore {
    fn set_delivery_details(&self, details: DeliveryDetails) {
        self.writes.lock().push(details);
    }
}

// ─── Form error slot ────────────────────────────────────────────────────────

/// Holds at most one banner message for the whole form.
pub trait FormErrorSlot: Send + Sync {
    fn set_form_error(&self, message: String);
    fn reset_form_error(&self);
    fn current(&self) -> Option<String>;
}

#[derive(Debug, Default)]
pub struct MemoryErrorSlot {
    message: Mutex<Option<String>>,
    resets: Mutex<usize>,
}

impl MemoryErrorSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the slot was cleared.
    pub fn reset_count(&self) -> usize {
        *self.resets.lock()
    }
}

impl FormErrorSlot for MemoryErrorSlot {
    fn set_form_error(&self, message: String) {
        *self.message.lock() = Some(message);
    }

    fn reset_form_error(&self) {
        *self.message.lock() = None;
        *self.resets.lock() += 1;
    }

    fn current(&self) -> Option<String> {
        self.message.lock().clone()
    }
}

// ─── Clock ──────────────────────────────────────────────────────────────────

/// Source of the current local calendar day.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
