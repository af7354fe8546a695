use chrono::{FixedOffset, NaiveDate, TimeZone};
use location_filter::config::FormConfig;
use location_filter::date::{
    DatePolicy, calendar_day, format_delivery_date, format_display_date,
};
use location_filter::enums::RenderMode;
use location_filter::error::ConfigError;
use location_filter::ports::{DeliveryDetailsStore, KeyValueStore, MemoryKeyValueStore};
use location_filter::snapshot::{
    DEFAULT_SNAPSHOT_KEY, PersistentDeliveryStore, Snapshot, encode_snapshot, read_snapshot,
};
use location_filter::types::DeliveryDetails;
use std::sync::Arc;

fn details() -> DeliveryDetails {
    DeliveryDetails {
        country: "NG".into(),
        state: "Lagos".into(),
        city: "Ikeja".into(),
        date: "2024-03-15".into(),
    }
}

// ─── Snapshot ───────────────────────────────────────────────────────────────

#[test]
fn absent_snapshot_is_empty() {
    let store = MemoryKeyValueStore::new();
    assert!(read_snapshot(&store, DEFAULT_SNAPSHOT_KEY).is_empty());
}

#[test]
fn snapshot_without_details_is_empty() {
    for raw in [
        "{}",
        r#"{"state":null}"#,
        r#"{"state":{}}"#,
        r#"{"state":{"deliveryDetails":null}}"#,
        "",
    ] {
        let store = MemoryKeyValueStore::with_entry(DEFAULT_SNAPSHOT_KEY, raw);
        assert!(
            read_snapshot(&store, DEFAULT_SNAPSHOT_KEY).is_empty(),
            "expected empty snapshot for {:?}",
            raw
        );
    }
}

#[test]
fn partial_details_read_back() {
    let store = MemoryKeyValueStore::with_entry(
        DEFAULT_SNAPSHOT_KEY,
        r#"{"state":{"deliveryDetails":{"country":"NG"}}}"#,
    );
    let snapshot = read_snapshot(&store, DEFAULT_SNAPSHOT_KEY);
    assert_eq!(snapshot.country, "NG");
    assert_eq!(snapshot.state, "");
}

#[test]
fn null_date_still_seeds_location() {
    let store = MemoryKeyValueStore::with_entry(
        DEFAULT_SNAPSHOT_KEY,
        r#"{"state":{"deliveryDetails":{"country":"NG","state":"Lagos","city":"Ikeja","date":null}},"version":0}"#,
    );
    let snapshot = read_snapshot(&store, DEFAULT_SNAPSHOT_KEY);
    assert_eq!(
        snapshot,
        Snapshot {
            country: "NG".into(),
            state: "Lagos".into(),
            city: "Ikeja".into(),
        }
    );
    let seeded = snapshot.seed();
    assert_eq!((seeded.country(), seeded.state(), seeded.city()), ("NG", "Lagos", "Ikeja"));
}

#[test]
fn null_city_keeps_country_and_state() {
    let store = MemoryKeyValueStore::with_entry(
        DEFAULT_SNAPSHOT_KEY,
        r#"{"state":{"deliveryDetails":{"country":"NG","state":"Lagos","city":null}}}"#,
    );
    let snapshot = read_snapshot(&store, DEFAULT_SNAPSHOT_KEY);
    assert_eq!(snapshot.country, "NG");
    assert_eq!(snapshot.state, "Lagos");
    assert_eq!(snapshot.city, "");
}

#[test]
fn encoded_document_shape() {
    let doc: serde_json::Value = serde_json::from_str(&encode_snapshot(&details()).unwrap()).unwrap();
    assert_eq!(doc["state"]["deliveryDetails"]["city"], "Ikeja");
    assert_eq!(doc["state"]["deliveryDetails"]["date"], "2024-03-15");
    assert_eq!(doc["version"], 0);
}

#[test]
fn seed_drops_orphans() {
    let orphan_state = Snapshot {
        country: String::new(),
        state: "Lagos".into(),
        city: "Ikeja".into(),
    };
    assert_eq!(orphan_state.seed().state(), "");
    assert_eq!(orphan_state.seed().city(), "");

    let orphan_city = Snapshot {
        country: "NG".into(),
        state: String::new(),
        city: "Ikeja".into(),
    };
    let seeded = orphan_city.seed();
    assert_eq!(seeded.country(), "NG");
    assert_eq!(seeded.city(), "");
}

#[test]
fn persistent_store_writes_under_key() {
    let backend = Arc::new(MemoryKeyValueStore::new());
    let store = PersistentDeliveryStore::new(backend.clone(), "custom-key");
    store.set_delivery_details(details());
    assert!(backend.get(DEFAULT_SNAPSHOT_KEY).is_none());
    let snapshot = read_snapshot(backend.as_ref(), "custom-key");
    assert_eq!(snapshot.city, "Ikeja");
}

// ─── Dates ──────────────────────────────────────────────────────────────────

#[test]
fn formats_calendar_date() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    assert_eq!(format_delivery_date(date), "2024-03-05");
}

#[test]
fn display_date_ordinals() {
    let cases = [
        ((2024, 3, 1), "March 1st, 2024"),
        ((2024, 3, 2), "March 2nd, 2024"),
        ((2024, 3, 3), "March 3rd, 2024"),
        ((2024, 3, 4), "March 4th, 2024"),
        ((2024, 3, 11), "March 11th, 2024"),
        ((2024, 3, 12), "March 12th, 2024"),
        ((2024, 3, 13), "March 13th, 2024"),
        ((2024, 3, 21), "March 21st, 2024"),
        ((2024, 12, 22), "December 22nd, 2024"),
        ((2025, 1, 23), "January 23rd, 2025"),
    ];
    for ((y, m, d), expected) in cases {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(format_display_date(date), expected);
    }
}

#[test]
fn calendar_day_ignores_time_and_offset() {
    let lagos = FixedOffset::east_opt(3600).unwrap();
    let late = lagos.with_ymd_and_hms(2024, 3, 15, 23, 59, 0).unwrap();
    assert_eq!(calendar_day(&late), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
}

#[test]
fn policy_per_mode() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let yesterday = today.pred_opt().unwrap();
    assert_eq!(DatePolicy::for_mode(RenderMode::Default), DatePolicy::Open);
    assert!(DatePolicy::for_mode(RenderMode::Default).is_selectable(yesterday, today));
    assert!(!DatePolicy::for_mode(RenderMode::Sheet).is_selectable(yesterday, today));
    assert!(DatePolicy::for_mode(RenderMode::Sheet).is_selectable(today, today));
}

// ─── Config ─────────────────────────────────────────────────────────────────

#[test]
fn config_defaults() {
    let config = FormConfig::default();
    assert_eq!(config.mode, RenderMode::Default);
    assert_eq!(config.snapshot_key, "delivery-storage");
    assert_eq!(config.loading_label, "Loading…");
}

#[test]
fn config_from_yaml() {
    let config = FormConfig::from_yaml("mode: sheet\nloading_label: \"Please wait\"\n").unwrap();
    assert_eq!(config.mode, RenderMode::Sheet);
    assert_eq!(config.loading_label, "Please wait");
    assert_eq!(config.snapshot_key, DEFAULT_SNAPSHOT_KEY);
}

#[test]
fn config_rejects_unknown_keys() {
    assert!(matches!(
        FormConfig::from_yaml("mode: sheet\ncolour: red\n"),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn config_rejects_empty() {
    assert_eq!(FormConfig::from_yaml("  \n"), Err(ConfigError::Empty));
}
