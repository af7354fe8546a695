use chrono::NaiveDate;
use location_filter::enums::Field;
use location_filter::error::{ALL_FIELDS_REQUIRED, ValidationError};
use location_filter::reduce::{Action, reduce};
use location_filter::types::Selection;
use location_filter::validate::validate;

/// Helper: build a selection through the reducer, skipping empty values.
fn selection(country: &str, state: &str, city: &str, date: Option<NaiveDate>) -> Selection {
    let mut s = Selection::new();
    for action in [
        Action::SetCountry(country.to_string()),
        Action::SetState(state.to_string()),
        Action::SetCity(city.to_string()),
    ] {
        s = reduce(s, action);
    }
    reduce(s, Action::SetDate(date))
}

fn some_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 3, 15)
}

fn message_for(s: &Selection) -> String {
    validate(s).expect_err("selection should be invalid").message()
}

// ─── Aggregate messages ─────────────────────────────────────────────────────

#[test]
fn all_fields_missing() {
    let s = selection("", "", "", None);
    assert_eq!(message_for(&s), "All fields on the form are required");
    assert_eq!(message_for(&s), ALL_FIELDS_REQUIRED);
}

#[test]
fn state_and_city_missing() {
    let s = selection("NG", "", "", some_date());
    assert_eq!(message_for(&s), "STATE and CITY fields are required");
}

#[test]
fn city_missing() {
    let s = selection("NG", "Lagos", "", some_date());
    assert_eq!(message_for(&s), "CITY field is required");
}

#[test]
fn date_missing() {
    let s = selection("NG", "Lagos", "Ikeja", None);
    assert_eq!(message_for(&s), "DATE field is required");
}

#[test]
fn three_fields_joined_with_and() {
    let s = selection("NG", "", "", None);
    assert_eq!(message_for(&s), "STATE and CITY and DATE fields are required");
}

#[test]
fn complete_selection_is_valid() {
    let s = selection("NG", "Lagos", "Ikeja", some_date());
    assert!(validate(&s).is_ok());
}

// ─── ValidationError ────────────────────────────────────────────────────────

#[test]
fn missing_fields_in_form_order() {
    let err = ValidationError::from_missing([Field::Date, Field::Country]).unwrap();
    let missing: Vec<_> = err.missing().collect();
    assert_eq!(missing, vec![Field::Country, Field::Date]);
    assert_eq!(err.to_string(), "COUNTRY and DATE fields are required");
}

#[test]
fn duplicate_fields_counted_once() {
    let err = ValidationError::from_missing([Field::City, Field::City]).unwrap();
    assert_eq!(err.message(), "CITY field is required");
}

#[test]
fn no_missing_fields_is_no_error() {
    assert!(ValidationError::from_missing([]).is_none());
}

#[test]
fn reports_every_failing_field() {
    let err = validate(&selection("NG", "", "", None)).unwrap_err();
    assert!(!err.is_missing(Field::Country));
    assert!(err.is_missing(Field::State));
    assert!(err.is_missing(Field::City));
    assert!(err.is_missing(Field::Date));
}
