//! Submit-time validation.
//!
//! Every field is mandatory. All failing fields are collected, not just the
//! first, and collapse into one [`ValidationError`].

use crate::enums::Field;
use crate::error::ValidationError;
use crate::types::Selection;

/// Validate a selection. An empty string or an unset date fails its field.
pub fn validate(selection: &Selection) -> Result<(), ValidationError> {
    let mut missing = Vec::new();

    require_text(Field::Country, selection.country(), &mut missing);
    require_text(Field::State, selection.state(), &mut missing);
    require_text(Field::City, selection.city(), &mut missing);
    if selection.date().is_none() {
        missing.push(Field::Date);
    }

    match ValidationError::from_missing(missing) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn require_text(field: Field, value: &str, missing: &mut Vec<Field>) {
    if value.is_empty() {
        missing.push(field);
    }
}
