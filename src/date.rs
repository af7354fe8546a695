//! Delivery date policy and formatting.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::enums::RenderMode;
use crate::error::DateRejected;

/// Canonical calendar-date format written to the delivery store.
pub const DELIVERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Which days the picker offers in a given rendering mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatePolicy {
    /// Any day is selectable.
    Open,
    /// Days strictly before the current local day are disabled.
    NotBeforeToday,
}

impl DatePolicy {
    pub fn for_mode(mode: RenderMode) -> Self {
        match mode {
            RenderMode::Default => DatePolicy::Open,
            RenderMode::Sheet => DatePolicy::NotBeforeToday,
        }
    }

    /// Earliest selectable day, if any, given the local calendar day `today`.
    pub fn earliest(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DatePolicy::Open => None,
            DatePolicy::NotBeforeToday => Some(today),
        }
    }

    pub fn check(self, date: NaiveDate, today: NaiveDate) -> Result<(), DateRejected> {
        match self.earliest(today) {
            Some(earliest) if date < earliest => Err(DateRejected { date, earliest }),
            _ => Ok(()),
        }
    }

    pub fn is_selectable(self, date: NaiveDate, today: NaiveDate) -> bool {
        self.check(date, today).is_ok()
    }
}

/// Format a delivery date as `YYYY-MM-DD`.
pub fn format_delivery_date(date: NaiveDate) -> String {
    date.format(DELIVERY_DATE_FORMAT).to_string()
}

/// Long, human-readable form shown on the picker trigger, e.g. `March 15th, 2024`.
pub fn format_display_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {}{}, {}", date.format("%B"), day, suffix, date.year())
}

/// The calendar day of `moment` in its own offset; time of day and offset are dropped.
pub fn calendar_day<Tz: TimeZone>(moment: &DateTime<Tz>) -> NaiveDate {
    moment.date_naive()
}
