//! Calendar date with an optional time-of-day.
//!
//! # Responsibility
//! - Hold the date/time pairs used by deadline and event tasks.
//! - Parse the strict ISO forms accepted from user input and from storage.
//!
//! # Invariants
//! - Dates are accepted only as `YYYY-MM-DD` naming a real calendar day.
//! - Times are accepted only as zero-padded 24-hour `HH:MM`.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static CLOCK_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[01]\d|2[0-3]):[0-5]\d$").expect("valid time regex"));

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const CLOCK_TIME_FORMAT: &str = "%H:%M";
const DISPLAY_DATE_FORMAT: &str = "%b %d %Y";

/// A point on the calendar, optionally pinned to a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

impl Moment {
    pub fn new(date: NaiveDate, time: Option<NaiveTime>) -> Self {
        Self { date, time }
    }

    /// Whole-day moment without a time component.
    pub fn on(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    /// ISO date text, as written to storage.
    pub fn iso_date(&self) -> String {
        format_iso_date(self.date)
    }

    /// `HH:MM` text when a time is set.
    pub fn iso_time(&self) -> Option<String> {
        self.time.map(format_clock_time)
    }
}

impl Display for Moment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date.format(DISPLAY_DATE_FORMAT))?;
        if let Some(time) = self.time {
            write!(f, " {}", time.format(CLOCK_TIME_FORMAT))?;
        }
        Ok(())
    }
}

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// Returns `None` for any other shape or for impossible days such as
/// `2023-02-30`.
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    if !ISO_DATE_RE.is_match(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, ISO_DATE_FORMAT).ok()
}

/// Parses a strict zero-padded 24-hour `HH:MM` time.
pub fn parse_clock_time(text: &str) -> Option<NaiveTime> {
    if !CLOCK_TIME_RE.is_match(text) {
        return None;
    }
    NaiveTime::parse_from_str(text, CLOCK_TIME_FORMAT).ok()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

pub fn format_clock_time(time: NaiveTime) -> String {
    time.format(CLOCK_TIME_FORMAT).to_string()
}
