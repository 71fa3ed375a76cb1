//! Accounting period dates and balance sheet headings.
//!
//! Dates enter as `YYYY-MM-DD` text or as full instants, are compared at day
//! granularity and leave either as ISO text, long display text
//! (`5 March 2017`) or as a balance sheet heading (`2017`,
//! `13 months to 16 February 2015`, `30 June 2015`).

mod config;
mod consts;
mod days;
mod heading;
mod helper;
mod instant;
mod period;
mod prelude;

pub use chrono_tz::Tz;
pub use config::DatesConfig;
pub use consts::*;
pub use days::{future_days, previous_days};
pub use heading::{PeriodFields, PeriodHeading, render};
pub use helper::AccountsDates;
pub use instant::{DateAndTime, Instant, date_and_time, date_in_zone, parse_instant};
pub use period::{CalendarDiff, PeriodError, PeriodRange, classify_period};

use crate::prelude::*;
use chrono::{Datelike, Months, NaiveDate};
use std::str::FromStr;

/// A day in the proleptic Gregorian calendar, with no time or zone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", "_0.format(ISO_DATE_FORMAT)")]
pub struct CalendarDate(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    /// Text is not shaped like the expected date or timestamp.
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    /// Well-formed text naming a day that does not exist, e.g. `2015-02-29`.
    #[display(fmt = "Invalid date: {_0}")]
    InvalidDate(String),
    /// Nothing to parse.
    #[display(fmt = "Empty date string")]
    EmptyInput,
    /// Zone name is not in the IANA database.
    #[display(fmt = "Unknown time zone: {_0}")]
    UnknownTimeZone(String),
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from its components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDate` if the day does not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ParseError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ParseError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Long form used in headings, e.g. `5 March 2017`.
    pub fn display_format(&self) -> String {
        self.0.format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// `YYYY-MM-DD`.
    pub fn iso_format(&self) -> String {
        self.to_string()
    }

    pub fn is_same_year(&self, other: &Self) -> bool {
        self.year() == other.year()
    }

    /// Whole days from `self` to `end`; negative when `end` is earlier.
    pub fn days_until(&self, end: &Self) -> i64 {
        end.0.signed_duration_since(self.0).num_days()
    }

    /// Whole months from `self` to `end`.
    ///
    /// A month only counts once the day of month has been reached again, so
    /// 7 March to 1 April is zero months.
    pub fn months_until(&self, end: &Self) -> i64 {
        let packed_start = self.proleptic_month() * 32 + i64::from(self.day());
        let packed_end = end.proleptic_month() * 32 + i64::from(end.day());
        (packed_end - packed_start) / 32
    }

    /// The following day, or `None` past the last representable date.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// The preceding day, or `None` before the first representable date.
    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    pub(crate) fn proleptic_month(&self) -> i64 {
        i64::from(self.year()) * MONTHS_PER_YEAR + i64::from(self.month0())
    }

    /// Moved forward by `months`, clamped to the end of a shorter month.
    pub(crate) fn add_months(&self, months: i64) -> Option<Self> {
        let months = u32::try_from(months).ok()?;
        self.0.checked_add_months(Months::new(months)).map(Self)
    }

    /// Number of days in this date's month.
    pub(crate) fn month_length(&self) -> i64 {
        self.0
            .with_day(1)
            .and_then(|first| {
                first
                    .checked_add_months(Months::new(1))
                    .map(|next| next.signed_duration_since(first).num_days())
            })
            .unwrap_or(31)
    }

    fn month0(&self) -> u32 {
        self.0.month0()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

/// Parses `YYYY-MM-DD` text into a [`CalendarDate`].
///
/// # Errors
/// Returns `ParseError::InvalidFormat` for anything that is not four, two and
/// two digits separated by `-`, and `ParseError::InvalidDate` for a day that
/// does not exist.
pub fn parse_calendar_date(text: &str) -> Result<CalendarDate, ParseError> {
    text.parse()
}

/// Exactly `DDDD-DD-DD`; leading or trailing whitespace is not accepted.
fn is_iso_date_shaped(text: &str) -> bool {
    text.len() == ISO_DATE_LEN
        && text.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == DATE_SEPARATOR as u8,
            _ => b.is_ascii_digit(),
        })
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if !is_iso_date_shaped(s) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }

        let date = NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
            .map_err(|e| ParseError::InvalidDate(format!("{s}: {e}")))?;
        log::trace!("parsed calendar date {date} from {s:?}");
        Ok(Self(date))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
