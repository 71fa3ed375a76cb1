use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DISPLAY_TIME_FORMAT, ParseError, TIME_SEPARATOR};

/// A point on the UTC timeline.
pub type Instant = DateTime<Utc>;

/// Parses a full timestamp with an offset or `Z`, e.g. `2017-12-31T18:15:00.000Z`.
///
/// # Errors
/// Returns `ParseError::InvalidFormat` if the text is not an RFC 3339 timestamp.
pub fn parse_instant(text: &str) -> Result<Instant, ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ParseError::InvalidFormat(format!("'{text}': {e}")))
}

/// The wall-clock date of `instant` in `zone`.
pub fn date_in_zone(instant: &Instant, zone: Tz) -> CalendarDate {
    CalendarDate::from(instant.with_timezone(&zone).date_naive())
}

/// Parses either `YYYY-MM-DD` or a full timestamp into a date, reading the
/// timestamp's wall-clock date in `zone`.
pub(crate) fn parse_date_or_instant(text: &str, zone: Tz) -> Result<CalendarDate, ParseError> {
    if text.contains(TIME_SEPARATOR) {
        Ok(date_in_zone(&parse_instant(text)?, zone))
    } else {
        text.parse()
    }
}

/// Display date and 12-hour clock time of an instant, e.g. `31 December 2017`
/// and `6:15 pm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateAndTime {
    pub date: String,
    pub time: String,
}

/// Renders `text` as a local display date and lower-case `h:mm am|pm` time in `zone`.
///
/// # Errors
/// Returns `ParseError::InvalidFormat` if `text` is not a timestamp.
pub fn date_and_time(text: &str, zone: Tz) -> Result<DateAndTime, ParseError> {
    let instant = parse_instant(text)?;
    let local = instant.with_timezone(&zone);
    let date = CalendarDate::from(local.date_naive());

    Ok(DateAndTime {
        date: date.display_format(),
        time: local.format(DISPLAY_TIME_FORMAT).to_string().to_lowercase(),
    })
}
