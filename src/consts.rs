/// `chrono` pattern for ISO dates, e.g. `2017-03-05`
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
/// `chrono` pattern for heading dates, e.g. `5 March 2017`
pub const DISPLAY_DATE_FORMAT: &str = "%-d %B %Y";
/// `chrono` pattern for clock times before lower-casing, e.g. `6:15 PM`
pub const DISPLAY_TIME_FORMAT: &str = "%-I:%M %p";

/// Length of `YYYY-MM-DD`
pub(crate) const ISO_DATE_LEN: usize = 10;

pub const MONTHS_PER_YEAR: i64 = 12;

/// Nominal length of a twelve month accounting period
pub const YEAR_LENGTH_DAYS: i64 = 365;
/// Days either side of `YEAR_LENGTH_DAYS` still shown as a bare year
pub const YEAR_ALLOWANCE_DAYS: i64 = 15;
/// Leftover days at or above this round the month count up
pub const MONTH_ROUNDING_DAYS: i64 = 15;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the date and time of an instant
pub const TIME_SEPARATOR: char = 'T';

/// Zone used when none is configured
pub const DEFAULT_ZONE: &str = "UTC";
