use chrono::Utc;
use chrono_tz::Tz;

use crate::{
    CalendarDate, DateAndTime, DatesConfig, ParseError, PeriodError, PeriodFields, PeriodHeading,
    PeriodRange, days, instant,
};

/// Entry point for document rendering: parses period dates, reading
/// timestamps in a configured zone, and turns them into headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountsDates {
    zone: Tz,
}

impl Default for AccountsDates {
    fn default() -> Self {
        Self { zone: Tz::UTC }
    }
}

impl AccountsDates {
    pub const fn with_zone(zone: Tz) -> Self {
        Self { zone }
    }

    /// # Errors
    /// Returns `ParseError::UnknownTimeZone` if the configured zone is not known.
    pub fn from_config(config: &DatesConfig) -> Result<Self, ParseError> {
        Ok(Self::with_zone(config.time_zone()?))
    }

    pub const fn zone(&self) -> Tz {
        self.zone
    }

    /// Parses `YYYY-MM-DD` or a full timestamp; a timestamp gives its date in this zone.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` for text that is neither.
    pub fn parse_date(&self, text: &str) -> Result<CalendarDate, ParseError> {
        instant::parse_date_or_instant(text, self.zone)
    }

    /// Balance sheet heading for period dates given as text.
    ///
    /// # Errors
    /// Fails if either date does not parse or the end is before the start.
    pub fn generate_heading(
        &self,
        period_start: &str,
        period_end: &str,
        same_year: bool,
    ) -> Result<String, PeriodError> {
        let heading = self.classify_text(period_start, period_end, same_year)?;
        Ok(heading.to_string())
    }

    /// Balance sheet heading for already parsed period dates.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidRange` if the end is before the start.
    pub fn generate_heading_for_dates(
        &self,
        period_start: CalendarDate,
        period_end: CalendarDate,
        same_year: bool,
    ) -> Result<String, PeriodError> {
        let period = PeriodRange::new(period_start, period_end)?;
        Ok(period.classify(same_year).to_string())
    }

    /// The heading split into its `periodStart` and `periodEnd` pieces.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidRange` if the end is before the start.
    pub fn period_fields(
        &self,
        period_start: CalendarDate,
        period_end: CalendarDate,
        same_year: bool,
    ) -> Result<PeriodFields, PeriodError> {
        let period = PeriodRange::new(period_start, period_end)?;
        Ok(period.classify(same_year).into())
    }

    /// # Errors
    /// Returns `ParseError::InvalidFormat` if `text` is not a timestamp.
    pub fn date_and_time(&self, text: &str) -> Result<DateAndTime, ParseError> {
        instant::date_and_time(text, self.zone)
    }

    /// Today's date in this zone.
    pub fn today(&self) -> CalendarDate {
        instant::date_in_zone(&Utc::now(), self.zone)
    }

    /// Up to `count` days after `current` that are not later than today.
    pub fn future_days(&self, current: CalendarDate, count: usize) -> Vec<CalendarDate> {
        days::future_days(current, count, self.today())
    }

    fn classify_text(
        &self,
        period_start: &str,
        period_end: &str,
        same_year: bool,
    ) -> Result<PeriodHeading, PeriodError> {
        let start = self.parse_date(period_start)?;
        let end = self.parse_date(period_end)?;
        Ok(PeriodRange::new(start, end)?.classify(same_year))
    }
}
