use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, MONTH_ROUNDING_DAYS, MONTHS_PER_YEAR, ParseError, PeriodHeading,
    YEAR_ALLOWANCE_DAYS, YEAR_LENGTH_DAYS, prelude::*,
};

/// The first and last day of an accounting period, both inclusive.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{start}/{end}")]
#[serde(try_from = "RawPeriod", into = "RawPeriod")]
pub struct PeriodRange {
    start: CalendarDate,
    end:   CalendarDate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Period end falls before period start.
    #[error("Invalid period: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// Error parsing one of the period dates.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

/// Years, months and days separating two dates, each component counted
/// after the larger ones have been taken off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarDiff {
    pub years:  i64,
    pub months: i64,
    pub days:   i64,
}

impl CalendarDiff {
    /// Breaks the gap between `start` and `end` down into calendar components.
    ///
    /// When the end day of month is before the start day of month a month is
    /// borrowed, and the leftover days are counted from the start date shifted
    /// forward by the whole months (clamped to the end of a shorter month).
    pub fn between(start: &CalendarDate, end: &CalendarDate) -> Self {
        let mut total_months = end.proleptic_month() - start.proleptic_month();
        let mut days = i64::from(end.day()) - i64::from(start.day());

        if total_months > 0 && days < 0 {
            total_months -= 1;
            // The shifted date lies between start and end, so it always exists
            if let Some(shifted) = start.add_months(total_months) {
                days = shifted.days_until(end);
            }
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= end.month_length();
        }

        Self {
            years: total_months / MONTHS_PER_YEAR,
            months: total_months % MONTHS_PER_YEAR,
            days,
        }
    }
}

impl PeriodRange {
    /// Creates a period, rejecting an end date before the start date.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidRange` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Number of days covered, counting both the first and the last day.
    pub fn total_days(&self) -> i64 {
        self.start.days_until(&self.end) + 1
    }

    pub fn calendar_diff(&self) -> CalendarDiff {
        CalendarDiff::between(&self.start, &self.end)
    }

    /// Whole months in the period rounded to the nearest month, never below one.
    ///
    /// Leftover days of `MONTH_ROUNDING_DAYS` or more round up, fewer round down.
    pub fn rounded_months(&self) -> i64 {
        let mut months = self.start.months_until(&self.end);
        if self.calendar_diff().days >= MONTH_ROUNDING_DAYS {
            months += 1;
        }
        months.max(1)
    }

    /// Whether the period is close enough to twelve months to be headed by its year.
    pub fn is_about_a_year(&self) -> bool {
        let allowed = (YEAR_LENGTH_DAYS - YEAR_ALLOWANCE_DAYS)..=(YEAR_LENGTH_DAYS + YEAR_ALLOWANCE_DAYS);
        allowed.contains(&self.total_days())
    }

    /// Picks the heading style for this period.
    ///
    /// `same_year` is decided by the caller and wins over everything else;
    /// otherwise a period of 350 to 380 days is shown as its end year and any
    /// other length as a rounded month count up to the end date.
    pub fn classify(&self, same_year: bool) -> PeriodHeading {
        let heading = if same_year {
            PeriodHeading::SingleDate { end: self.end }
        } else if self.is_about_a_year() {
            PeriodHeading::YearOnly {
                year: self.end.year(),
            }
        } else {
            PeriodHeading::MonthsToDate {
                month_count: self.rounded_months(),
                end:         self.end,
            }
        };

        log::debug!(
            "period {} covers {} days, same_year={}: {:?}",
            self,
            self.total_days(),
            same_year,
            heading
        );
        heading
    }
}

/// Validates `start..=end` and classifies it.
///
/// # Errors
/// Returns `PeriodError::InvalidRange` if `end` is before `start`.
pub fn classify_period(
    start: CalendarDate,
    end: CalendarDate,
    same_year: bool,
) -> Result<PeriodHeading, PeriodError> {
    Ok(PeriodRange::new(start, end)?.classify(same_year))
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPeriod {
    period_start: CalendarDate,
    period_end:   CalendarDate,
}

impl TryFrom<RawPeriod> for PeriodRange {
    type Error = PeriodError;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        Self::new(raw.period_start, raw.period_end)
    }
}

impl From<PeriodRange> for RawPeriod {
    fn from(period: PeriodRange) -> Self {
        Self {
            period_start: period.start,
            period_end:   period.end,
        }
    }
}
