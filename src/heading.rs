use serde::{Deserialize, Serialize};

use crate::{CalendarDate, prelude::*};

/// How a balance sheet column is headed for one accounting period.
///
/// `Display` renders the heading text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PeriodHeading {
    /// Just the period end, e.g. `30 June 2015`
    #[display(fmt = "{}", "end.display_format()")]
    SingleDate { end: CalendarDate },
    /// Bare year of the period end, e.g. `2017`
    #[display(fmt = "{year:04}")]
    YearOnly { year: i32 },
    /// e.g. `13 months to 16 February 2015`
    #[display(fmt = "{} to {}", "months_phrase(*month_count)", "end.display_format()")]
    MonthsToDate { month_count: i64, end: CalendarDate },
}

fn months_phrase(count: i64) -> String {
    if count == 1 {
        format!("{count} month")
    } else {
        format!("{count} months")
    }
}

/// Renders the heading text for a classified period.
pub fn render(heading: &PeriodHeading) -> String {
    heading.to_string()
}

/// The two halves of a heading, kept apart for templates that lay them out
/// separately. `period_start` is only present for a month count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,
    pub period_end:   String,
}

impl PeriodFields {
    /// Joins the two halves back into the heading text.
    pub fn heading(&self) -> String {
        match &self.period_start {
            Some(start) => format!("{start} to {}", self.period_end),
            None => self.period_end.clone(),
        }
    }
}

impl From<PeriodHeading> for PeriodFields {
    fn from(heading: PeriodHeading) -> Self {
        match heading {
            PeriodHeading::SingleDate { end } => Self {
                period_start: None,
                period_end:   end.display_format(),
            },
            PeriodHeading::YearOnly { year } => Self {
                period_start: None,
                period_end:   format!("{year:04}"),
            },
            PeriodHeading::MonthsToDate { month_count, end } => Self {
                period_start: Some(months_phrase(month_count)),
                period_end:   end.display_format(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_render_each_variant() {
        struct TestCase {
            heading:  PeriodHeading,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                heading:  PeriodHeading::SingleDate {
                    end: date(2015, 6, 30),
                },
                expected: "30 June 2015",
            },
            TestCase {
                heading:  PeriodHeading::YearOnly {
                    year: date(2017, 1, 14).year(),
                },
                expected: "2017",
            },
            TestCase {
                heading:  PeriodHeading::MonthsToDate {
                    month_count: 1,
                    end:         date(2015, 4, 1),
                },
                expected: "1 month to 1 April 2015",
            },
            TestCase {
                heading:  PeriodHeading::MonthsToDate {
                    month_count: 13,
                    end:         date(2015, 2, 16),
                },
                expected: "13 months to 16 February 2015",
            },
        ];

        for case in &cases {
            assert_eq!(render(&case.heading), case.expected);
        }
    }

    #[test]
    fn test_fields_from_heading() {
        let fields = PeriodFields::from(PeriodHeading::MonthsToDate {
            month_count: 57,
            end:         date(2017, 12, 17),
        });
        assert_eq!(fields.period_start.as_deref(), Some("57 months"));
        assert_eq!(fields.period_end, "17 December 2017");
        assert_eq!(fields.heading(), "57 months to 17 December 2017");

        let fields = PeriodFields::from(PeriodHeading::YearOnly {
            year: date(2017, 8, 23).year(),
        });
        assert_eq!(fields.period_start, None);
        assert_eq!(fields.period_end, "2017");
        assert_eq!(fields.heading(), "2017");
    }

    #[test]
    fn test_fields_serde_omits_missing_start() {
        let fields = PeriodFields::from(PeriodHeading::SingleDate {
            end: date(2017, 11, 23),
        });
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"periodEnd":"23 November 2017"}"#);

        let months = PeriodFields::from(PeriodHeading::MonthsToDate {
            month_count: 6,
            end:         date(2017, 2, 16),
        });
        let json = serde_json::to_string(&months).unwrap();
        assert_eq!(json, r#"{"periodStart":"6 months","periodEnd":"16 February 2017"}"#);

        let parsed: PeriodFields = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, months);
    }
}
