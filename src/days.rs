use std::iter;

use crate::CalendarDate;

/// The `count` days before `current`, nearest first.
///
/// Stops early at the start of the calendar.
pub fn previous_days(current: CalendarDate, count: usize) -> Vec<CalendarDate> {
    iter::successors(current.pred(), CalendarDate::pred)
        .take(count)
        .collect()
}

/// Up to `count` days after `current`, nearest first, never going past `today`.
pub fn future_days(current: CalendarDate, count: usize, today: CalendarDate) -> Vec<CalendarDate> {
    iter::successors(current.succ(), CalendarDate::succ)
        .take(count)
        .take_while(|day| *day <= today)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_previous_days() {
        let days = previous_days(date(2016, 3, 2), 3);
        assert_eq!(days, vec![date(2016, 3, 1), date(2016, 2, 29), date(2016, 2, 28)]);

        assert!(previous_days(date(2016, 3, 2), 0).is_empty());

        let first = CalendarDate::from(chrono::NaiveDate::MIN);
        assert_eq!(previous_days(first.succ().unwrap(), 5), vec![first]);
    }

    #[test]
    fn test_future_days_limited_by_count() {
        struct TestCase {
            count:       usize,
            expected:    usize,
            description: &'static str,
        }

        let today = date(2017, 1, 10);
        let cases = [
            TestCase {
                count:       3,
                expected:    3,
                description: "all before today",
            },
            TestCase {
                count:       9,
                expected:    9,
                description: "last one is today",
            },
            TestCase {
                count:       20,
                expected:    9,
                description: "cut off after today",
            },
        ];

        for case in &cases {
            let days = future_days(date(2017, 1, 1), case.count, today);
            assert_eq!(days.len(), case.expected, "{}", case.description);
            assert_eq!(days.first(), Some(&date(2017, 1, 2)), "{}", case.description);
            assert!(days.iter().all(|d| *d <= today), "{}", case.description);
        }
    }

    #[test]
    fn test_future_days_cross_leap_day() {
        let days = future_days(date(2016, 2, 27), 3, date(2016, 12, 31));
        assert!(days.contains(&date(2016, 2, 29)));
        assert_eq!(days.last(), Some(&date(2016, 3, 1)));
    }

    #[test]
    fn test_future_days_from_today_is_empty() {
        let today = date(2017, 1, 10);
        assert!(future_days(today, 5, today).is_empty());
    }
}
