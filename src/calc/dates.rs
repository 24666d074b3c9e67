//! Date difference and offset arithmetic

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Breakdown of the span between two dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub total_days: i64,
    pub weeks: i64,
    /// Days left over after whole weeks
    pub week_days: i64,
    pub years: i64,
    pub months: i64,
    /// Days left over after whole years and months
    pub days: i64,
}

/// Signed day count from `from` to `to`
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Absolute span between two dates in calendar units
pub fn span_between(a: NaiveDate, b: NaiveDate) -> DateSpan {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let total_days = days_between(start, end);

    // Whole months first, remainder in days; checked_add_months clamps
    // month-end overflow (Jan 31 + 1 month = Feb 28/29)
    let mut months = 0i64;
    let mut anchor = start;
    loop {
        let next = anchor
            .checked_add_months(Months::new(1))
            .unwrap_or(anchor);
        if next > end || next == anchor {
            break;
        }
        anchor = next;
        months += 1;
    }
    let days = days_between(anchor, end);

    DateSpan {
        total_days,
        weeks: total_days / 7,
        week_days: total_days % 7,
        years: months / 12,
        months: months % 12,
        days,
    }
}

/// Date shifted by a signed number of days; `None` past the calendar range
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_days_between_signed() {
        assert_eq!(days_between(d(2024, 1, 1), d(2024, 1, 31)), 30);
        assert_eq!(days_between(d(2024, 1, 31), d(2024, 1, 1)), -30);
        // 2024 is a leap year
        assert_eq!(days_between(d(2024, 2, 1), d(2024, 3, 1)), 29);
    }

    #[test]
    fn test_span_breakdown() {
        let span = span_between(d(2023, 1, 15), d(2024, 3, 20));
        assert_eq!(span.years, 1);
        assert_eq!(span.months, 2);
        assert_eq!(span.days, 5);
        assert_eq!(span.total_days, span.weeks * 7 + span.week_days);
    }

    #[test]
    fn test_span_is_symmetric() {
        let forward = span_between(d(2020, 6, 1), d(2021, 6, 1));
        let backward = span_between(d(2021, 6, 1), d(2020, 6, 1));
        assert_eq!(forward, backward);
        assert_eq!(forward.years, 1);
        assert_eq!(forward.months, 0);
        assert_eq!(forward.days, 0);
    }

    #[test]
    fn test_month_end_clamping() {
        // Jan 31 + 1 month clamps to Feb 29 in a leap year
        let span = span_between(d(2024, 1, 31), d(2024, 3, 1));
        assert_eq!(span.months, 1);
        assert_eq!(span.days, 1);
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(d(2024, 2, 28), 1), Some(d(2024, 2, 29)));
        assert_eq!(add_days(d(2024, 1, 1), -1), Some(d(2023, 12, 31)));
        assert_eq!(add_days(NaiveDate::MAX, 1), None);
    }
}
