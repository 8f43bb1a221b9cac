//! Gregorian calendar helpers shared by the period resolver and bucket indexer.
//!
//! Weeks start on Monday everywhere in this crate: the resolver, the indexer and
//! the weekday labels all count from Monday = 0.

use chrono::{Datelike, Duration, NaiveDate};

use crate::CoreError;

const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub const DAYS_PER_WEEK: u32 = 7;
pub const MONTHS_PER_YEAR: usize = 12;

/// Divisible by 4 and (not by 100, or by 400).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Length of the zero-based month `month0` of `year`.
pub fn days_in_month(year: i32, month0: u32) -> Result<u32, CoreError> {
    let base = MONTH_LENGTHS
        .get(month0 as usize)
        .copied()
        .ok_or(CoreError::InvalidMonth(month0))?;
    if month0 == 1 && is_leap_year(year) {
        Ok(base + 1)
    } else {
        Ok(base)
    }
}

/// Length of the month containing `date`.
pub fn days_in_month_of(date: NaiveDate) -> u32 {
    // `month0()` of a valid date is always below 12.
    days_in_month(date.year(), date.month0()).unwrap_or(MONTH_LENGTHS[0])
}

/// First day after the month containing `date`.
pub fn next_month_start(date: NaiveDate) -> NaiveDate {
    month_start(date) + Duration::days(i64::from(days_in_month_of(date)))
}

/// Position of `date` within its week, Monday = 0 through Sunday = 6.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// The Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(weekday_index(date) as i64)
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

pub fn year_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.ordinal0() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_years_follow_gregorian_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(-4));
    }

    #[test]
    fn february_length_depends_on_leap_year() {
        assert_eq!(days_in_month(2024, 1).unwrap(), 29);
        assert_eq!(days_in_month(2023, 1).unwrap(), 28);
        assert_eq!(days_in_month(1900, 1).unwrap(), 28);
        assert_eq!(days_in_month(2023, 0).unwrap(), 31);
        assert_eq!(days_in_month(2023, 3).unwrap(), 30);
        assert_eq!(days_in_month(2023, 11).unwrap(), 31);
    }

    #[test]
    fn month_index_out_of_range_is_an_error() {
        assert!(matches!(days_in_month(2024, 12), Err(CoreError::InvalidMonth(12))));
    }

    #[test]
    fn days_in_month_of_agrees_with_table() {
        for month0 in 0..12 {
            let first = date(2024, month0 + 1, 1);
            assert_eq!(days_in_month_of(first), days_in_month(2024, month0).unwrap());
        }
    }

    #[test]
    fn week_start_is_monday() {
        // 2024-03-15 is a Friday.
        let start = week_start(date(2024, 3, 15));
        assert_eq!(start, date(2024, 3, 11));
        assert_eq!(start.weekday(), Weekday::Mon);
        assert_eq!(week_start(date(2024, 3, 11)), date(2024, 3, 11));
        // Sunday belongs to the week that started six days earlier.
        assert_eq!(week_start(date(2024, 3, 17)), date(2024, 3, 11));
    }

    #[test]
    fn week_start_crosses_year_boundary() {
        // 2025-01-01 is a Wednesday.
        assert_eq!(week_start(date(2025, 1, 1)), date(2024, 12, 30));
    }

    #[test]
    fn next_month_start_handles_leap_february() {
        assert_eq!(next_month_start(date(2024, 2, 10)), date(2024, 3, 1));
        assert_eq!(next_month_start(date(2023, 2, 28)), date(2023, 3, 1));
        assert_eq!(next_month_start(date(2024, 12, 31)), date(2025, 1, 1));
    }

    #[test]
    fn month_and_year_start_truncate() {
        assert_eq!(month_start(date(2024, 2, 29)), date(2024, 2, 1));
        assert_eq!(year_start(date(2024, 12, 31)), date(2024, 1, 1));
    }
}
