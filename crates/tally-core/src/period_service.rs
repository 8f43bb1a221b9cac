use chrono::{NaiveDate, NaiveDateTime};
use tally_domain::{Period, TimeFrame};
use tracing::debug;

use crate::calendar::{self, DAYS_PER_WEEK, MONTHS_PER_YEAR};

/// Resolves the current period for `time_frame` at `now`. Time of day is ignored.
///
/// Never cache the result: the current week/month/year moves with the clock.
pub fn resolve_period(time_frame: TimeFrame, now: NaiveDateTime) -> Period {
    let start = period_start(time_frame, now.date());
    let bucket_count = bucket_count(time_frame, start);
    debug!(%time_frame, %start, bucket_count, "resolved period");
    Period {
        start,
        bucket_count,
    }
}

/// First day of the period containing `today`.
pub fn period_start(time_frame: TimeFrame, today: NaiveDate) -> NaiveDate {
    match time_frame {
        TimeFrame::Week => calendar::week_start(today),
        TimeFrame::Month => calendar::month_start(today),
        TimeFrame::Year => calendar::year_start(today),
    }
}

/// Number of buckets in the series for a period beginning at `start`.
///
/// Months use `ceil(days / 7)` seven-day buckets, not the number of calendar
/// weeks the month overlaps.
pub fn bucket_count(time_frame: TimeFrame, start: NaiveDate) -> usize {
    match time_frame {
        TimeFrame::Week => DAYS_PER_WEEK as usize,
        TimeFrame::Month => calendar::days_in_month_of(start).div_ceil(DAYS_PER_WEEK) as usize,
        TimeFrame::Year => MONTHS_PER_YEAR,
    }
}
