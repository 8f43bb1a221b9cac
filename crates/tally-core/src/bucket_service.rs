use chrono::{Datelike, NaiveDateTime};
use tally_domain::{Period, TimeFrame};

use crate::calendar::{self, DAYS_PER_WEEK};

/// Maps `date` to its zero-based bucket within `period`, or `None` when it falls
/// outside the series.
///
/// Week and year buckets are loose: they use the weekday and the calendar month
/// of `date` without checking that `date` lies in the resolved week or year, so
/// a record from last year's July still lands in this year's July bucket.
/// Month buckets are strict: dates before the first day of the month or on or
/// after the first day of the next month are rejected, even when the last
/// seven-day bucket would still have room for them.
pub fn bucket_index(time_frame: TimeFrame, period: &Period, date: NaiveDateTime) -> Option<usize> {
    let day = date.date();
    let index = match time_frame {
        TimeFrame::Week => calendar::weekday_index(day),
        TimeFrame::Month => {
            if day >= calendar::next_month_start(period.start) {
                return None;
            }
            let offset = (day - period.start).num_days().div_euclid(DAYS_PER_WEEK as i64);
            usize::try_from(offset).ok()?
        }
        TimeFrame::Year => day.month0() as usize,
    };
    (index < period.bucket_count).then_some(index)
}
