use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tally_domain::{AggregationResult, Amounted, Period, Record, RecordKind, TimeFrame};
use tracing::debug;

use crate::{
    bucket_service::bucket_index,
    label_service::{generate_labels, EnglishLabels, LabelLookup},
    period_service::resolve_period,
};

/// Income and expense sums per bucket, before labels are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketTotals {
    pub income: Vec<Decimal>,
    pub expense: Vec<Decimal>,
    /// Records whose date fell outside the series.
    pub skipped: usize,
}

/// Folds `records` into zero-filled series of `period.bucket_count` entries.
pub fn fold_records(records: &[Record], time_frame: TimeFrame, period: &Period) -> BucketTotals {
    let mut totals = BucketTotals {
        income: vec![Decimal::ZERO; period.bucket_count],
        expense: vec![Decimal::ZERO; period.bucket_count],
        skipped: 0,
    };

    for record in records {
        let Some(index) = bucket_index(time_frame, period, record.date()) else {
            totals.skipped += 1;
            continue;
        };
        let series = match record.kind() {
            RecordKind::Income => &mut totals.income,
            RecordKind::Expense => &mut totals.expense,
        };
        series[index] += record.amount();
    }

    if totals.skipped > 0 {
        debug!(
            %time_frame,
            skipped = totals.skipped,
            "records outside the period were left out of the series"
        );
    }
    totals
}

/// Runs the fold and label generation with an injected label lookup.
#[derive(Debug, Clone, Default)]
pub struct Aggregator<L = EnglishLabels> {
    labels: L,
}

impl<L: LabelLookup> Aggregator<L> {
    pub fn new(labels: L) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &L {
        &self.labels
    }

    pub fn aggregate(
        &self,
        records: &[Record],
        time_frame: TimeFrame,
        now: NaiveDateTime,
    ) -> AggregationResult {
        let period = resolve_period(time_frame, now);
        self.aggregate_period(records, time_frame, &period)
    }

    /// Aggregates against a period produced by `resolve_period`. Label count
    /// follows the frame, so a hand-built `Period` could disagree with it.
    pub(crate) fn aggregate_period(
        &self,
        records: &[Record],
        time_frame: TimeFrame,
        period: &Period,
    ) -> AggregationResult {
        let totals = fold_records(records, time_frame, period);
        AggregationResult {
            labels: generate_labels(time_frame, period.bucket_count, &self.labels),
            income_series: totals.income,
            expense_series: totals.expense,
        }
    }
}

/// Aggregates `records` for the period of `time_frame` containing `now`, with
/// English labels.
pub fn aggregate(records: &[Record], time_frame: TimeFrame, now: NaiveDateTime) -> AggregationResult {
    Aggregator::new(EnglishLabels).aggregate(records, time_frame, now)
}
