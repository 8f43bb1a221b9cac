use rust_decimal::Decimal;
use serde::Serialize;
use tally_domain::{AggregationResult, Amounted, Period, Record, TimeFrame};
use tracing::info;

use crate::{
    aggregation_service::Aggregator, label_service::LabelLookup, period_service::resolve_period,
    time::Clock,
};

/// Everything the dashboard shows for one time frame: the chart series plus
/// all-time totals over the supplied records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub time_frame: TimeFrame,
    pub period: Period,
    pub chart: AggregationResult,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub total_balance: Decimal,
}

pub struct SummaryService;

impl SummaryService {
    /// Reads the clock once and builds the summary against that instant.
    pub fn build<L: LabelLookup>(
        records: &[Record],
        time_frame: TimeFrame,
        clock: &dyn Clock,
        labels: L,
    ) -> DashboardSummary {
        let now = clock.now();
        let period = resolve_period(time_frame, now);
        let chart = Aggregator::new(labels).aggregate_period(records, time_frame, &period);
        let (total_income, total_expenses) = Self::totals(records);

        info!(
            %time_frame,
            start = %period.start,
            records = records.len(),
            "dashboard summary built"
        );

        DashboardSummary {
            time_frame,
            period,
            chart,
            total_income,
            total_expenses,
            total_balance: total_income - total_expenses,
        }
    }

    /// Sums income and expenses over every record regardless of date.
    pub fn totals(records: &[Record]) -> (Decimal, Decimal) {
        records
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(income, expense), record| {
                if record.is_income() {
                    (income + record.amount(), expense)
                } else {
                    (income, expense + record.amount())
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label_service::EnglishLabels;
    use crate::time::FixedClock;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn totals_cover_records_outside_the_chart() {
        let records = vec![
            Record::income(date(2024, 3, 2), dec!(1000)).unwrap(),
            Record::income(date(2023, 12, 20), dec!(200)).unwrap(),
            Record::expense(date(2024, 3, 5), dec!(350.40)).unwrap(),
        ];
        let clock = FixedClock::at_midnight(date(2024, 3, 15));
        let summary = SummaryService::build(&records, TimeFrame::Month, &clock, EnglishLabels);

        assert_eq!(summary.total_income, dec!(1200));
        assert_eq!(summary.total_expenses, dec!(350.40));
        assert_eq!(summary.total_balance, dec!(849.60));
        assert_eq!(summary.chart.total_income(), dec!(1000));
        assert_eq!(summary.period.start, date(2024, 3, 1));
    }

    #[test]
    fn chart_labels_match_series_for_every_frame() {
        let records = vec![Record::expense(date(2024, 2, 29), dec!(3)).unwrap()];
        let clock = FixedClock::at_midnight(date(2024, 2, 14));
        for time_frame in TimeFrame::ALL {
            let summary = SummaryService::build(&records, time_frame, &clock, EnglishLabels);
            let chart = &summary.chart;
            assert_eq!(chart.labels.len(), summary.period.bucket_count, "{time_frame}");
            assert_eq!(chart.income_series.len(), chart.labels.len());
            assert_eq!(chart.expense_series.len(), chart.labels.len());
        }
    }

    #[test]
    fn empty_records_produce_zero_balance() {
        let clock = FixedClock::at_midnight(date(2024, 3, 15));
        let summary = SummaryService::build(&[], TimeFrame::Year, &clock, EnglishLabels);
        assert_eq!(summary.total_balance, Decimal::ZERO);
        assert_eq!(summary.chart.labels.len(), 12);
    }
}
