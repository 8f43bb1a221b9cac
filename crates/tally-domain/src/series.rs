//! Period and chart-series types produced by the aggregation engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Concrete calendar window resolved for a time frame at a given instant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub bucket_count: usize,
}

/// Positionally aligned labels and series; index `i` of each refers to the same bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AggregationResult {
    pub labels: Vec<String>,
    pub income_series: Vec<Decimal>,
    pub expense_series: Vec<Decimal>,
}

impl AggregationResult {
    pub fn bucket_count(&self) -> usize {
        self.labels.len()
    }

    pub fn total_income(&self) -> Decimal {
        self.income_series.iter().copied().sum()
    }

    pub fn total_expenses(&self) -> Decimal {
        self.expense_series.iter().copied().sum()
    }

    pub fn net(&self) -> Decimal {
        self.total_income() - self.total_expenses()
    }

    /// Iterates `(label, income, expense)` per bucket.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, Decimal, Decimal)> + '_ {
        self.labels
            .iter()
            .zip(self.income_series.iter().zip(self.expense_series.iter()))
            .map(|(label, (income, expense))| (label.as_str(), *income, *expense))
    }
}
