//! Dated income/expense entries fed to the aggregation engine.

use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{common::*, DomainError};

/// Classifies a record as money coming in or going out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Income => "income",
            RecordKind::Expense => "expense",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(RecordKind::Income),
            "expense" => Ok(RecordKind::Expense),
            _ => Err(DomainError::UnknownRecordKind(value.to_string())),
        }
    }
}

/// A single dated, amount-bearing entry. The amount is validated on construction
/// and the record cannot be mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordRepr")]
pub struct Record {
    date: NaiveDateTime,
    amount: Decimal,
    kind: RecordKind,
}

impl Record {
    pub fn new(date: NaiveDateTime, amount: Decimal, kind: RecordKind) -> Result<Self, DomainError> {
        if amount < Decimal::ZERO {
            return Err(DomainError::NegativeAmount(amount));
        }
        Ok(Self { date, amount, kind })
    }

    /// Builds a record dated at midnight of `date`.
    pub fn on_day(date: NaiveDate, amount: Decimal, kind: RecordKind) -> Result<Self, DomainError> {
        Self::new(date.and_time(chrono::NaiveTime::MIN), amount, kind)
    }

    pub fn income(date: NaiveDate, amount: Decimal) -> Result<Self, DomainError> {
        Self::on_day(date, amount, RecordKind::Income)
    }

    pub fn expense(date: NaiveDate, amount: Decimal) -> Result<Self, DomainError> {
        Self::on_day(date, amount, RecordKind::Expense)
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn is_income(&self) -> bool {
        self.kind == RecordKind::Income
    }
}

impl Amounted for Record {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

#[derive(Deserialize)]
struct RecordRepr {
    date: NaiveDateTime,
    amount: Decimal,
    kind: RecordKind,
}

impl TryFrom<RecordRepr> for Record {
    type Error = DomainError;

    fn try_from(repr: RecordRepr) -> Result<Self, Self::Error> {
        Record::new(repr.date, repr.amount, repr.kind)
    }
}
