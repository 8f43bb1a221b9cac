//! Record source: turns the transaction payload fetched from the backend into
//! validated [`Record`]s.
//!
//! Two shapes are accepted, the `/summary` response with separate
//! `incomeTransactions` and `expenseTransactions` lists, and a bare array of
//! entries. Each entry carries `amount`, `date` and `type`. Anything malformed
//! fails the whole load; nothing is coerced.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tally_domain::{DomainError, Record, RecordKind};
use tracing::debug;

use crate::errors::AppError;

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Anything able to hand over the caller's income and expense records.
pub trait RecordSource {
    fn records(&self) -> Result<Vec<Record>, AppError>;
}

/// Reads a JSON payload from disk on every call.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn records(&self) -> Result<Vec<Record>, AppError> {
        load_records(&self.path)
    }
}

/// The `/summary` response. Other keys (totals, budgets, savings) are ignored.
#[derive(Debug, Deserialize)]
struct SummaryPayload {
    #[serde(rename = "incomeTransactions")]
    income: Option<Vec<RawEntry>>,
    #[serde(rename = "expenseTransactions")]
    expense: Option<Vec<RawEntry>>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    amount: Decimal,
    date: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

pub fn load_records(path: &Path) -> Result<Vec<Record>, AppError> {
    let data = std::fs::read_to_string(path)?;
    let records = parse_records(&data)?;
    debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

pub fn parse_records(json: &str) -> Result<Vec<Record>, AppError> {
    let payload: Value = serde_json::from_str(json)?;
    let tagged: Vec<(RawEntry, Option<RecordKind>)> = match payload {
        Value::Array(_) => {
            let entries: Vec<RawEntry> = serde_json::from_value(payload)?;
            entries.into_iter().map(|entry| (entry, None)).collect()
        }
        Value::Object(_) => {
            let summary: SummaryPayload = serde_json::from_value(payload)?;
            if summary.income.is_none() && summary.expense.is_none() {
                return Err(AppError::Payload(
                    "expected `incomeTransactions` or `expenseTransactions`".to_string(),
                ));
            }
            summary
                .income
                .unwrap_or_default()
                .into_iter()
                .map(|entry| (entry, Some(RecordKind::Income)))
                .chain(
                    summary
                        .expense
                        .unwrap_or_default()
                        .into_iter()
                        .map(|entry| (entry, Some(RecordKind::Expense))),
                )
                .collect()
        }
        other => {
            return Err(AppError::Payload(format!(
                "expected an object or an array of records, got {other}"
            )));
        }
    };

    tagged
        .into_iter()
        .enumerate()
        .map(|(position, (entry, list_kind))| to_record(position, entry, list_kind))
        .collect()
}

fn to_record(
    position: usize,
    entry: RawEntry,
    list_kind: Option<RecordKind>,
) -> Result<Record, AppError> {
    let invalid = |source: DomainError| AppError::InvalidRecord { position, source };

    let kind = match (entry.kind.as_deref(), list_kind) {
        (Some(tag), expected) => {
            let kind: RecordKind = tag.parse().map_err(invalid)?;
            if expected.is_some_and(|expected| expected != kind) {
                return Err(invalid(DomainError::UnknownRecordKind(format!(
                    "{tag} listed under {}",
                    expected.map(RecordKind::as_str).unwrap_or_default()
                ))));
            }
            kind
        }
        (None, Some(expected)) => expected,
        (None, None) => return Err(invalid(DomainError::UnknownRecordKind(String::new()))),
    };

    let date = parse_timestamp(&entry.date).ok_or_else(|| AppError::InvalidDate {
        position,
        value: entry.date.clone(),
    })?;

    Record::new(date, entry.amount, kind).map_err(invalid)
}

/// Parses an ISO-8601 date or date-time. Offsets are dropped and the wall-clock
/// time as written is kept.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|stamp| stamp.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
