use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Amount must be non-negative, got {0}")]
    NegativeAmount(Decimal),
    #[error("Unknown time frame `{0}` (expected week, month or year)")]
    UnknownTimeFrame(String),
    #[error("Unknown record kind `{0}` (expected income or expense)")]
    UnknownRecordKind(String),
}
