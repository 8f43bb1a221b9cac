//! Shared traits for amount-bearing entities.

use rust_decimal::Decimal;

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}
