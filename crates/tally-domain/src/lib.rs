//! tally-domain
//!
//! Pure domain models (Record, TimeFrame, Period, AggregationResult).
//! No I/O, no CLI, no clock access. Only data types and core enums.

pub mod common;
pub mod error;
pub mod record;
pub mod series;
pub mod time_frame;

pub use common::*;
pub use error::DomainError;
pub use record::*;
pub use series::*;
pub use time_frame::*;
