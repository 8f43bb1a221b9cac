#![doc(test(attr(deny(warnings))))]

//! Tally turns a user's income and expense records into the week, month and
//! year series shown on the finance dashboard.
//!
//! The engine itself lives in `tally-core`; this crate adds the JSON record
//! source, tracing setup and the `tally_cli` front end.

pub mod cli;
pub mod errors;
pub mod source;
pub mod utils;

pub use errors::AppError;
pub use tally_core::{aggregate, resolve_period, Aggregator, DashboardSummary, SummaryService};
pub use tally_domain::{AggregationResult, Period, Record, RecordKind, TimeFrame};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tally tracing initialized.");
    });
}
