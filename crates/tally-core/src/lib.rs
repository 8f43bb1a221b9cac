//! tally-core
//!
//! Time-window aggregation engine behind the dashboard charts.
//! Depends on tally-domain. No CLI, no terminal I/O, no storage.

pub mod aggregation_service;
pub mod bucket_service;
pub mod calendar;
pub mod error;
pub mod label_service;
pub mod period_service;
pub mod summary_service;
pub mod time;


pub use aggregation_service::*;
pub use bucket_service::*;
pub use error::CoreError;
pub use label_service::*;
pub use period_service::*;
pub use summary_service::*;
pub use time::*;
