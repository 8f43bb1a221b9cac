use chrono::{Local, NaiveDate, NaiveDateTime};

/// Clock abstracts access to the current wall-clock instant so services remain
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local date-time.
    fn now(&self) -> NaiveDateTime;
}

/// Real-time clock backed by the host's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a captured instant, for tests and for batches of calls that
/// must share one snapshot of "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn at_midnight(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
