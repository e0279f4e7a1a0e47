//! # Clock
//!
//! Wall-clock access behind a trait so `Transaction.created_at` is
//! testable.
//!
//! atlas-core is forbidden from reading a clock (that is what keeps
//! receipt rendering deterministic); the session layer injects one here
//! at the single point that needs it, the moment a sale is confirmed.

use chrono::{DateTime, Utc};

/// Supplies `now()` for transaction timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
