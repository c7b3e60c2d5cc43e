//! Clock used by the `timestamp` format

use chrono::Utc;

/// Provides the current time as nanoseconds since the Unix epoch.
///
/// Monotonicity is not required.
pub trait Clock: Send + Sync {
    fn now_nanos(&self) -> i64;
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_nanos(&self) -> i64 {
        // Saturates after the year 2262
        Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
    }
}
