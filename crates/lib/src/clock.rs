//! Time source for report timestamps
//!
//! Reports are stamped with the moment they were uploaded. The [`Clock`]
//! trait lets the server use wall-clock time while tests pin timestamps.
//!
//! ```
//! use scandeck::{Clock, SystemClock};
//!
//! let stamp = SystemClock.now();
//! assert!(stamp.timestamp() > 0);
//! ```

use std::fmt::Debug;

use chrono::{DateTime, Utc};

#[cfg(any(test, feature = "testing"))]
use std::sync::Mutex;

/// A provider of the current UTC time.
pub trait Clock: Send + Sync + Debug {
    /// Current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time from [`chrono::Utc`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock that steps forward by a fixed amount on every read.
///
/// A step of zero gives a fully frozen clock.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug)]
pub struct FixedClock {
    current: Mutex<DateTime<Utc>>,
    step: chrono::Duration,
}

#[cfg(any(test, feature = "testing"))]
impl FixedClock {
    /// Start at `start` and advance one second per read.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self::with_step(start, chrono::Duration::seconds(1))
    }

    /// Start at `start` and advance by `step` per read.
    pub fn with_step(start: DateTime<Utc>, step: chrono::Duration) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }

    /// Peek at the next value without advancing.
    pub fn peek(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap()
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for FixedClock {
    fn default() -> Self {
        use chrono::TimeZone;
        // 2024-01-01 00:00:00 UTC
        Self::new(Utc.timestamp_opt(1_704_067_200, 0).unwrap())
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().unwrap();
        let t = *current;
        *current = t + self.step;
        t
    }
}
