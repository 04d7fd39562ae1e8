//! Time sources for document stamping.
//!
//! Production code uses [`SystemClock`]. Tests drive a [`ManualClock`] so
//! that timestamps, and therefore ordering, are deterministic.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Source of the current instant.
pub trait Clock: fmt::Debug + Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current_ms: Arc<AtomicI64>,
}

impl ManualClock {
    /// Creates a clock reading `start_ms` milliseconds since the epoch.
    #[must_use]
    pub fn at_ms(start_ms: i64) -> Self {
        Self {
            current_ms: Arc::new(AtomicI64::new(start_ms)),
        }
    }

    /// Current reading in milliseconds since the epoch.
    #[must_use]
    pub fn now_ms(&self) -> i64 {
        self.current_ms.load(Ordering::SeqCst)
    }

    /// Sets the clock to `ms` milliseconds since the epoch.
    pub fn set_ms(&self, ms: i64) {
        self.current_ms.store(ms, Ordering::SeqCst);
    }

    /// Moves the clock forward by `ms` milliseconds and returns the new reading.
    pub fn advance_ms(&self, ms: i64) -> i64 {
        self.current_ms
            .fetch_add(ms, Ordering::SeqCst)
            .saturating_add(ms)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.now_ms()).unwrap_or_default()
    }
}
