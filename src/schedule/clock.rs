//! Wall-clock abstraction so the polling loop can run against simulated time.

use chrono::{Local, NaiveDateTime};
use std::time::Duration;

pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Block the current thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// The host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[cfg(test)]
pub use simulated::SimulatedClock;
