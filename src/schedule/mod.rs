//! Schedule module - daily triggers, clock and the polling loop

mod cancel;
mod clock;
mod scheduler;
mod trigger;

pub use cancel::CancellationToken;
pub use clock::{Clock, SystemClock};
pub use scheduler::Scheduler;
pub use trigger::DailyTrigger;

#[cfg(test)]
pub(crate) use clock::SimulatedClock;
