//! Job registry and the poll loop that runs due jobs.

use super::{CancellationToken, Clock, DailyTrigger};
use crate::error::ReportError;
use chrono::NaiveDateTime;
use std::time::Duration;
use tracing::info;

type JobFn<'a> = Box<dyn FnMut() -> Result<(), ReportError> + 'a>;

struct ScheduledJob<'a> {
    trigger: DailyTrigger,
    next_run: NaiveDateTime,
    last_run: Option<NaiveDateTime>,
    task: JobFn<'a>,
}

impl ScheduledJob<'_> {
    fn is_due(&self, now: NaiveDateTime) -> bool {
        now >= self.next_run
    }
}

/// Runs registered callbacks when their daily trigger comes due.
///
/// Jobs live as long as the scheduler; there is no unregistration.
#[derive(Default)]
pub struct Scheduler<'a> {
    jobs: Vec<ScheduledJob<'a>>,
}

impl<'a> Scheduler<'a> {
    pub fn new() -> Self {
        Self { jobs: Vec::new() }
    }

    /// Register `task` to run daily at `trigger`, returning its first run instant.
    pub fn every_day_at<F>(&mut self, trigger: DailyTrigger, now: NaiveDateTime, task: F) -> NaiveDateTime
    where
        F: FnMut() -> Result<(), ReportError> + 'a,
    {
        let next_run = trigger.next_after(now);
        self.jobs.push(ScheduledJob {
            trigger,
            next_run,
            last_run: None,
            task: Box::new(task),
        });
        next_run
    }

    /// Earliest pending run across all jobs.
    pub fn next_run(&self) -> Option<NaiveDateTime> {
        self.jobs.iter().map(|job| job.next_run).min()
    }

    /// Most recent run of any job.
    pub fn last_run(&self) -> Option<NaiveDateTime> {
        self.jobs.iter().filter_map(|job| job.last_run).max()
    }

    /// Run every job due at `now`, returning how many ran.
    ///
    /// A job is re-armed before its callback runs, so a failing callback
    /// still has a next occurrence. The first failure is returned immediately.
    pub fn run_pending(&mut self, now: NaiveDateTime) -> Result<usize, ReportError> {
        let mut ran = 0;
        for job in self.jobs.iter_mut().filter(|job| job.is_due(now)) {
            job.last_run = Some(now);
            job.next_run = job.trigger.next_after(now);
            info!("Running job scheduled at {}", job.trigger);
            (job.task)()?;
            ran += 1;
        }
        Ok(ran)
    }

    /// Poll every `interval` until `cancel` is set or a job fails.
    ///
    /// The binary never sets the token, so in production the loop only ends
    /// when a job fails or the process is terminated from outside.
    pub fn run_until_cancelled<C: Clock>(
        &mut self,
        clock: &C,
        interval: Duration,
        cancel: &CancellationToken,
    ) -> Result<(), ReportError> {
        while !cancel.is_cancelled() {
            if self.run_pending(clock.now())? > 0 {
                if let (Some(last), Some(next)) = (self.last_run(), self.next_run()) {
                    info!("Last run {}, next run {}", last, next);
                }
            }
            clock.sleep(interval);
        }
        info!("Scheduler stopped");
        Ok(())
    }
}
