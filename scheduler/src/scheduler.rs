use log::info;

use crate::{
    InvariantViolation, Policy, ProcessTable, SchedulerError, Statistics, Timeline, Workload,
};

/// How a non-preemptive scheduler computes its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Evaluation {
    /// Sort once by arrival time and the policy key, then walk the order.
    #[default]
    ClosedForm,

    /// Step the ready queue one tick at a time, using the policy's
    /// insertion order for every arrival.
    Stepped,
}

/// The trait that any scheduler has to implement.
pub trait Scheduler: Send {
    /// The discipline this scheduler implements.
    fn policy(&self) -> Policy;

    /// Drive every process of `table` to completion.
    ///
    /// Returns the order in which the CPU was handed out.
    fn run(&mut self, table: &mut ProcessTable) -> Result<Timeline, InvariantViolation>;

    /// Run the scheduler over a fresh set of processes built from `workload`.
    fn schedule(&mut self, workload: &Workload) -> Result<Statistics, SchedulerError> {
        let mut table = ProcessTable::new(workload);
        info!("{} over {} processes", self.policy(), table.len());

        let timeline = self.run(&mut table)?;
        verify(&table)?;

        let statistics = Statistics::collect(self.policy(), &table, timeline);
        info!(
            "{} done: average waiting {:.2}, average turnaround {:.2}",
            self.policy(),
            statistics.average_waiting_time,
            statistics.average_turnaround_time
        );
        Ok(statistics)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn policy(&self) -> Policy {
        (**self).policy()
    }

    fn run(&mut self, table: &mut ProcessTable) -> Result<Timeline, InvariantViolation> {
        (**self).run(table)
    }
}

/// Every process must be finished, with `waiting + burst == turnaround`.
fn verify(table: &ProcessTable) -> Result<(), InvariantViolation> {
    for process in table.iter() {
        if !process.is_finished() || process.remaining_burst_time() != 0 {
            return Err(InvariantViolation::Unfinished(process.pid()));
        }
        if process.waiting_time() + process.burst_time() != process.turnaround_time() {
            return Err(InvariantViolation::Accounting {
                pid: process.pid(),
                waiting: process.waiting_time(),
                burst: process.burst_time(),
                turnaround: process.turnaround_time(),
            });
        }
    }
    Ok(())
}
