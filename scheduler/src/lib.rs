//! A CPU scheduling simulation library.
//!
//! This library provides the process model, the ready queue and the
//! scheduling disciplines (FCFS, SJF, Priority, STCF and Round Robin)
//! needed to compute per process waiting and turnaround times.
//!
//! ```rust
//! use scheduler::{Scheduler, Workload};
//!
//! let workload = Workload::new(&[5, 3, 8], &[0, 0, 0], None).unwrap();
//! let statistics = scheduler::sjf().schedule(&workload).unwrap();
//! assert_eq!(statistics.waiting_times(), vec![3, 0, 8]);
//! ```

use std::num::NonZeroU64;

mod error;
mod policy;
mod process;
mod queue;
mod scheduler;
mod stats;
mod workload;

pub use crate::error::{ConfigurationError, InvariantViolation, SchedulerError};
pub use crate::policy::Policy;
pub use crate::process::{Pid, Process, ProcessState, ProcessTable, Ticks};
pub use crate::queue::{
    ArrivalOrder, InsertionOrder, MostUrgent, ReadyQueue, ShortestBurst, ShortestRemaining,
};
pub use crate::scheduler::{Evaluation, Scheduler};
pub use crate::stats::{ProcessStats, Slice, Statistics, Timeline};
pub use crate::workload::{ProcessSpec, Workload, DEFAULT_PRIORITY};

pub mod schedulers;

use schedulers::{Fcfs, Priority, RoundRobin, Sjf, Stcf};

/// Returns a structure that implements the `Scheduler` trait with a first come, first served policy
pub fn fcfs() -> impl Scheduler {
    Fcfs::default()
}

/// Returns a structure that implements the `Scheduler` trait with a non-preemptive shortest job first policy
pub fn sjf() -> impl Scheduler {
    Sjf::default()
}

/// Returns a structure that implements the `Scheduler` trait with a non-preemptive priority policy
///
/// Lower priority values are dispatched first.
pub fn priority() -> impl Scheduler {
    Priority::default()
}

/// Returns a structure that implements the `Scheduler` trait with a shortest time to completion first policy
pub fn stcf() -> impl Scheduler {
    Stcf
}

/// Returns a structure that implements the `Scheduler` trait with a round robin policy
///
/// * `quantum` - the time quanta that a process can run before it is preempted
pub fn round_robin(quantum: NonZeroU64) -> impl Scheduler {
    RoundRobin::new(quantum)
}

/// Returns the scheduler for `policy`.
///
/// * `quantum` - only used by [`Policy::RoundRobin`]
/// * `evaluation` - only used by the non-preemptive policies
pub fn from_policy(
    policy: Policy,
    quantum: NonZeroU64,
    evaluation: Evaluation,
) -> Box<dyn Scheduler> {
    match policy {
        Policy::Fcfs => Box::new(Fcfs::new(evaluation)),
        Policy::Sjf => Box::new(Sjf::new(evaluation)),
        Policy::Priority => Box::new(Priority::new(evaluation)),
        Policy::Stcf => Box::new(Stcf),
        Policy::RoundRobin => Box::new(RoundRobin::new(quantum)),
    }
}
