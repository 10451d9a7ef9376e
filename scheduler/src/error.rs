use thiserror::Error;

use crate::{Pid, Ticks};

/// The input handed to the scheduler cannot describe a valid run.
///
/// These are detected by [`crate::Workload::new`] before any
/// [`crate::Process`] record is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("got {bursts} burst times but {arrivals} arrival times")]
    LengthMismatch { bursts: usize, arrivals: usize },

    #[error("got {priorities} priorities for {processes} processes")]
    PriorityLengthMismatch { priorities: usize, processes: usize },

    #[error("the workload has no processes")]
    EmptyWorkload,

    #[error("process {pid} has burst time {burst}, it must be positive")]
    NonPositiveBurst { pid: Pid, burst: i64 },

    #[error("process {pid} has arrival time {arrival}, it must not be negative")]
    NegativeArrival { pid: Pid, arrival: i64 },

    /// The CPU would drain every earlier process before this one shows up.
    #[error("process {pid} arrives at {arrival}, after every earlier process finished at {drained_at}")]
    IdleGap {
        pid: Pid,
        arrival: Ticks,
        drained_at: Ticks,
    },

    #[error("process {pid} would complete after the largest representable tick")]
    TimeOverflow { pid: Pid },
}

/// A defect inside the engine. Never recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("process {0} was dispatched after it finished")]
    DispatchFinished(Pid),

    #[error("process {0} would run with no remaining burst time")]
    NegativeRemaining(Pid),

    #[error("the processor went idle at tick {at} with processes still pending")]
    IdleProcessor { at: Ticks },

    #[error("process {0} did not finish")]
    Unfinished(Pid),

    #[error("process {pid}: waiting {waiting} + burst {burst} != turnaround {turnaround}")]
    Accounting {
        pid: Pid,
        waiting: Ticks,
        burst: Ticks,
        turnaround: Ticks,
    },
}

/// Any error a scheduling run can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("scheduler invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}
