use std::collections::VecDeque;
use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use log::trace;
use serde::Serialize;

use crate::{InvariantViolation, Workload};

/// One unit of simulated time.
pub type Ticks = u64;

/// The PID of a process.
///
/// PIDs are the index of the process in the input lists, so they start from 0.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Pid(usize);

impl Pid {
    pub fn new(pid: usize) -> Pid {
        Pid(pid)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl PartialEq<usize> for Pid {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// The state of a process.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProcessState {
    /// The process has not arrived yet.
    NotArrived,

    /// The process has arrived and waits in the ready queue.
    Ready,

    /// The process is currently on the CPU.
    Running,

    /// The process has used all of its burst time.
    Finished,
}

impl Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessState::NotArrived => write!(f, "NOT_ARRIVED"),
            ProcessState::Ready => write!(f, "READY"),
            ProcessState::Running => write!(f, "RUNNING"),
            ProcessState::Finished => write!(f, "FINISHED"),
        }
    }
}

/// The process record.
///
/// `remaining_burst_time` reaches 0 exactly when `state` becomes
/// [`ProcessState::Finished`].
#[derive(Clone, Debug, PartialEq)]
pub struct Process {
    pid: Pid,
    arrival_time: Ticks,
    burst_time: Ticks,
    priority: i64,

    remaining_burst_time: Ticks,
    waiting_time: Ticks,
    turnaround_time: Ticks,
    state: ProcessState,
}

impl Process {
    pub fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks, priority: i64) -> Self {
        Process {
            pid,
            arrival_time,
            burst_time,
            priority,
            remaining_burst_time: burst_time,
            waiting_time: 0,
            turnaround_time: 0,
            state: ProcessState::NotArrived,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn arrival_time(&self) -> Ticks {
        self.arrival_time
    }

    pub fn burst_time(&self) -> Ticks {
        self.burst_time
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn remaining_burst_time(&self) -> Ticks {
        self.remaining_burst_time
    }

    pub fn waiting_time(&self) -> Ticks {
        self.waiting_time
    }

    /// Only meaningful once the process is finished.
    pub fn turnaround_time(&self) -> Ticks {
        self.turnaround_time
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == ProcessState::Finished
    }

    /// Account one tick for this process.
    ///
    /// A finished process is left untouched. Otherwise the turnaround time
    /// grows by one and either the remaining burst (running) or the waiting
    /// time (not running) is updated. Returns `true` if the process is
    /// finished after this tick.
    pub fn advance(&mut self, is_running: bool) -> bool {
        if self.is_finished() {
            return true;
        }

        self.turnaround_time += 1;
        if is_running {
            self.remaining_burst_time = self.remaining_burst_time.saturating_sub(1);
        } else {
            self.waiting_time += 1;
        }

        if self.remaining_burst_time == 0 {
            self.state = ProcessState::Finished;
            return true;
        }
        false
    }

    pub(crate) fn admit(&mut self) {
        if self.state == ProcessState::NotArrived {
            self.state = ProcessState::Ready;
        }
    }

    pub(crate) fn dispatch(&mut self) -> Result<(), InvariantViolation> {
        if self.is_finished() {
            return Err(InvariantViolation::DispatchFinished(self.pid));
        }
        if self.remaining_burst_time == 0 {
            return Err(InvariantViolation::NegativeRemaining(self.pid));
        }
        trace!("process {}: {} -> {}", self.pid, self.state, ProcessState::Running);
        self.state = ProcessState::Running;
        Ok(())
    }

    pub(crate) fn preempt(&mut self) {
        if self.state == ProcessState::Running {
            self.state = ProcessState::Ready;
        }
    }

    /// Finish the process in one step: it started at `start` and ran its
    /// whole burst without interruption.
    pub(crate) fn finish_at(&mut self, start: Ticks) -> Ticks {
        let completion = start + self.burst_time;
        self.waiting_time = start - self.arrival_time;
        self.turnaround_time = completion - self.arrival_time;
        self.remaining_burst_time = 0;
        self.state = ProcessState::Finished;
        completion
    }
}

/// All the processes of one run, addressed by [`Pid`].
///
/// The ready queue only holds PIDs, so there is a single record per process.
#[derive(Clone, Debug)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    pub fn new(workload: &Workload) -> Self {
        let processes = workload
            .iter()
            .map(|spec| Process::new(spec.pid, spec.arrival_time, spec.burst_time, spec.priority))
            .collect();
        ProcessTable { processes }
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    /// PIDs in the order they become ready: by arrival time, then by PID.
    pub fn pending_arrivals(&self) -> VecDeque<Pid> {
        let mut pids: Vec<Pid> = self.processes.iter().map(Process::pid).collect();
        pids.sort_by_key(|pid| (self[*pid].arrival_time, *pid));
        pids.into()
    }

    /// The time of the first arrival, 0 for an empty table.
    pub fn first_arrival(&self) -> Ticks {
        self.processes
            .iter()
            .map(Process::arrival_time)
            .min()
            .unwrap_or(0)
    }
}

impl Index<Pid> for ProcessTable {
    type Output = Process;

    fn index(&self, pid: Pid) -> &Self::Output {
        &self.processes[pid.0]
    }
}

impl IndexMut<Pid> for ProcessTable {
    fn index_mut(&mut self, pid: Pid) -> &mut Self::Output {
        &mut self.processes[pid.0]
    }
}
