use serde::Serialize;

use crate::{Pid, Policy, ProcessTable, Ticks};

/// A contiguous stretch of CPU time given to one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub pid: Pid,
    pub start: Ticks,
    pub ticks: Ticks,
}

impl Slice {
    pub fn end(&self) -> Ticks {
        self.start + self.ticks
    }
}

/// The order in which the CPU was handed out during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    /// Record that `pid` ran for `ticks` starting at `start`.
    ///
    /// Back to back runs of the same process are merged into one slice.
    pub fn record(&mut self, pid: Pid, start: Ticks, ticks: Ticks) {
        if let Some(last) = self.slices.last_mut() {
            if last.pid == pid && last.end() == start {
                last.ticks += ticks;
                return;
            }
        }
        self.slices.push(Slice { pid, start, ticks });
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Total CPU time handed out.
    pub fn busy_ticks(&self) -> Ticks {
        self.slices.iter().map(|slice| slice.ticks).sum()
    }

    /// When the last slice ends.
    pub fn makespan(&self) -> Ticks {
        self.slices.last().map_or(0, Slice::end)
    }
}

/// The result of one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessStats {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: i64,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
}

/// The result of a run: per process values and their averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub policy: Policy,
    pub processes: Vec<ProcessStats>,
    pub timeline: Timeline,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
}

impl Statistics {
    /// Collect the statistics of a table where every process has finished.
    pub(crate) fn collect(policy: Policy, table: &ProcessTable, timeline: Timeline) -> Self {
        let processes: Vec<ProcessStats> = table
            .iter()
            .map(|process| ProcessStats {
                pid: process.pid(),
                arrival_time: process.arrival_time(),
                burst_time: process.burst_time(),
                priority: process.priority(),
                waiting_time: process.waiting_time(),
                turnaround_time: process.turnaround_time(),
            })
            .collect();

        let n = processes.len().max(1) as f64;
        let total_waiting: Ticks = processes.iter().map(|p| p.waiting_time).sum();
        let total_turnaround: Ticks = processes.iter().map(|p| p.turnaround_time).sum();

        Statistics {
            policy,
            processes,
            timeline,
            average_waiting_time: total_waiting as f64 / n,
            average_turnaround_time: total_turnaround as f64 / n,
        }
    }

    pub fn waiting_times(&self) -> Vec<Ticks> {
        self.processes.iter().map(|p| p.waiting_time).collect()
    }

    pub fn turnaround_times(&self) -> Vec<Ticks> {
        self.processes.iter().map(|p| p.turnaround_time).collect()
    }

    pub fn total_ticks(&self) -> Ticks {
        self.timeline.busy_ticks()
    }

    pub fn makespan(&self) -> Ticks {
        self.timeline.makespan()
    }
}
