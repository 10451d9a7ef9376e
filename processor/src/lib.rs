//! A processor simulation library
//!
//! This is used for running a scheduler from the [`scheduler`] crate over a
//! workload and reporting what happened on the CPU.

use std::fmt::{self, Display};

use log::debug;
use scheduler::{Pid, Scheduler, SchedulerError, Slice, Statistics, Ticks, Workload};

/// Running iteration log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log {
    /// The slice of CPU time handed out.
    pub slice: Slice,

    /// Processes that have arrived and still need the CPU when the slice ends.
    pub ready: Vec<Pid>,

    /// Processes that completed at the end of the slice.
    pub finished: Vec<Pid>,
}

impl Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Run {} for {} ticks at {}",
            self.slice.pid, self.slice.ticks, self.slice.start
        )?;
        writeln!(f, "Ready: {}", pid_list(&self.ready))?;
        writeln!(f, "Finished: {}", pid_list(&self.finished))
    }
}

fn pid_list(pids: &[Pid]) -> String {
    let pids: Vec<String> = pids.iter().map(Pid::to_string).collect();
    format!("[{}]", pids.join(" "))
}

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub statistics: Statistics,
    pub logs: Vec<Log>,
}

/// The processor simulator.
pub struct Processor<S: Scheduler> {
    scheduler: S,
}

impl<S: Scheduler> Processor<S> {
    /// Run `scheduler` over `workload`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Processor;
    /// use scheduler::Workload;
    ///
    /// let workload = Workload::new(&[5, 3, 8], &[0, 0, 0], None).unwrap();
    /// let report = Processor::run(scheduler::fcfs(), &workload).unwrap();
    /// assert_eq!(report.logs.len(), 3);
    /// ```
    pub fn run(scheduler: S, workload: &Workload) -> Result<Report, SchedulerError> {
        let mut processor = Processor { scheduler };
        let statistics = processor.scheduler.schedule(workload)?;
        let logs = processor.logs(&statistics);
        debug!("{} produced {} slices", statistics.policy, logs.len());
        Ok(Report { statistics, logs })
    }

    fn logs(&self, statistics: &Statistics) -> Vec<Log> {
        statistics
            .timeline
            .slices()
            .iter()
            .map(|slice| {
                let end = slice.end();
                let ready = statistics
                    .processes
                    .iter()
                    .filter(|p| p.arrival_time <= end && completion(p) > end)
                    .map(|p| p.pid)
                    .collect();
                let finished = statistics
                    .processes
                    .iter()
                    .filter(|p| p.pid == slice.pid && completion(p) == end)
                    .map(|p| p.pid)
                    .collect();
                Log {
                    slice: *slice,
                    ready,
                    finished,
                }
            })
            .collect()
    }
}

fn completion(process: &scheduler::ProcessStats) -> Ticks {
    process.arrival_time + process.turnaround_time
}

/// Format the [`Processor`]'s logs to a [`String`].
///
/// * `logs` - the logs returned by the [`Processor`].
pub fn format_logs(logs: &[Log]) -> String {
    let mut s = String::new();
    for (iteration, log) in logs.iter().enumerate() {
        s.push_str(&format!(
            "===== Iteration: {} =====\n{}\n",
            iteration + 1,
            log
        ));
    }
    s
}

/// Format the per process table and the averages.
pub fn format_statistics(statistics: &Statistics) -> String {
    let mut s = format!("{}\nPID\tAT\tBT\tP\tWT\tTAT\n", statistics.policy);
    for p in &statistics.processes {
        s.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            p.pid, p.arrival_time, p.burst_time, p.priority, p.waiting_time, p.turnaround_time
        ));
    }
    s.push_str(&format!(
        "\nAverage Waiting Time: {:.2}\nAverage Turnaround Time: {:.2}\n",
        statistics.average_waiting_time, statistics.average_turnaround_time
    ));
    s
}

/// Format the logs followed by the statistics.
pub fn format_report(report: &Report) -> String {
    format!(
        "{}{}",
        format_logs(&report.logs),
        format_statistics(&report.statistics)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn logs_follow_timeline() {
        let workload = Workload::new(&[7, 4, 1], &[0, 1, 2], None).unwrap();
        let report = Processor::run(scheduler::stcf(), &workload).unwrap();

        let runs: Vec<(usize, Ticks)> = report
            .logs
            .iter()
            .map(|log| (log.slice.pid.index(), log.slice.ticks))
            .collect();
        assert_eq!(runs, vec![(0, 1), (1, 1), (2, 1), (1, 3), (0, 6)]);

        // P2 completes at 3 while P0 and P1 wait
        assert_eq!(report.logs[2].finished, vec![Pid::new(2)]);
        assert_eq!(report.logs[2].ready, vec![Pid::new(0), Pid::new(1)]);
        assert!(report.logs[4].ready.is_empty());
    }

    #[test]
    fn format_single_process() {
        let workload = Workload::new(&[2], &[1], Some(&[4])).unwrap();
        let report = Processor::run(scheduler::fcfs(), &workload).unwrap();

        assert_eq!(
            format_report(&report),
            "===== Iteration: 1 =====\n\
             Run 0 for 2 ticks at 1\n\
             Ready: []\n\
             Finished: [0]\n\
             \n\
             FCFS Scheduling\n\
             PID\tAT\tBT\tP\tWT\tTAT\n\
             0\t1\t2\t4\t0\t2\n\
             \n\
             Average Waiting Time: 0.00\n\
             Average Turnaround Time: 2.00\n"
        );
    }

    #[test]
    fn configuration_errors_pass_through() {
        let workload = Workload::new(&[1, 1], &[0, 0], None).unwrap();
        assert!(Processor::run(scheduler::sjf(), &workload).is_ok());
        assert!(matches!(
            Workload::new(&[1, 1], &[0], None),
            Err(scheduler::ConfigurationError::LengthMismatch { .. })
        ));
    }
}
