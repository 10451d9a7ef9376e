use log::debug;

use crate::{ConfigurationError, Pid, Ticks};

/// The priority every process gets when none are given.
pub const DEFAULT_PRIORITY: i64 = 0;

/// The immutable inputs of one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpec {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: i64,
}

/// A validated set of processes, ready to be scheduled.
///
/// Building a `Workload` is the only way to feed a scheduler, so every
/// [`ConfigurationError`] is reported before any scheduling work starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    specs: Vec<ProcessSpec>,
}

impl Workload {
    /// Validate raw input lists. The index in the lists is the PID.
    ///
    /// * `burst_times` - CPU time each process needs, must be positive.
    /// * `arrival_times` - when each process arrives, must not be negative.
    /// * `priorities` - lower is more urgent, defaults to [`DEFAULT_PRIORITY`].
    pub fn new(
        burst_times: &[i64],
        arrival_times: &[i64],
        priorities: Option<&[i64]>,
    ) -> Result<Self, ConfigurationError> {
        if burst_times.len() != arrival_times.len() {
            return Err(ConfigurationError::LengthMismatch {
                bursts: burst_times.len(),
                arrivals: arrival_times.len(),
            });
        }
        if let Some(priorities) = priorities {
            if priorities.len() != burst_times.len() {
                return Err(ConfigurationError::PriorityLengthMismatch {
                    priorities: priorities.len(),
                    processes: burst_times.len(),
                });
            }
        }
        if burst_times.is_empty() {
            return Err(ConfigurationError::EmptyWorkload);
        }

        let mut specs = Vec::with_capacity(burst_times.len());
        for (index, (&burst, &arrival)) in burst_times.iter().zip(arrival_times).enumerate() {
            let pid = Pid::new(index);
            if burst <= 0 {
                return Err(ConfigurationError::NonPositiveBurst { pid, burst });
            }
            if arrival < 0 {
                return Err(ConfigurationError::NegativeArrival { pid, arrival });
            }
            specs.push(ProcessSpec {
                pid,
                arrival_time: arrival as Ticks,
                burst_time: burst as Ticks,
                priority: priorities.map_or(DEFAULT_PRIORITY, |p| p[index]),
            });
        }

        let workload = Workload { specs };
        workload.check_busy_period()?;
        debug!("validated workload of {} processes", workload.len());
        Ok(workload)
    }

    /// Reject an arrival that comes after the CPU drained everything before it,
    /// or a run whose last completion does not fit in [`Ticks`].
    ///
    /// On a single CPU that never idles while work is queued, the busy period
    /// only depends on arrivals and bursts, so the FCFS walk finds it for
    /// every policy.
    fn check_busy_period(&self) -> Result<(), ConfigurationError> {
        let mut order: Vec<&ProcessSpec> = self.specs.iter().collect();
        order.sort_by_key(|spec| (spec.arrival_time, spec.pid));

        let mut drained_at = order[0].arrival_time;
        for spec in order {
            if spec.arrival_time > drained_at {
                return Err(ConfigurationError::IdleGap {
                    pid: spec.pid,
                    arrival: spec.arrival_time,
                    drained_at,
                });
            }
            drained_at = drained_at
                .checked_add(spec.burst_time)
                .ok_or(ConfigurationError::TimeOverflow { pid: spec.pid })?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessSpec> {
        self.specs.iter()
    }

    /// The sum of all burst times, which is how long any run keeps the CPU busy.
    pub fn total_burst(&self) -> Ticks {
        self.specs.iter().map(|spec| spec.burst_time).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_is_rejected_first() {
        assert_eq!(
            Workload::new(&[5, -3], &[0, 0, 0], None),
            Err(ConfigurationError::LengthMismatch {
                bursts: 2,
                arrivals: 3
            })
        );
    }

    #[test]
    fn priority_length_mismatch() {
        assert_eq!(
            Workload::new(&[5, 3], &[0, 0], Some(&[1])),
            Err(ConfigurationError::PriorityLengthMismatch {
                priorities: 1,
                processes: 2
            })
        );
    }

    #[test]
    fn empty_workload() {
        assert_eq!(
            Workload::new(&[], &[], None),
            Err(ConfigurationError::EmptyWorkload)
        );
    }

    #[test]
    fn non_positive_burst() {
        assert_eq!(
            Workload::new(&[5, 0], &[0, 0], None),
            Err(ConfigurationError::NonPositiveBurst {
                pid: Pid::new(1),
                burst: 0
            })
        );
        assert!(matches!(
            Workload::new(&[-2], &[0], None),
            Err(ConfigurationError::NonPositiveBurst { .. })
        ));
    }

    #[test]
    fn negative_arrival() {
        assert_eq!(
            Workload::new(&[5, 3], &[0, -1], None),
            Err(ConfigurationError::NegativeArrival {
                pid: Pid::new(1),
                arrival: -1
            })
        );
    }

    #[test]
    fn idle_gap() {
        assert_eq!(
            Workload::new(&[2, 1], &[0, 3], None),
            Err(ConfigurationError::IdleGap {
                pid: Pid::new(1),
                arrival: 3,
                drained_at: 2
            })
        );
        // arriving right when the CPU drains is fine
        assert!(Workload::new(&[2, 1], &[0, 2], None).is_ok());
    }

    #[test]
    fn completion_time_overflow() {
        assert_eq!(
            Workload::new(&[i64::MAX; 3], &[0, 0, 0], None),
            Err(ConfigurationError::TimeOverflow { pid: Pid::new(2) })
        );
        assert!(Workload::new(&[i64::MAX, i64::MAX], &[0, 0], None).is_ok());
    }

    #[test]
    fn first_arrival_may_be_late() {
        let workload = Workload::new(&[2, 1], &[4, 5], None).unwrap();
        assert_eq!(workload.total_burst(), 3);
    }

    #[test]
    fn default_priorities() {
        let workload = Workload::new(&[1, 2], &[0, 0], None).unwrap();
        assert!(workload.iter().all(|spec| spec.priority == DEFAULT_PRIORITY));

        let workload = Workload::new(&[1, 2], &[0, 0], Some(&[3, -1])).unwrap();
        let priorities: Vec<i64> = workload.iter().map(|spec| spec.priority).collect();
        assert_eq!(priorities, vec![3, -1]);
    }
}
