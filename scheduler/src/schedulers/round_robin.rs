use std::num::NonZeroU64;

use log::{debug, trace};

use crate::{
    ArrivalOrder, InvariantViolation, Policy, ProcessTable, ReadyQueue, Scheduler, Timeline,
};

/// Round Robin with a fixed quantum.
///
/// The ready queue stays in arrival order and only holds unfinished
/// processes. A dispatch index walks over it, wrapping at the end and
/// staying on the last slot when the tail process finishes.
pub struct RoundRobin {
    quantum: NonZeroU64,
}

impl RoundRobin {
    /// * `quantum` - the maximum number of ticks a process runs before it is preempted
    pub fn new(quantum: NonZeroU64) -> Self {
        RoundRobin { quantum }
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        RoundRobin::new(NonZeroU64::MIN)
    }
}

impl Scheduler for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn run(&mut self, table: &mut ProcessTable) -> Result<Timeline, InvariantViolation> {
        let mut queue = ReadyQueue::new(ArrivalOrder, table);
        let mut timeline = Timeline::default();
        let mut now = table.first_arrival();
        let mut index = 0;

        queue.admit_arrivals(now, table);
        while let Some(pid) = queue.get(index) {
            table[pid].dispatch()?;

            let start = now;
            let mut used = 0;
            while used < self.quantum.get() && !table[pid].is_finished() {
                // late arrivals go to the tail and wait from the tick they arrive
                queue.admit_arrivals(now, table);
                for other in queue.iter() {
                    table[other].advance(other == pid);
                }
                trace!("tick {}: process {} runs", now, pid);
                now += 1;
                used += 1;
            }
            timeline.record(pid, start, used);

            // an arrival at the end of the quantum is in the queue before the
            // index moves on
            queue.admit_arrivals(now, table);

            if table[pid].is_finished() {
                queue.remove(index);
                debug!("process {} finished at {}", pid, now);
                // the slot before a removed tail entry is next
                index = index.min(queue.len().saturating_sub(1));
            } else {
                table[pid].preempt();
                index = (index + 1) % queue.len();
            }

            if queue.is_empty() && queue.has_pending() {
                return Err(InvariantViolation::IdleProcessor { at: now });
            }
        }

        Ok(timeline)
    }
}
