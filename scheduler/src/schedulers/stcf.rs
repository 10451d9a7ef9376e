use super::stepped;
use crate::{InvariantViolation, Policy, ProcessTable, Scheduler, ShortestRemaining, Timeline};

/// Shortest time to completion first.
///
/// A newcomer with strictly less remaining time than the running process
/// takes the CPU at the tick it arrives.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stcf;

impl Scheduler for Stcf {
    fn policy(&self) -> Policy {
        Policy::Stcf
    }

    fn run(&mut self, table: &mut ProcessTable) -> Result<Timeline, InvariantViolation> {
        stepped::run_to_completion(table, ShortestRemaining)
    }
}
