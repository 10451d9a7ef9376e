use super::{closed_form, stepped};
use crate::{
    Evaluation, InvariantViolation, Policy, ProcessTable, Scheduler, ShortestBurst, Timeline,
};

/// Shortest job first, without preemption.
///
/// In closed form the burst time only breaks ties between processes that
/// arrive together.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf {
    evaluation: Evaluation,
}

impl Sjf {
    pub fn new(evaluation: Evaluation) -> Self {
        Sjf { evaluation }
    }
}

impl Scheduler for Sjf {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn run(&mut self, table: &mut ProcessTable) -> Result<Timeline, InvariantViolation> {
        match self.evaluation {
            Evaluation::ClosedForm => Ok(closed_form::schedule_by(table, |p| p.burst_time())),
            Evaluation::Stepped => stepped::run_to_completion(table, ShortestBurst),
        }
    }
}
