use super::{closed_form, stepped};
use crate::{
    ArrivalOrder, Evaluation, InvariantViolation, Policy, ProcessTable, Scheduler, Timeline,
};

/// First come, first served.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs {
    evaluation: Evaluation,
}

impl Fcfs {
    pub fn new(evaluation: Evaluation) -> Self {
        Fcfs { evaluation }
    }
}

impl Scheduler for Fcfs {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn run(&mut self, table: &mut ProcessTable) -> Result<Timeline, InvariantViolation> {
        match self.evaluation {
            Evaluation::ClosedForm => Ok(closed_form::schedule_by(table, |_| ())),
            Evaluation::Stepped => stepped::run_to_completion(table, ArrivalOrder),
        }
    }
}
