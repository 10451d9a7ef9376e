use super::{closed_form, stepped};
use crate::{
    Evaluation, InvariantViolation, MostUrgent, Policy, ProcessTable, Scheduler, Timeline,
};

/// Lowest priority value first, without preemption.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority {
    evaluation: Evaluation,
}

impl Priority {
    pub fn new(evaluation: Evaluation) -> Self {
        Priority { evaluation }
    }
}

impl Scheduler for Priority {
    fn policy(&self) -> Policy {
        Policy::Priority
    }

    fn run(&mut self, table: &mut ProcessTable) -> Result<Timeline, InvariantViolation> {
        match self.evaluation {
            Evaluation::ClosedForm => Ok(closed_form::schedule_by(table, |p| p.priority())),
            Evaluation::Stepped => stepped::run_to_completion(table, MostUrgent),
        }
    }
}
