use log::{debug, trace};

use crate::{InsertionOrder, InvariantViolation, ProcessTable, ReadyQueue, Timeline};

/// Run the head of the ready queue one tick at a time until every process
/// has finished.
///
/// Arrivals due at a tick are admitted before that tick runs, so an
/// [`InsertionOrder`] that displaces the running process preempts it right
/// away. Everybody else in the queue waits for the tick.
pub(crate) fn run_to_completion<O: InsertionOrder>(
    table: &mut ProcessTable,
    order: O,
) -> Result<Timeline, InvariantViolation> {
    let mut queue = ReadyQueue::new(order, table);
    let mut timeline = Timeline::default();
    let mut now = table.first_arrival();

    loop {
        queue.admit_arrivals(now, table);

        let Some(head) = queue.peek() else {
            if queue.has_pending() {
                return Err(InvariantViolation::IdleProcessor { at: now });
            }
            break;
        };

        table[head].dispatch()?;
        for pid in queue.iter() {
            table[pid].advance(pid == head);
        }
        trace!("tick {}: process {} runs", now, head);
        timeline.record(head, now, 1);
        now += 1;

        if table[head].is_finished() {
            queue.advance_head();
            debug!("process {} finished at {}", head, now);
        }
    }

    Ok(timeline)
}
