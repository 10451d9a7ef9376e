use log::debug;

use crate::{Pid, Process, ProcessTable, Timeline};

/// Schedule every process without preemption in one pass.
///
/// Processes are sorted by arrival time, then by `key`. The sort is stable,
/// so processes equal on both keep PID order. The clock starts at the first
/// arrival and never goes backwards.
pub(crate) fn schedule_by<K, F>(table: &mut ProcessTable, key: F) -> Timeline
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut order: Vec<Pid> = table.iter().map(Process::pid).collect();
    order.sort_by_key(|&pid| (table[pid].arrival_time(), key(&table[pid])));

    let mut timeline = Timeline::default();
    let Some(&first) = order.first() else {
        return timeline;
    };

    let mut now = table[first].arrival_time();
    for pid in order {
        let start = now.max(table[pid].arrival_time());
        now = table[pid].finish_at(start);
        timeline.record(pid, start, now - start);
        debug!("process {} runs from {} to {}", pid, start, now);
    }
    timeline
}
