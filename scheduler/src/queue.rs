use std::collections::VecDeque;

use log::debug;

use crate::{Pid, Process, ProcessState, ProcessTable, Ticks};

/// Where a newly admitted process goes in the ready queue.
///
/// A newcomer is inserted before the first queued process it strictly
/// `precedes`. Equal keys never displace, so earlier admissions keep their
/// place.
pub trait InsertionOrder {
    /// Returns `true` if `newcomer` must be dispatched before `queued`.
    fn precedes(&self, newcomer: &Process, queued: &Process) -> bool;

    /// Whether the running process takes part in the comparison.
    ///
    /// If it does and loses, it is preempted back to [`ProcessState::Ready`].
    fn displaces_running(&self) -> bool {
        false
    }
}

/// Pure arrival order, used by FCFS and Round Robin.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrivalOrder;

impl InsertionOrder for ArrivalOrder {
    fn precedes(&self, _newcomer: &Process, _queued: &Process) -> bool {
        false
    }
}

/// Shorter original burst first, used by SJF.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestBurst;

impl InsertionOrder for ShortestBurst {
    fn precedes(&self, newcomer: &Process, queued: &Process) -> bool {
        newcomer.burst_time() < queued.burst_time()
    }
}

/// Lower priority value first, used by the priority scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostUrgent;

impl InsertionOrder for MostUrgent {
    fn precedes(&self, newcomer: &Process, queued: &Process) -> bool {
        newcomer.priority() < queued.priority()
    }
}

/// Shorter remaining burst first, running process included. Used by STCF.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemaining;

impl InsertionOrder for ShortestRemaining {
    fn precedes(&self, newcomer: &Process, queued: &Process) -> bool {
        newcomer.remaining_burst_time() < queued.remaining_burst_time()
    }

    fn displaces_running(&self) -> bool {
        true
    }
}

/// The processes that have arrived and are not finished, in dispatch order.
///
/// The queue also keeps the processes that have not arrived yet, sorted by
/// arrival time and PID, so [`ReadyQueue::admit_arrivals`] is deterministic.
#[derive(Debug)]
pub struct ReadyQueue<O: InsertionOrder> {
    entries: VecDeque<Pid>,
    pending: VecDeque<Pid>,
    order: O,
}

impl<O: InsertionOrder> ReadyQueue<O> {
    pub fn new(order: O, table: &ProcessTable) -> Self {
        ReadyQueue {
            entries: VecDeque::with_capacity(table.len()),
            pending: table.pending_arrivals(),
            order,
        }
    }

    /// Insert `pid` according to the queue's [`InsertionOrder`].
    pub fn admit(&mut self, pid: Pid, table: &mut ProcessTable) {
        table[pid].admit();

        let mut position = None;
        for (index, &queued) in self.entries.iter().enumerate() {
            let current = &table[queued];
            if current.is_finished() {
                continue;
            }
            if current.state() == ProcessState::Running && !self.order.displaces_running() {
                continue;
            }
            if self.order.precedes(&table[pid], current) {
                position = Some(index);
                break;
            }
        }

        match position {
            Some(index) => {
                let displaced = self.entries[index];
                if table[displaced].state() == ProcessState::Running {
                    table[displaced].preempt();
                    debug!("process {} preempts process {}", pid, displaced);
                }
                self.entries.insert(index, pid);
            }
            None => self.entries.push_back(pid),
        }
    }

    /// Admit every pending process with `arrival_time <= now`.
    ///
    /// Returns the number of admitted processes.
    pub fn admit_arrivals(&mut self, now: Ticks, table: &mut ProcessTable) -> usize {
        let mut admitted = 0;
        while let Some(&pid) = self.pending.front() {
            if table[pid].arrival_time() > now {
                break;
            }
            self.pending.pop_front();
            debug!("admitted process {} at {}", pid, now);
            self.admit(pid, table);
            admitted += 1;
        }
        admitted
    }

    /// The process at the dispatch position.
    pub fn peek(&self) -> Option<Pid> {
        self.entries.front().copied()
    }

    /// Drop the head, returning it.
    pub fn advance_head(&mut self) -> Option<Pid> {
        self.entries.pop_front()
    }

    pub fn get(&self, index: usize) -> Option<Pid> {
        self.entries.get(index).copied()
    }

    pub fn remove(&mut self, index: usize) -> Option<Pid> {
        self.entries.remove(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pid> + '_ {
        self.entries.iter().copied()
    }

    /// Some processes have not arrived yet.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Workload;

    fn table(bursts: &[i64], arrivals: &[i64], priorities: Option<&[i64]>) -> ProcessTable {
        ProcessTable::new(&Workload::new(bursts, arrivals, priorities).unwrap())
    }

    fn order<O: InsertionOrder>(queue: &ReadyQueue<O>) -> Vec<usize> {
        queue.iter().map(Pid::index).collect()
    }

    #[test]
    fn arrival_order_appends() {
        let mut table = table(&[5, 3, 8], &[0, 0, 0], None);
        let mut queue = ReadyQueue::new(ArrivalOrder, &table);
        assert_eq!(queue.admit_arrivals(0, &mut table), 3);
        assert_eq!(order(&queue), vec![0, 1, 2]);
        assert!(!queue.has_pending());
    }

    #[test]
    fn admit_arrivals_is_cumulative() {
        let mut table = table(&[4, 4, 4], &[2, 0, 1], None);
        let mut queue = ReadyQueue::new(ArrivalOrder, &table);
        assert_eq!(queue.admit_arrivals(0, &mut table), 1);
        assert_eq!(queue.admit_arrivals(0, &mut table), 0);
        assert_eq!(queue.admit_arrivals(5, &mut table), 2);
        assert_eq!(order(&queue), vec![1, 2, 0]);
        assert_eq!(table[Pid::new(0)].state(), ProcessState::Ready);
    }

    #[test]
    fn shortest_burst_keeps_ties_stable() {
        let mut table = table(&[5, 3, 5, 3], &[0, 0, 0, 0], None);
        let mut queue = ReadyQueue::new(ShortestBurst, &table);
        queue.admit_arrivals(0, &mut table);
        assert_eq!(order(&queue), vec![1, 3, 0, 2]);
    }

    #[test]
    fn shortest_burst_skips_running() {
        let mut table = table(&[5, 1], &[0, 1], None);
        let mut queue = ReadyQueue::new(ShortestBurst, &table);
        queue.admit_arrivals(0, &mut table);
        table[Pid::new(0)].dispatch().unwrap();

        queue.admit_arrivals(1, &mut table);
        assert_eq!(order(&queue), vec![0, 1]);
        assert_eq!(table[Pid::new(0)].state(), ProcessState::Running);
    }

    #[test]
    fn most_urgent_orders_by_priority() {
        let mut table = table(&[1, 1, 1], &[0, 0, 0], Some(&[3, 1, 2]));
        let mut queue = ReadyQueue::new(MostUrgent, &table);
        queue.admit_arrivals(0, &mut table);
        assert_eq!(order(&queue), vec![1, 2, 0]);
    }

    #[test]
    fn shortest_remaining_preempts_running() {
        let mut table = table(&[7, 4], &[0, 1], None);
        let mut queue = ReadyQueue::new(ShortestRemaining, &table);
        queue.admit_arrivals(0, &mut table);
        let head = queue.peek().unwrap();
        table[head].dispatch().unwrap();
        table[head].advance(true);

        queue.admit_arrivals(1, &mut table);
        assert_eq!(order(&queue), vec![1, 0]);
        assert_eq!(table[Pid::new(0)].state(), ProcessState::Ready);
    }

    #[test]
    fn shortest_remaining_equal_does_not_preempt() {
        let mut table = table(&[5, 4], &[0, 1], None);
        let mut queue = ReadyQueue::new(ShortestRemaining, &table);
        queue.admit_arrivals(0, &mut table);
        table[Pid::new(0)].dispatch().unwrap();
        table[Pid::new(0)].advance(true);

        queue.admit_arrivals(1, &mut table);
        assert_eq!(order(&queue), vec![0, 1]);
        assert_eq!(table[Pid::new(0)].state(), ProcessState::Running);
    }

    #[test]
    fn advance_head_and_remove() {
        let mut table = table(&[1, 1, 1], &[0, 0, 0], None);
        let mut queue = ReadyQueue::new(ArrivalOrder, &table);
        queue.admit_arrivals(0, &mut table);

        assert_eq!(queue.advance_head(), Some(Pid::new(0)));
        assert_eq!(queue.remove(1), Some(Pid::new(2)));
        assert_eq!(queue.get(0), Some(Pid::new(1)));
        assert_eq!(queue.len(), 1);
    }
}
