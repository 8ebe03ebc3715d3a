/*!
 * Event Collector
 * Bounded in-memory history of process lifecycle events
 */

use super::events::{Event, Payload};
use super::observer::ProcessObserver;
use crate::core::limits::COLLECTOR_CAPACITY;
use crate::core::types::Pid;
use parking_lot::Mutex;
use std::collections::VecDeque;

struct Inner {
    events: VecDeque<Event>,
    next_seq: u64,
    created: u64,
    terminated: u64,
}

/// Observer that keeps the most recent events; share it through `Arc`
pub struct Collector {
    capacity: usize,
    inner: Mutex<Inner>,
}

impl Collector {
    pub fn new() -> Self {
        Self::with_capacity(COLLECTOR_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(Inner {
                events: VecDeque::with_capacity(capacity.min(COLLECTOR_CAPACITY)),
                next_seq: 1,
                created: 0,
                terminated: 0,
            }),
        }
    }

    /// Record an event, evicting the oldest when full
    pub fn emit(&self, pid: Pid, payload: Payload) {
        let mut inner = self.inner.lock();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        match payload {
            Payload::ProcessCreated => inner.created += 1,
            Payload::ProcessTerminated { .. } => inner.terminated += 1,
        }
        if inner.events.len() == self.capacity {
            inner.events.pop_front();
        }
        inner.events.push_back(Event { seq, pid, payload });
    }

    /// Retained events, oldest first
    pub fn events(&self) -> Vec<Event> {
        self.inner.lock().events.iter().cloned().collect()
    }

    /// Pids of every retained creation event, in admission order
    pub fn created_pids(&self) -> Vec<Pid> {
        self.inner
            .lock()
            .events
            .iter()
            .filter(|e| e.payload == Payload::ProcessCreated)
            .map(|e| e.pid)
            .collect()
    }

    /// Lifetime totals, unaffected by eviction
    pub fn totals(&self) -> (u64, u64) {
        let inner = self.inner.lock();
        (inner.created, inner.terminated)
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessObserver for Collector {
    fn on_process_created(&self, pid: Pid) {
        self.emit(pid, Payload::ProcessCreated);
    }

    fn on_process_terminated(&self, pid: Pid, by_user: bool) {
        self.emit(pid, Payload::ProcessTerminated { by_user });
    }
}
