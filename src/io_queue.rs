/*!
 * I/O Queue
 * Processes blocked on I/O and the completion events they are waiting for
 */

use crate::core::types::{Pid, Timestamp};
use crate::scene::{GameEvent, SceneObject, TickContext, View};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingIo {
    pid: Pid,
    ready_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct IoQueue {
    min_wait_ms: Timestamp,
    max_wait_ms: Timestamp,
    pub view: View,
    pending: Vec<PendingIo>,
    ready: VecDeque<Pid>,
}

impl IoQueue {
    #[must_use]
    pub fn new(min_wait_ms: Timestamp, max_wait_ms: Timestamp) -> Self {
        Self {
            min_wait_ms,
            max_wait_ms: max_wait_ms.max(min_wait_ms),
            view: View::new(150, 50),
            pending: Vec::new(),
            ready: VecDeque::new(),
        }
    }

    /// Completion events ready for delivery
    #[inline]
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.ready.len()
    }

    /// Processes still waiting for their I/O to complete
    #[inline]
    #[must_use]
    pub fn waiting_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn contains(&self, pid: Pid) -> bool {
        self.ready.contains(&pid) || self.pending.iter().any(|io| io.pid == pid)
    }

    /// Schedule an I/O completion uniformly within the configured bounds
    pub fn enqueue(&mut self, pid: Pid, now: Timestamp, rng: &mut StdRng) {
        let wait = rng.gen_range(self.min_wait_ms..=self.max_wait_ms);
        self.pending.push(PendingIo {
            pid,
            ready_at: now + wait,
        });
    }

    /// Forget `pid`, e.g. after it was forcibly terminated
    pub fn remove(&mut self, pid: Pid) {
        self.pending.retain(|io| io.pid != pid);
        self.ready.retain(|&ready| ready != pid);
    }

    /// Deliver every ready event, oldest first
    pub fn drain_events(&mut self) -> Vec<Pid> {
        self.ready.drain(..).collect()
    }
}

impl SceneObject for IoQueue {
    fn update(&mut self, ctx: &TickContext, _events: &[GameEvent]) {
        let now = ctx.current_time;
        let mut due: Vec<PendingIo> = Vec::new();
        self.pending.retain(|io| {
            if io.ready_at <= now {
                due.push(*io);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|io| io.ready_at);
        self.ready.extend(due.into_iter().map(|io| io.pid));
    }
}
