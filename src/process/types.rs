/*!
 * Process Types
 * The lifecycle unit being scheduled
 */

use crate::core::limits::{MAX_STARVATION_LEVEL, NUM_STARVATION_LEVELS, PROCESS_ANIMATION_SPEED};
use crate::core::limits::{PROCESS_SLOT_HEIGHT, PROCESS_SLOT_WIDTH};
use crate::core::types::{Pid, SortKey, StarvationLevel, Timestamp};
use crate::scene::{GameEvent, SceneObject, TickContext, View};
use serde::{Deserialize, Serialize};

/// Process state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Idle in a slot, waiting for a CPU
    Waiting,
    /// Executing on a CPU
    Running,
    /// Holding a CPU while waiting for I/O
    Blocked,
    /// Completed; animating off the top of the screen
    Ended,
    /// Terminated by the in-game user; parked in a terminated slot
    Killed,
}

/// Something a process needs its owner to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessEvent {
    /// CPU burst finished
    Completed,
    /// Reached an I/O request; now blocked on its CPU
    IoRequested,
    /// Waited past the highest starvation level
    StarvedOut,
}

/// Immutable description of a process, produced by a factory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessProfile {
    pub sort_key: SortKey,
    /// Total CPU time needed to complete
    pub cpu_burst_ms: Timestamp,
    /// CPU-time offsets at which the process blocks on I/O, ascending
    #[serde(default)]
    pub io_points_ms: Vec<Timestamp>,
    /// Waiting time per starvation level
    pub starvation_interval_ms: Timestamp,
}

impl ProcessProfile {
    #[must_use]
    pub fn new(sort_key: SortKey, cpu_burst_ms: Timestamp, starvation_interval_ms: Timestamp) -> Self {
        Self {
            sort_key,
            cpu_burst_ms,
            io_points_ms: Vec::new(),
            starvation_interval_ms,
        }
    }

    #[must_use]
    pub fn with_io_points(mut self, mut io_points_ms: Vec<Timestamp>) -> Self {
        io_points_ms.sort_unstable();
        self.io_points_ms = io_points_ms;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Process {
    pid: Pid,
    profile: ProcessProfile,
    state: ProcessState,
    pub view: View,
    starvation_level: StarvationLevel,
    waiting_since: Option<Timestamp>,
    cpu_time_ms: Timestamp,
    next_io_point: usize,
    last_update: Option<Timestamp>,
    starved_out: bool,
    pending: Vec<ProcessEvent>,
}

impl Process {
    #[must_use]
    pub fn new(pid: Pid, profile: ProcessProfile) -> Self {
        Self {
            pid,
            profile,
            state: ProcessState::Waiting,
            view: View::new(PROCESS_SLOT_WIDTH, PROCESS_SLOT_HEIGHT),
            starvation_level: 0,
            waiting_since: None,
            cpu_time_ms: 0,
            next_io_point: 0,
            last_update: None,
            starved_out: false,
            pending: Vec::new(),
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn pid(&self) -> Pid {
        self.pid
    }

    #[inline(always)]
    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.profile.sort_key
    }

    /// Adjust the ordering key; picked up by the next sort step
    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.profile.sort_key = sort_key;
    }

    #[inline(always)]
    #[must_use]
    pub const fn starvation_level(&self) -> StarvationLevel {
        self.starvation_level
    }

    #[inline(always)]
    #[must_use]
    pub const fn state(&self) -> ProcessState {
        self.state
    }

    #[must_use]
    pub fn profile(&self) -> &ProcessProfile {
        &self.profile
    }

    #[inline]
    #[must_use]
    pub const fn cpu_time_ms(&self) -> Timestamp {
        self.cpu_time_ms
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_in_motion(&self) -> bool {
        self.view.is_in_motion()
    }

    #[inline(always)]
    #[must_use]
    pub const fn has_ended(&self) -> bool {
        matches!(self.state, ProcessState::Ended)
    }

    /// Ended and risen entirely above the visible area
    #[inline]
    #[must_use]
    pub const fn has_exited(&self) -> bool {
        self.has_ended() && self.view.y <= -self.view.height
    }

    #[inline]
    #[must_use]
    pub const fn is_on_cpu(&self) -> bool {
        matches!(self.state, ProcessState::Running | ProcessState::Blocked)
    }

    #[inline]
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(self.state, ProcessState::Blocked)
    }

    /// Events raised since the last drain
    pub fn take_events(&mut self) -> Vec<ProcessEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Start executing; starvation resets
    pub fn start_running(&mut self) {
        self.state = ProcessState::Running;
        self.starvation_level = 0;
        self.waiting_since = None;
    }

    /// Give up the CPU voluntarily. Only a running process can yield.
    pub fn yield_cpu(&mut self) -> bool {
        if self.state != ProcessState::Running {
            return false;
        }
        self.state = ProcessState::Waiting;
        self.waiting_since = None;
        true
    }

    /// I/O completed; resume on the CPU still held
    pub fn wake_from_io(&mut self) -> bool {
        if self.state != ProcessState::Blocked {
            return false;
        }
        self.start_running();
        true
    }

    /// Completed: start the exit animation upward
    pub fn exit(&mut self) {
        self.state = ProcessState::Ended;
        self.view.set_target_xy(self.view.x, -self.view.height);
    }

    pub fn kill(&mut self) {
        self.state = ProcessState::Killed;
    }

    fn update_starvation(&mut self, now: Timestamp) {
        let since = *self.waiting_since.get_or_insert(now);
        let waited = now.saturating_sub(since);
        let interval = self.profile.starvation_interval_ms.max(1);

        self.starvation_level = ((waited / interval) as usize).min(MAX_STARVATION_LEVEL);

        if self.state == ProcessState::Waiting
            && !self.starved_out
            && waited >= interval * NUM_STARVATION_LEVELS as Timestamp
        {
            self.starved_out = true;
            self.pending.push(ProcessEvent::StarvedOut);
        }
    }

    fn update_execution(&mut self, now: Timestamp, elapsed: Timestamp) {
        self.cpu_time_ms += elapsed;

        if let Some(&io_point) = self.profile.io_points_ms.get(self.next_io_point) {
            if self.cpu_time_ms >= io_point {
                self.next_io_point += 1;
                self.state = ProcessState::Blocked;
                self.waiting_since = Some(now);
                self.pending.push(ProcessEvent::IoRequested);
                return;
            }
        }

        if self.cpu_time_ms >= self.profile.cpu_burst_ms {
            self.pending.push(ProcessEvent::Completed);
        }
    }
}

impl SceneObject for Process {
    fn update(&mut self, ctx: &TickContext, _events: &[GameEvent]) {
        let now = ctx.current_time;
        let elapsed = self.last_update.map_or(0, |t| now.saturating_sub(t));
        self.last_update = Some(now);

        self.view.move_towards_target(PROCESS_ANIMATION_SPEED);

        match self.state {
            ProcessState::Waiting | ProcessState::Blocked => self.update_starvation(now),
            ProcessState::Running => self.update_execution(now, elapsed),
            ProcessState::Ended | ProcessState::Killed => {}
        }
    }
}
