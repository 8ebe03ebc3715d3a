/*!
 * Shared fixtures for process manager tests
 */

#![allow(dead_code)]

use procsim::{
    Pid, Process, ProcessFactory, ProcessManager, ProcessProfile, SceneObject, SortKey,
    StageConfig, TickContext, Timestamp,
};
use rand::rngs::StdRng;

pub const TICK_MS: Timestamp = 16;

/// Long enough that nothing starves during a test
pub const NEVER_STARVE_MS: Timestamp = 1_000_000_000;

/// Deterministic processes: pid N gets `keys[N - 1]`
pub struct KeyedFactory {
    keys: Vec<SortKey>,
    cpu_burst_ms: Timestamp,
    io_points_ms: Vec<Timestamp>,
}

impl KeyedFactory {
    pub fn new(keys: &[SortKey]) -> Self {
        Self {
            keys: keys.to_vec(),
            cpu_burst_ms: 60_000,
            io_points_ms: Vec::new(),
        }
    }

    pub fn with_burst(mut self, cpu_burst_ms: Timestamp) -> Self {
        self.cpu_burst_ms = cpu_burst_ms;
        self
    }

    pub fn with_io_points(mut self, io_points_ms: Vec<Timestamp>) -> Self {
        self.io_points_ms = io_points_ms;
        self
    }
}

impl ProcessFactory for KeyedFactory {
    fn create_random_process(&mut self, pid: Pid, _rng: &mut StdRng) -> Process {
        let key = self.keys.get(pid as usize - 1).copied().unwrap_or(pid);
        let profile = ProcessProfile::new(key, self.cpu_burst_ms, NEVER_STARVE_MS)
            .with_io_points(self.io_points_ms.clone());
        Process::new(pid, profile)
    }
}

/// No spontaneous admissions, no power-ups, no starvation
pub fn quiet_config() -> StageConfig {
    StageConfig {
        name: "test".to_string(),
        num_processes_at_startup: 0,
        max_processes_terminated_by_user: 3,
        new_process_probability: 0.0,
        io_probability: 0.0,
        io_min_waiting_time_ms: 100,
        io_max_waiting_time_ms: 100,
        starvation_interval_ms: NEVER_STARVE_MS,
        time_ms_to_show_sort_button: Timestamp::MAX,
        time_ms_to_show_auto_sort_checkbox: Timestamp::MAX,
        rng_seed: Some(42),
        ..StageConfig::default()
    }
}

pub fn keyed_manager(config: StageConfig, keys: &[SortKey]) -> ProcessManager {
    ProcessManager::builder(config)
        .with_factory(KeyedFactory::new(keys))
        .build()
}

/// Admit one process per key into slots 0.. and let them come to rest
pub fn settled_manager(keys: &[SortKey]) -> (ProcessManager, Timestamp) {
    let mut manager = keyed_manager(quiet_config(), keys);
    for _ in keys {
        assert!(manager.create_process(None));
    }
    let now = settle(&mut manager, 0);
    (manager, now)
}

pub fn tick(manager: &mut ProcessManager, now: Timestamp) {
    manager.update(&TickContext::at(now), &[]);
}

/// Tick until no process is moving; returns the time reached
pub fn settle(manager: &mut ProcessManager, mut now: Timestamp) -> Timestamp {
    for _ in 0..500 {
        if !manager.any_process_in_motion() {
            return now;
        }
        now += TICK_MS;
        tick(manager, now);
    }
    panic!("processes never came to rest");
}

/// Tick until `done` holds; returns the time reached
pub fn run_until(
    manager: &mut ProcessManager,
    mut now: Timestamp,
    mut done: impl FnMut(&ProcessManager) -> bool,
) -> Timestamp {
    for _ in 0..5_000 {
        if done(manager) {
            return now;
        }
        now += TICK_MS;
        tick(manager, now);
    }
    panic!("condition never reached");
}

pub fn idle_keys(manager: &ProcessManager) -> Vec<SortKey> {
    manager
        .idle_pids()
        .into_iter()
        .map(|pid| manager.process(pid).sort_key())
        .collect()
}
