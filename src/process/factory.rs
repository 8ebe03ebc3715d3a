/*!
 * Process Factory
 * Produces new process entities for admitted pids
 */

use super::types::{Process, ProcessProfile};
use crate::core::limits::ONE_SECOND_MS;
use crate::core::types::{Pid, SortKey, Timestamp};
use crate::stage::StageConfig;
use rand::rngs::StdRng;
use rand::Rng;

/// Source of new processes
///
/// The orchestrator hands over its own generator so a seeded run stays
/// reproducible regardless of which factory is installed.
pub trait ProcessFactory: Send {
    fn create_random_process(&mut self, pid: Pid, rng: &mut StdRng) -> Process;
}

/// Draws process profiles from the stage configuration
#[derive(Debug, Clone)]
pub struct RandomProcessFactory {
    max_sort_key: SortKey,
    min_cpu_burst_ms: Timestamp,
    max_cpu_burst_ms: Timestamp,
    io_probability: f64,
    starvation_interval_ms: Timestamp,
}

impl RandomProcessFactory {
    #[must_use]
    pub fn new(config: &StageConfig) -> Self {
        Self {
            max_sort_key: config.max_sort_key.max(1),
            min_cpu_burst_ms: config.min_cpu_burst_ms,
            max_cpu_burst_ms: config.max_cpu_burst_ms.max(config.min_cpu_burst_ms),
            io_probability: config.io_probability.clamp(0.0, 1.0),
            starvation_interval_ms: config.starvation_interval_ms,
        }
    }
}

impl ProcessFactory for RandomProcessFactory {
    fn create_random_process(&mut self, pid: Pid, rng: &mut StdRng) -> Process {
        let sort_key = rng.gen_range(1..=self.max_sort_key);
        let cpu_burst_ms = rng.gen_range(self.min_cpu_burst_ms..=self.max_cpu_burst_ms);

        // One chance per whole second of CPU time to block on I/O there
        let io_points_ms = (1..=cpu_burst_ms / ONE_SECOND_MS)
            .map(|second| second * ONE_SECOND_MS)
            .filter(|&point| point < cpu_burst_ms)
            .filter(|_| rng.gen_bool(self.io_probability))
            .collect();

        let profile = ProcessProfile::new(sort_key, cpu_burst_ms, self.starvation_interval_ms)
            .with_io_points(io_points_ms);

        Process::new(pid, profile)
    }
}
