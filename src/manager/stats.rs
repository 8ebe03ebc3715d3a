/*!
 * Statistics
 * Read-only snapshot of the simulation for scoring and display
 */

use super::ProcessManager;
use crate::core::types::StarvationBuckets;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Stats {
    pub alive_process_count: usize,
    pub alive_process_count_by_starvation_level: StarvationBuckets,
    pub active_process_count: usize,
    pub active_process_count_by_starvation_level: StarvationBuckets,
    pub blocked_active_process_count: usize,
    pub io_event_count: usize,
    pub gracefully_terminated_process_count: usize,
    pub user_terminated_process_count: usize,
}

impl ProcessManager {
    /// Pure read; safe to call at any frequency
    #[must_use]
    pub fn current_stats(&self) -> Stats {
        let cpu_stats = self.cpu_manager.get_current_stats(&self.processes);

        let mut alive_process_count_by_starvation_level = StarvationBuckets::default();
        for process in self
            .alive_process_list
            .iter()
            .filter_map(|pid| self.processes.get(pid))
        {
            alive_process_count_by_starvation_level[process.starvation_level()] += 1;
        }

        Stats {
            alive_process_count: self.alive_process_list.len(),
            alive_process_count_by_starvation_level,
            active_process_count: cpu_stats.active_process_count,
            active_process_count_by_starvation_level: cpu_stats
                .active_process_count_by_starvation_level,
            blocked_active_process_count: cpu_stats.blocked_active_process_count,
            io_event_count: self.io_queue.event_count(),
            gracefully_terminated_process_count: self.gracefully_terminated_process_count,
            user_terminated_process_count: self.user_terminated_process_count,
        }
    }
}
