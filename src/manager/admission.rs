/*!
 * Admission
 * Timing model deciding when new processes are created
 *
 * Startup burst: while the next pid is within the startup count, admit every
 * 50ms. Steady state: roll once per second against the configured percentage,
 * falling back to a forced admission once the computed maximum wait elapses.
 */

use super::ProcessManager;
use crate::core::limits::{
    ONE_SECOND_MS, STARTUP_ADMISSION_INTERVAL_MS, STEADY_ADMISSION_INTERVAL_MS, WINDOW_HEIGHT,
};
use crate::core::types::Timestamp;
use log::{debug, info, warn};
use rand::Rng;

/// `100 / numerator` seconds; unbounded when the numerator is zero
pub(super) fn max_wait_between_new_processes(numerator: u32) -> Option<Timestamp> {
    if numerator == 0 {
        return None;
    }
    Some((100.0 / f64::from(numerator) * ONE_SECOND_MS as f64) as Timestamp)
}

impl ProcessManager {
    /// Admit a process into `process_slot_id`, or the first free idle slot
    ///
    /// Returns false without side effects when the alive roster is at
    /// capacity or the requested slot is unavailable.
    pub fn create_process(&mut self, process_slot_id: Option<usize>) -> bool {
        if self.alive_process_list.len() >= self.config.max_processes {
            return false;
        }

        let Some(slot_index) = process_slot_id.or_else(|| self.first_free_slot()) else {
            warn!("No free process slot for admission");
            return false;
        };
        let Some(slot) = self.process_slots.get(slot_index) else {
            warn!("Process slot {} does not exist", slot_index);
            return false;
        };
        if !slot.is_free() {
            debug!("Process slot {} is occupied", slot_index);
            return false;
        }
        let (slot_x, slot_y) = slot.position();

        let pid = self.next_pid;
        self.next_pid += 1;

        let mut process = self.factory.create_random_process(pid, &mut self.rng);

        // Enter from below the visible area
        process
            .view
            .set_xy(slot_x, WINDOW_HEIGHT + process.view.height);
        process.view.target_y = Some(slot_y);

        self.process_slots[slot_index].process = Some(pid);
        self.alive_process_list.push(pid);
        info!(
            "Created process PID {} in slot {} (sort key {})",
            pid,
            slot_index,
            process.sort_key()
        );
        self.processes.insert(pid, process);

        self.observer.on_process_created(pid);
        true
    }

    pub(super) fn handle_process_creation(&mut self, current_time: Timestamp) {
        let since_check = current_time.saturating_sub(self.last_new_process_check);

        if self.next_pid <= self.config.num_processes_at_startup
            && since_check >= STARTUP_ADMISSION_INTERVAL_MS
        {
            self.last_new_process_check = current_time;
            self.last_process_creation_time = current_time;
            self.create_process(None);
        } else if since_check >= STEADY_ADMISSION_INTERVAL_MS {
            self.last_new_process_check = current_time;

            let roll: u32 = self.rng.gen_range(1..=100);
            let waited = current_time.saturating_sub(self.last_process_creation_time);
            let overdue = self
                .max_wait_between_new_processes
                .is_some_and(|max_wait| waited >= max_wait);

            if roll <= self.new_process_probability_numerator || overdue {
                self.create_process(None);
                self.last_process_creation_time = current_time;
            }
        }
    }
}
