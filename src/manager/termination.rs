/*!
 * Termination Accounting
 * Graceful and user-forced retirement of alive processes
 */

use super::ProcessManager;
use crate::core::types::Pid;
use log::{debug, info, warn};

impl ProcessManager {
    /// Retire `pid` from the alive roster
    ///
    /// Either way the process is detached from its CPU, the I/O queue and any
    /// idle slot. Graceful terminations always succeed and start the exit
    /// animation; the process stays tracked until it has risen off screen.
    /// Forced terminations succeed only while the user-termination budget
    /// lasts and park the process in the next terminated slot. A refused
    /// forced termination changes nothing.
    pub fn terminate(&mut self, pid: Pid, by_user: bool) -> bool {
        if !self.alive_process_list.contains(&pid) {
            warn!("Cannot terminate PID {}: not alive", pid);
            return false;
        }

        if by_user {
            if self.user_terminated_process_count >= self.config.max_processes_terminated_by_user
            {
                debug!(
                    "User termination of PID {} refused: budget of {} exhausted",
                    pid, self.config.max_processes_terminated_by_user
                );
                return false;
            }

            let slot = &mut self.user_terminated_process_slots[self.user_terminated_process_count];
            slot.process = Some(pid);
            let (slot_x, slot_y) = slot.position();
            self.user_terminated_process_count += 1;
            self.detach(pid);

            if let Some(process) = self.processes.get_mut(&pid) {
                process.kill();
                process.view.set_target_xy(slot_x, slot_y);
            }

            info!(
                "PID {} terminated by user ({}/{})",
                pid, self.user_terminated_process_count, self.config.max_processes_terminated_by_user
            );
        } else {
            self.gracefully_terminated_process_count += 1;
            self.detach(pid);
            if let Some(process) = self.processes.get_mut(&pid) {
                process.exit();
            }
            info!("PID {} terminated gracefully", pid);
        }

        self.alive_process_list.retain(|&alive| alive != pid);
        self.observer.on_process_terminated(pid, by_user);
        true
    }

    fn detach(&mut self, pid: Pid) {
        self.cpu_manager.remove_process_from_cpu(pid);
        self.io_queue.remove(pid);
        for process_slot in &mut self.process_slots {
            if process_slot.process == Some(pid) {
                process_slot.process = None;
            }
        }
    }
}
