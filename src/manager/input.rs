/*!
 * Input Handling
 * Player-facing actions: hotkey preemption, dispatch, I/O delivery, widgets
 */

use super::ProcessManager;
use crate::core::types::{CpuId, Pid, Timestamp};
use crate::cpu::Cpu;
use crate::process::ProcessState;
use crate::scene::{GameEvent, KeyEvent};
use log::{debug, info};

/// Map a number-key release to a CPU id
///
/// Accepts `"0"`..`"9"` and keypad `"[0]"`..`"[9]"`. Zero addresses CPU 10;
/// shift selects the second bank (11..=20).
#[must_use]
pub fn cpu_id_for_key(event: &KeyEvent) -> Option<CpuId> {
    let label = event.key.as_str();
    let digit = match label.as_bytes() {
        [d] => *d,
        [b'[', d, b']'] => *d,
        _ => return None,
    };
    if !digit.is_ascii_digit() {
        return None;
    }

    let mut cpu_id = CpuId::from(digit - b'0');
    if cpu_id == 0 {
        cpu_id = 10;
    }
    if event.shift {
        cpu_id += 10;
    }
    Some(cpu_id)
}

impl ProcessManager {
    pub(super) fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            let GameEvent::KeyUp(key_event) = event else {
                continue;
            };
            let Some(cpu_id) = cpu_id_for_key(key_event) else {
                continue;
            };

            let pid = self.cpu_manager.get_cpu_by_id(cpu_id).and_then(Cpu::process);
            if let Some(pid) = pid {
                debug!("Key {:?} releases CPU {}", key_event.key, cpu_id);
                self.yield_cpu(pid);
            }
        }
    }

    /// Move an idle process onto the first free CPU
    pub fn dispatch(&mut self, pid: Pid) -> bool {
        if self.processes.get(&pid).map(|p| p.state()) != Some(ProcessState::Waiting) {
            return false;
        }
        let Some(slot_index) = self.slot_of(pid) else {
            return false;
        };
        let Some((cpu_id, x, y)) = self
            .cpu_manager
            .first_free_cpu()
            .map(|cpu| (cpu.id(), cpu.view.x, cpu.view.y))
        else {
            return false;
        };

        self.cpu_manager.assign(cpu_id, pid);
        self.process_slots[slot_index].process = None;
        if let Some(process) = self.processes.get_mut(&pid) {
            process.start_running();
            process.view.set_target_xy(x, y);
        }
        info!("PID {} dispatched to CPU {}", pid, cpu_id);
        true
    }

    /// Voluntarily release a running process's CPU; it returns to the first
    /// free idle slot
    pub fn yield_cpu(&mut self, pid: Pid) -> bool {
        let Some(slot_index) = self.first_free_slot() else {
            return false;
        };
        let (x, y) = self.process_slots[slot_index].position();

        let Some(process) = self.processes.get_mut(&pid) else {
            return false;
        };
        if !process.yield_cpu() {
            return false;
        }
        process.view.set_target_xy(x, y);

        self.cpu_manager.remove_process_from_cpu(pid);
        self.process_slots[slot_index].process = Some(pid);
        info!("PID {} yielded its CPU", pid);
        true
    }

    /// Deliver every ready I/O event; returns how many processes resumed
    pub fn process_io_events(&mut self) -> usize {
        let woken = self.io_queue.drain_events();
        let mut resumed = 0;
        for pid in woken {
            if self
                .processes
                .get_mut(&pid)
                .is_some_and(|process| process.wake_from_io())
            {
                resumed += 1;
            }
        }
        if resumed > 0 {
            debug!("{} processes resumed after I/O", resumed);
        }
        resumed
    }

    /// Sort button click; honours the advisory disabled flag
    pub fn press_sort_button(&mut self, current_time: Timestamp) -> bool {
        if !self.sort_button.is_clickable() {
            return false;
        }
        self.begin_sort(current_time)
    }

    /// Auto-sort checkbox toggle; ignored while the checkbox is hidden
    pub fn set_auto_sort(&mut self, enabled: bool) -> bool {
        let changed = self.auto_sort_checkbox.set_checked(enabled);
        if changed {
            info!("Auto-sort {}", if enabled { "enabled" } else { "disabled" });
        }
        changed
    }
}
