/*!
 * Sort Illusion
 *
 * Makes idle processes look like they are being quicksorted one recursion
 * level at a time. No recursion state survives between steps: every step
 * re-partitions the current snapshot from the top and applies only the first
 * level that actually reorders it. Processes joining or leaving the idle set
 * between steps simply take part in (or drop out of) the next snapshot.
 */

use super::ProcessManager;
use crate::core::limits::MIN_SORT_COOLDOWN_MS;
use crate::core::types::{Pid, SortKey, Timestamp};
use log::{debug, info};
use std::cmp::Ordering;

/// Non-decreasing by key
pub fn is_sorted_by_key<T, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> bool {
    items.windows(2).all(|pair| key(&pair[0]) <= key(&pair[1]))
}

/// One visible sort step
///
/// Returns `None` once `items` is sorted; otherwise the arrangement produced
/// by the first partition level that changes the order.
pub fn next_sort_step<T: Clone, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> Option<Vec<T>> {
    let keys: Vec<K> = items.iter().map(key).collect();
    if keys.windows(2).all(|pair| pair[0] <= pair[1]) {
        return None;
    }

    let indices: Vec<usize> = (0..items.len()).collect();
    let order = partition_step(&indices, &keys);
    Some(order.into_iter().map(|i| items[i].clone()).collect())
}

/// Partition around the middle element; descend into both sides only when
/// this level is already in place
fn partition_step<K: Ord>(indices: &[usize], keys: &[K]) -> Vec<usize> {
    if indices.len() <= 1 {
        return indices.to_vec();
    }

    let pivot = &keys[indices[indices.len() / 2]];
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for &i in indices {
        match keys[i].cmp(pivot) {
            Ordering::Less => less.push(i),
            Ordering::Equal => equal.push(i),
            Ordering::Greater => greater.push(i),
        }
    }

    let unchanged = less
        .iter()
        .chain(&equal)
        .chain(&greater)
        .eq(indices.iter());

    let mut arranged = if unchanged {
        partition_step(&less, keys)
    } else {
        less
    };
    arranged.extend(equal);
    if unchanged {
        arranged.extend(partition_step(&greater, keys));
    } else {
        arranged.extend(greater);
    }
    arranged
}

impl ProcessManager {
    #[must_use]
    pub fn auto_sort_enabled(&self) -> bool {
        self.auto_sort_checkbox.checked()
    }

    /// Minimum interval since the last sort initiation has elapsed; the stage
    /// start counts as an initiation at time zero
    #[must_use]
    pub fn sort_cooldown_elapsed(&self, current_time: Timestamp) -> bool {
        current_time.saturating_sub(self.last_sort_time) >= MIN_SORT_COOLDOWN_MS
    }

    /// Start sorting idle processes by ascending sort key
    ///
    /// Refused while a sort is running, during the cooldown, or while
    /// auto-sort is on. Applies the first step immediately.
    pub fn begin_sort(&mut self, current_time: Timestamp) -> bool {
        if self.sort_in_progress
            || self.auto_sort_enabled()
            || !self.sort_cooldown_elapsed(current_time)
        {
            debug!("Sort request at {}ms refused", current_time);
            return false;
        }

        self.sort_in_progress = true;
        self.last_sort_time = current_time;
        info!("Sorting {} idle processes", self.idle_pids().len());
        self.continue_sort();
        true
    }

    /// Advance the sort by one visible step
    ///
    /// No-op while any idle process is still moving. Clears the in-progress
    /// flag once the idle set is sorted.
    pub fn continue_sort(&mut self) {
        let idle = self.idle_pids();
        if idle
            .iter()
            .any(|pid| self.processes.get(pid).is_some_and(|p| p.is_in_motion()))
        {
            return;
        }

        let keyed: Vec<(Pid, SortKey)> = idle
            .iter()
            .map(|&pid| (pid, self.processes.get(&pid).map_or(0, |p| p.sort_key())))
            .collect();

        match next_sort_step(&keyed, |&(_, key)| key) {
            None => {
                if self.sort_in_progress {
                    info!("Idle processes sorted");
                }
                self.sort_in_progress = false;
            }
            Some(arranged) => {
                let order: Vec<Pid> = arranged.into_iter().map(|(pid, _)| pid).collect();
                self.restamp_slots(&order);
            }
        }
    }

    pub(super) fn handle_sorting(&mut self) {
        if self.sort_in_progress || self.auto_sort_enabled() {
            self.continue_sort();
        }
    }

    /// Reassign idle slots front to back in `order`; moved processes animate
    fn restamp_slots(&mut self, order: &[Pid]) {
        let previous: Vec<Option<Pid>> = self.process_slots.iter().map(|s| s.process).collect();

        for slot in &mut self.process_slots {
            slot.process = None;
        }

        for (index, (slot, &pid)) in self.process_slots.iter_mut().zip(order).enumerate() {
            slot.process = Some(pid);
            if previous[index] == Some(pid) {
                continue;
            }
            if let Some(process) = self.processes.get_mut(&pid) {
                let (x, y) = slot.position();
                process.view.set_target_xy(x, y);
            }
        }

        debug!("Sort step applied: {:?}", order);
    }
}
