/*!
 * Process Manager
 * Orchestrates admission, placement, termination, sorting and statistics
 *
 * # Ownership
 *
 * The manager owns every process in a single pid-indexed table. Idle slots,
 * terminated slots and CPUs store pids only, so a process is never claimed by
 * two owners.
 *
 * # Tick order
 *
 * 1. Frozen while the stage reports game over
 * 2. Key releases make the addressed CPU's process yield
 * 3. Admission timing
 * 4. Power-up visibility and sort button state
 * 5. One sort illusion step if a sort is active or auto-sort is on
 * 6. Children update; process events handled; exited processes reaped
 */

mod admission;
mod builder;
mod input;
mod powerups;
pub mod sort;
mod stats;
mod termination;

pub use builder::ProcessManagerBuilder;
pub use input::cpu_id_for_key;
pub use stats::Stats;

use crate::core::limits::{
    CHECKBOX_SPACING, IO_QUEUE_POSITION, NUM_PROCESS_SLOT_COLUMNS, NUM_PROCESS_SLOT_ROWS,
    PROCESS_SLOT_GAP, PROCESS_SLOT_HEIGHT, PROCESS_SLOT_ORIGIN, PROCESS_SLOT_WIDTH,
    SORT_BUTTON_POSITION, TERMINATED_SLOT_BOTTOM_MARGIN, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::core::types::{Coord, Pid, Timestamp};
use crate::cpu::CpuManager;
use crate::io_queue::IoQueue;
use crate::monitoring::ProcessObserver;
use crate::process::{Process, ProcessEvent, ProcessFactory, ProcessSlot};
use crate::scene::{GameEvent, SceneObject, TickContext};
use crate::stage::StageConfig;
use crate::ui::{Checkbox, SortButton};
use ahash::AHashMap;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use std::sync::Arc;

pub struct ProcessManager {
    config: StageConfig,
    factory: Box<dyn ProcessFactory>,
    observer: Arc<dyn ProcessObserver>,
    rng: StdRng,

    cpu_manager: CpuManager,
    io_queue: IoQueue,
    process_slots: Vec<ProcessSlot>,
    user_terminated_process_slots: Vec<ProcessSlot>,
    sort_button: SortButton,
    auto_sort_checkbox: Checkbox,
    auto_sort_checkbox_final_x: Coord,

    // Authoritative process table; entries leave only when fully destroyed
    processes: AHashMap<Pid, Process>,
    alive_process_list: Vec<Pid>,

    next_pid: Pid,
    last_new_process_check: Timestamp,
    last_process_creation_time: Timestamp,
    new_process_probability_numerator: u32,
    max_wait_between_new_processes: Option<Timestamp>,

    gracefully_terminated_process_count: usize,
    user_terminated_process_count: usize,
    sort_in_progress: bool,
    last_sort_time: Timestamp,
    game_over_requested: bool,
}

impl ProcessManager {
    /// Manager with the random factory, log observer and an entropy-seeded
    /// generator (unless the config pins a seed)
    pub fn new(config: StageConfig) -> Self {
        Self::builder(config).build()
    }

    pub fn builder(config: StageConfig) -> ProcessManagerBuilder {
        ProcessManagerBuilder::new(config)
    }

    pub(crate) fn from_parts(
        config: StageConfig,
        factory: Box<dyn ProcessFactory>,
        observer: Arc<dyn ProcessObserver>,
        rng: StdRng,
    ) -> Self {
        let new_process_probability_numerator = config.new_process_probability_numerator();
        let max_wait_between_new_processes =
            admission::max_wait_between_new_processes(new_process_probability_numerator);

        Self {
            cpu_manager: CpuManager::new(config.num_cpus),
            io_queue: IoQueue::new(config.io_min_waiting_time_ms, config.io_max_waiting_time_ms),
            process_slots: Vec::new(),
            user_terminated_process_slots: Vec::new(),
            sort_button: SortButton::new(),
            auto_sort_checkbox: Checkbox::new("Auto-Sort"),
            auto_sort_checkbox_final_x: 0,
            processes: AHashMap::new(),
            alive_process_list: Vec::new(),
            next_pid: 1,
            last_new_process_check: 0,
            last_process_creation_time: 0,
            new_process_probability_numerator,
            max_wait_between_new_processes,
            gracefully_terminated_process_count: 0,
            user_terminated_process_count: 0,
            sort_in_progress: false,
            last_sort_time: 0,
            game_over_requested: false,
            config,
            factory,
            observer,
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    #[must_use]
    pub fn cpu_manager(&self) -> &CpuManager {
        &self.cpu_manager
    }

    #[must_use]
    pub fn io_queue(&self) -> &IoQueue {
        &self.io_queue
    }

    #[must_use]
    pub fn process_slots(&self) -> &[ProcessSlot] {
        &self.process_slots
    }

    #[must_use]
    pub fn user_terminated_slots(&self) -> &[ProcessSlot] {
        &self.user_terminated_process_slots
    }

    #[must_use]
    pub fn sort_button(&self) -> &SortButton {
        &self.sort_button
    }

    #[must_use]
    pub fn auto_sort_checkbox(&self) -> &Checkbox {
        &self.auto_sort_checkbox
    }

    /// Alive roster; order carries no meaning
    #[must_use]
    pub fn alive_pids(&self) -> &[Pid] {
        &self.alive_process_list
    }

    #[must_use]
    pub fn next_pid(&self) -> Pid {
        self.next_pid
    }

    /// Look up a tracked process
    ///
    /// # Panics
    /// If `pid` is not tracked. Callers must only ask for pids they know exist;
    /// use [`Self::get_process`] otherwise.
    #[must_use]
    pub fn process(&self, pid: Pid) -> &Process {
        &self.processes[&pid]
    }

    #[must_use]
    pub fn get_process(&self, pid: Pid) -> Option<&Process> {
        self.processes.get(&pid)
    }

    /// Mutable access for the input layer and tests (e.g. adjusting sort keys)
    pub fn get_process_mut(&mut self, pid: Pid) -> Option<&mut Process> {
        self.processes.get_mut(&pid)
    }

    /// Every tracked process, alive or still animating out
    #[must_use]
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    #[must_use]
    pub fn sort_in_progress(&self) -> bool {
        self.sort_in_progress
    }

    #[must_use]
    pub fn user_terminated_process_count(&self) -> usize {
        self.user_terminated_process_count
    }

    #[must_use]
    pub fn gracefully_terminated_process_count(&self) -> usize {
        self.gracefully_terminated_process_count
    }

    #[must_use]
    pub fn max_processes_terminated_by_user(&self) -> usize {
        self.config.max_processes_terminated_by_user
    }

    /// A starving process could not be terminated; the stage should end
    #[must_use]
    pub fn game_over_requested(&self) -> bool {
        self.game_over_requested
    }

    #[must_use]
    pub fn any_process_in_motion(&self) -> bool {
        self.processes.values().any(Process::is_in_motion)
    }

    /// Index of the idle slot holding `pid`
    #[must_use]
    pub fn slot_of(&self, pid: Pid) -> Option<usize> {
        self.process_slots
            .iter()
            .position(|slot| slot.process == Some(pid))
    }

    /// Idle processes in slot order
    #[must_use]
    pub fn idle_pids(&self) -> Vec<Pid> {
        self.process_slots
            .iter()
            .filter_map(|slot| slot.process)
            .collect()
    }

    fn first_free_slot(&self) -> Option<usize> {
        self.process_slots.iter().position(ProcessSlot::is_free)
    }

    fn handle_process_event(&mut self, pid: Pid, event: ProcessEvent, now: Timestamp) {
        match event {
            ProcessEvent::Completed => {
                self.terminate(pid, false);
            }
            ProcessEvent::IoRequested => {
                self.io_queue.enqueue(pid, now, &mut self.rng);
                debug!("PID {} blocked on I/O", pid);
            }
            ProcessEvent::StarvedOut => {
                // Only an exhausted budget ends the stage
                if self.alive_process_list.contains(&pid) && !self.terminate(pid, true) {
                    warn!(
                        "PID {} starved but user terminations are exhausted ({}/{})",
                        pid,
                        self.user_terminated_process_count,
                        self.config.max_processes_terminated_by_user
                    );
                    self.game_over_requested = true;
                }
            }
        }
    }

    fn update_children(&mut self, ctx: &TickContext, events: &[GameEvent]) {
        self.cpu_manager.update(ctx, events);
        self.io_queue.update(ctx, events);
        self.sort_button.update(ctx, events);
        self.auto_sort_checkbox.update(ctx, events);

        let mut pids: Vec<Pid> = self.processes.keys().copied().collect();
        pids.sort_unstable();

        for pid in pids {
            let Some(process) = self.processes.get_mut(&pid) else {
                continue;
            };
            process.update(ctx, events);
            let process_events = process.take_events();

            for event in process_events {
                self.handle_process_event(pid, event, ctx.current_time);
            }

            if self.processes.get(&pid).is_some_and(Process::has_exited) {
                self.processes.remove(&pid);
                debug!("PID {} exited and was reaped", pid);
            }
        }
    }
}

impl SceneObject for ProcessManager {
    fn setup(&mut self) {
        let (origin_x, origin_y) = PROCESS_SLOT_ORIGIN;
        let stride_x = PROCESS_SLOT_WIDTH + PROCESS_SLOT_GAP;
        let stride_y = PROCESS_SLOT_HEIGHT + PROCESS_SLOT_GAP;

        self.process_slots = (0..NUM_PROCESS_SLOT_ROWS)
            .flat_map(|row| (0..NUM_PROCESS_SLOT_COLUMNS).map(move |column| (row, column)))
            .map(|(row, column)| {
                ProcessSlot::at(
                    origin_x + column as Coord * stride_x,
                    origin_y + row as Coord * stride_y,
                )
            })
            .collect();

        let terminated_y = WINDOW_HEIGHT - PROCESS_SLOT_HEIGHT - TERMINATED_SLOT_BOTTOM_MARGIN;
        self.user_terminated_process_slots = (0..self.config.max_processes_terminated_by_user)
            .map(|i| ProcessSlot::at(origin_x + i as Coord * stride_x, terminated_y))
            .collect();

        self.cpu_manager.setup();
        self.io_queue
            .view
            .set_xy(IO_QUEUE_POSITION.0, IO_QUEUE_POSITION.1);

        self.sort_button
            .view
            .set_xy(SORT_BUTTON_POSITION.0, SORT_BUTTON_POSITION.1);
        self.sort_button.visible = false;

        // Starts off-screen; slides in once revealed
        let button = self.sort_button.view;
        let checkbox_y = button.y + (button.height - self.auto_sort_checkbox.view.height) / 2;
        self.auto_sort_checkbox.view.set_xy(WINDOW_WIDTH, checkbox_y);
        self.auto_sort_checkbox.visible = false;
        self.auto_sort_checkbox_final_x = button.x + button.width + CHECKBOX_SPACING;

        info!(
            "Process manager ready for stage '{}': {} slots, {} terminated slots, {} CPUs",
            self.config.name,
            self.process_slots.len(),
            self.user_terminated_process_slots.len(),
            self.cpu_manager.len()
        );
    }

    fn update(&mut self, ctx: &TickContext, events: &[GameEvent]) {
        if ctx.game_over {
            return;
        }

        self.handle_events(events);
        self.handle_process_creation(ctx.current_time);
        self.handle_timed_powerups(ctx);
        self.handle_sorting();
        self.update_children(ctx, events);
    }
}

impl std::fmt::Debug for ProcessManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessManager")
            .field("stage", &self.config.name)
            .field("alive", &self.alive_process_list.len())
            .field("tracked", &self.processes.len())
            .field("next_pid", &self.next_pid)
            .field("sort_in_progress", &self.sort_in_progress)
            .finish_non_exhaustive()
    }
}
