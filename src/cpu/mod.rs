/*!
 * CPU Manager
 * Fixed set of execution units and their occupancy
 *
 * CPUs record only the pid they run; the orchestrator's process table stays
 * the single owner of every process.
 */

use crate::core::limits::{CPU_GAP, CPU_ORIGIN, PROCESS_SLOT_HEIGHT, PROCESS_SLOT_WIDTH};
use crate::core::types::{CpuId, Pid, StarvationBuckets};
use crate::process::Process;
use crate::scene::{GameEvent, SceneObject, TickContext, View};
use ahash::AHashMap;
use log::info;
use serde::{Deserialize, Serialize};

/// Single execution unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpu {
    id: CpuId,
    pub view: View,
    process: Option<Pid>,
}

impl Cpu {
    #[must_use]
    pub fn new(id: CpuId) -> Self {
        Self {
            id,
            view: View::new(PROCESS_SLOT_WIDTH, PROCESS_SLOT_HEIGHT),
            process: None,
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn id(&self) -> CpuId {
        self.id
    }

    #[inline(always)]
    #[must_use]
    pub const fn has_process(&self) -> bool {
        self.process.is_some()
    }

    #[inline(always)]
    #[must_use]
    pub const fn process(&self) -> Option<Pid> {
        self.process
    }
}

/// Aggregate occupancy reported to the orchestrator's stats
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CpuStats {
    pub active_process_count: usize,
    pub active_process_count_by_starvation_level: StarvationBuckets,
    pub blocked_active_process_count: usize,
}

#[derive(Debug, Clone)]
pub struct CpuManager {
    cpus: Vec<Cpu>,
}

impl CpuManager {
    #[must_use]
    pub fn new(num_cpus: usize) -> Self {
        let cpus = (1..=num_cpus as CpuId).map(Cpu::new).collect();
        Self { cpus }
    }

    #[must_use]
    pub fn cpus(&self) -> &[Cpu] {
        &self.cpus
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cpus.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cpus.is_empty()
    }

    /// Look up a CPU by its 1-based id
    #[must_use]
    pub fn get_cpu_by_id(&self, id: CpuId) -> Option<&Cpu> {
        self.cpus.iter().find(|cpu| cpu.id == id)
    }

    /// CPU currently running `pid`, if any
    #[must_use]
    pub fn cpu_of(&self, pid: Pid) -> Option<&Cpu> {
        self.cpus.iter().find(|cpu| cpu.process == Some(pid))
    }

    #[must_use]
    pub fn first_free_cpu(&self) -> Option<&Cpu> {
        self.cpus.iter().find(|cpu| !cpu.has_process())
    }

    /// Occupy a free CPU. Returns false if the id is unknown or busy.
    pub fn assign(&mut self, id: CpuId, pid: Pid) -> bool {
        match self.cpus.iter_mut().find(|cpu| cpu.id == id) {
            Some(cpu) if !cpu.has_process() => {
                cpu.process = Some(pid);
                true
            }
            _ => false,
        }
    }

    /// Detach `pid` from whichever CPU holds it
    pub fn remove_process_from_cpu(&mut self, pid: Pid) -> bool {
        match self.cpus.iter_mut().find(|cpu| cpu.process == Some(pid)) {
            Some(cpu) => {
                cpu.process = None;
                true
            }
            None => false,
        }
    }

    /// Count processes on CPUs, bucketed by starvation level
    #[must_use]
    pub fn get_current_stats(&self, processes: &AHashMap<Pid, Process>) -> CpuStats {
        let mut stats = CpuStats::default();

        for pid in self.cpus.iter().filter_map(Cpu::process) {
            let Some(process) = processes.get(&pid) else {
                continue;
            };
            stats.active_process_count += 1;
            stats.active_process_count_by_starvation_level[process.starvation_level()] += 1;
            if process.is_blocked() {
                stats.blocked_active_process_count += 1;
            }
        }

        stats
    }
}

impl SceneObject for CpuManager {
    fn setup(&mut self) {
        let (origin_x, origin_y) = CPU_ORIGIN;
        for (i, cpu) in self.cpus.iter_mut().enumerate() {
            let stride = cpu.view.width + CPU_GAP;
            cpu.view.set_xy(origin_x + i as i32 * stride, origin_y);
        }
        info!("CPU manager initialized with {} CPUs", self.cpus.len());
    }

    fn update(&mut self, _ctx: &TickContext, _events: &[GameEvent]) {}
}
