/*!
 * Process Lifecycle Simulation
 * Stochastic admission, slot placement, termination accounting and the
 * animated sort illusion, driven one cooperative tick at a time
 */

pub mod core;
pub mod cpu;
pub mod io_queue;
pub mod manager;
pub mod monitoring;
pub mod process;
pub mod scene;
pub mod stage;
pub mod ui;

// Re-exports
pub use crate::core::errors::{ConfigError, ConfigResult};
pub use crate::core::types::{CpuId, Pid, SortKey, StarvationLevel, Timestamp};
pub use cpu::{Cpu, CpuManager, CpuStats};
pub use io_queue::IoQueue;
pub use manager::{ProcessManager, ProcessManagerBuilder, Stats};
pub use monitoring::{init_tracing, Collector, LogObserver, ProcessObserver};
pub use process::{
    Process, ProcessEvent, ProcessFactory, ProcessProfile, ProcessSlot, ProcessState,
    RandomProcessFactory,
};
pub use scene::{GameEvent, KeyEvent, SceneObject, TickContext};
pub use stage::{Stage, StageConfig};
