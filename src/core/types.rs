/*!
 * Core Types
 * Common types used across the simulation
 */

/// Process ID type (assigned from 1, never reused within a session)
pub type Pid = u32;

/// CPU unit identifier (1-based, matches the hotkey banks)
pub type CpuId = u32;

/// Simulation timestamp in milliseconds
pub type Timestamp = u64;

/// Ordering key used by the sort illusion
pub type SortKey = u32;

/// Starvation bucket index (0..=MAX_STARVATION_LEVEL)
pub type StarvationLevel = usize;

/// Per-level process counts, one bucket per starvation level
pub type StarvationBuckets = [usize; crate::core::limits::NUM_STARVATION_LEVELS];

/// Screen-space coordinate
pub type Coord = i32;
