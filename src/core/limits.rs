/*!
 * Simulation Limits and Constants
 *
 * Centralized location for timing intervals, layout geometry and capacity bounds.
 */

use super::types::{Coord, Timestamp};

// =============================================================================
// TIMING
// =============================================================================

/// One simulated second
pub const ONE_SECOND_MS: Timestamp = 1000;

/// Admission attempt interval while the startup burst is running
pub const STARTUP_ADMISSION_INTERVAL_MS: Timestamp = 50;

/// Admission roll interval once the startup burst has completed
pub const STEADY_ADMISSION_INTERVAL_MS: Timestamp = ONE_SECOND_MS;

/// Minimum time between two manual sort initiations
pub const MIN_SORT_COOLDOWN_MS: Timestamp = 100;

// =============================================================================
// STARVATION
// =============================================================================

/// Number of starvation buckets (levels 0..=5)
pub const NUM_STARVATION_LEVELS: usize = 6;

/// Highest starvation level a process can reach
pub const MAX_STARVATION_LEVEL: usize = NUM_STARVATION_LEVELS - 1;

// =============================================================================
// LAYOUT
// =============================================================================

pub const WINDOW_WIDTH: Coord = 1024;
pub const WINDOW_HEIGHT: Coord = 768;

/// Idle slot grid: 6 rows of 7 columns
pub const NUM_PROCESS_SLOT_ROWS: usize = 6;
pub const NUM_PROCESS_SLOT_COLUMNS: usize = 7;
pub const NUM_PROCESS_SLOTS: usize = NUM_PROCESS_SLOT_ROWS * NUM_PROCESS_SLOT_COLUMNS;

pub const PROCESS_SLOT_WIDTH: Coord = 64;
pub const PROCESS_SLOT_HEIGHT: Coord = 64;
pub const PROCESS_SLOT_GAP: Coord = 5;

/// Top-left corner of the idle slot grid
pub const PROCESS_SLOT_ORIGIN: (Coord, Coord) = (50, 155);

/// Baseline of the user-terminated slot row, measured from the bottom edge
pub const TERMINATED_SLOT_BOTTOM_MARGIN: Coord = 20;

/// Top-left corner of the CPU row
pub const CPU_ORIGIN: (Coord, Coord) = (50, 50);
pub const CPU_GAP: Coord = 5;

pub const IO_QUEUE_POSITION: (Coord, Coord) = (50, 10);

pub const SORT_BUTTON_POSITION: (Coord, Coord) = (220, 121);
pub const SORT_BUTTON_SIZE: (Coord, Coord) = (90, 30);
pub const CHECKBOX_SIZE: (Coord, Coord) = (110, 20);
pub const CHECKBOX_SPACING: Coord = 10;

// =============================================================================
// ANIMATION
// =============================================================================

/// Pixels per tick a process travels toward its target
pub const PROCESS_ANIMATION_SPEED: Coord = 32;

/// Pixels per tick the auto-sort checkbox slides in
pub const AUTO_SORT_CHECKBOX_ANIMATION_SPEED: Coord = 30;

// =============================================================================
// CAPACITY
// =============================================================================

/// Two banks of ten number keys address at most 20 CPUs
pub const MAX_CPUS: usize = 20;

/// One terminated slot per forced termination, laid out in a single row
pub const MAX_USER_TERMINATIONS: usize = 20;

/// Recent events retained by the monitoring collector
pub const COLLECTOR_CAPACITY: usize = 1024;
