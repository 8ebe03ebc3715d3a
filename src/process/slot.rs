/*!
 * Process Slot
 * Fixed placement cell holding at most one process reference
 */

use crate::core::limits::{PROCESS_SLOT_HEIGHT, PROCESS_SLOT_WIDTH};
use crate::core::types::{Coord, Pid};
use crate::scene::View;

/// Slots never own processes; the orchestrator's process table does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSlot {
    pub view: View,
    pub process: Option<Pid>,
}

impl ProcessSlot {
    #[must_use]
    pub fn at(x: Coord, y: Coord) -> Self {
        let mut view = View::new(PROCESS_SLOT_WIDTH, PROCESS_SLOT_HEIGHT);
        view.set_xy(x, y);
        Self {
            view,
            process: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.process.is_none()
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> (Coord, Coord) {
        (self.view.x, self.view.y)
    }
}
