/*!
 * Scene Traits
 * Setup/update abstraction implemented by the orchestrator and its children
 */

use super::events::GameEvent;
use crate::core::types::Timestamp;

/// Read-only view of the owning stage for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickContext {
    /// Current simulation time
    pub current_time: Timestamp,
    /// Time since the stage started running
    pub uptime_ms: Timestamp,
    /// Stage reached its terminal condition
    pub game_over: bool,
}

impl TickContext {
    #[inline]
    #[must_use]
    pub const fn at(current_time: Timestamp) -> Self {
        Self {
            current_time,
            uptime_ms: current_time,
            game_over: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_uptime(mut self, uptime_ms: Timestamp) -> Self {
        self.uptime_ms = uptime_ms;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_game_over(mut self, game_over: bool) -> Self {
        self.game_over = game_over;
        self
    }
}

/// Entity driven once per tick by its owner
///
/// A tick runs to completion before the next begins; implementations must not
/// block or defer work across ticks except through their own state.
pub trait SceneObject {
    /// One-time initialization after construction
    fn setup(&mut self) {}

    /// Advance by one tick
    fn update(&mut self, ctx: &TickContext, events: &[GameEvent]);
}
