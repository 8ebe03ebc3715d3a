/*!
 * Stage Session
 * Tracks uptime and the terminal condition around a process manager
 */

use super::config::StageConfig;
use crate::core::errors::ConfigResult;
use crate::core::types::Timestamp;
use crate::manager::{ProcessManager, Stats};
use crate::scene::{GameEvent, SceneObject, TickContext};
use log::{info, warn};

#[derive(Debug)]
pub struct Stage {
    manager: ProcessManager,
    started_at: Option<Timestamp>,
    current_time: Timestamp,
    game_over: bool,
}

impl Stage {
    /// Validate `config` and build a manager with default collaborators
    pub fn new(config: StageConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_manager(ProcessManager::new(config)))
    }

    /// Wrap a manager built elsewhere, validating its configuration
    pub fn with_manager(manager: ProcessManager) -> ConfigResult<Self> {
        manager.config().validate()?;
        Ok(Self::from_manager(manager))
    }

    fn from_manager(manager: ProcessManager) -> Self {
        info!("Stage '{}' created", manager.config().name);
        Self {
            manager,
            started_at: None,
            current_time: 0,
            game_over: false,
        }
    }

    #[must_use]
    pub fn manager(&self) -> &ProcessManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut ProcessManager {
        &mut self.manager
    }

    #[must_use]
    pub fn config(&self) -> &StageConfig {
        self.manager.config()
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn current_time(&self) -> Timestamp {
        self.current_time
    }

    /// Time since the first tick
    #[must_use]
    pub fn uptime_ms(&self) -> Timestamp {
        self.started_at
            .map_or(0, |started| self.current_time.saturating_sub(started))
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        self.manager.current_stats()
    }
}

impl SceneObject for Stage {
    /// Only `ctx.current_time` is read; uptime and game over are the stage's own
    fn update(&mut self, ctx: &TickContext, events: &[GameEvent]) {
        self.current_time = ctx.current_time;
        self.started_at.get_or_insert(ctx.current_time);

        let manager_ctx = TickContext::at(self.current_time)
            .with_uptime(self.uptime_ms())
            .with_game_over(self.game_over);
        self.manager.update(&manager_ctx, events);

        if !self.game_over && self.manager.game_over_requested() {
            self.game_over = true;
            warn!(
                "Stage '{}' over after {}ms: a starving process could not be terminated",
                self.manager.config().name,
                self.uptime_ms()
            );
        }
    }
}
