/*!
 * Timed Power-ups
 * Sort button and auto-sort checkbox reveal and enablement
 */

use super::ProcessManager;
use crate::core::limits::AUTO_SORT_CHECKBOX_ANIMATION_SPEED;
use crate::scene::TickContext;
use log::info;

impl ProcessManager {
    pub(super) fn handle_timed_powerups(&mut self, ctx: &TickContext) {
        if ctx.uptime_ms >= self.config.time_ms_to_show_sort_button && !self.sort_button.visible {
            self.sort_button.visible = true;
            info!("Sort button unlocked at {}ms uptime", ctx.uptime_ms);
        }

        if ctx.uptime_ms >= self.config.time_ms_to_show_auto_sort_checkbox
            && !self.auto_sort_checkbox.visible
        {
            self.auto_sort_checkbox.visible = true;
            self.auto_sort_checkbox
                .slide_to(self.auto_sort_checkbox_final_x);
            info!("Auto-sort unlocked at {}ms uptime", ctx.uptime_ms);
        }

        self.sort_button.disabled = self.sort_in_progress
            || !self.sort_cooldown_elapsed(ctx.current_time)
            || self.auto_sort_enabled();

        self.auto_sort_checkbox
            .view
            .move_towards_target(AUTO_SORT_CHECKBOX_ANIMATION_SPEED);
    }
}
