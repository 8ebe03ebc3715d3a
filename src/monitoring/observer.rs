/*!
 * Process Observer
 * Injected notification sink for process lifecycle changes
 *
 * Notifications are fire-and-forget: an observer can neither veto nor fail
 * an admission or termination.
 */

use crate::core::types::Pid;
use log::{debug, info};

pub trait ProcessObserver: Send + Sync {
    /// A new process with `pid` was admitted
    fn on_process_created(&self, pid: Pid);

    /// `pid` left the alive roster
    fn on_process_terminated(&self, _pid: Pid, _by_user: bool) {}
}

/// Default observer: log only
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ProcessObserver for LogObserver {
    fn on_process_created(&self, pid: Pid) {
        info!("New process with PID {} created", pid);
    }

    fn on_process_terminated(&self, pid: Pid, by_user: bool) {
        debug!("Process PID {} terminated (by user: {})", pid, by_user);
    }
}
