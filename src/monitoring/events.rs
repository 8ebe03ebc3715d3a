/*!
 * Event System
 * Serializable records of process lifecycle notifications
 */

use crate::core::types::Pid;
use serde::{Deserialize, Serialize};

/// Unified event type recorded by the collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Monotonic sequence number assigned by the collector
    pub seq: u64,
    pub pid: Pid,
    pub payload: Payload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    ProcessCreated,
    ProcessTerminated { by_user: bool },
}
