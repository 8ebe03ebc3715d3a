/*!
 * Process Module
 * Process entity, creation and slot placement
 */

pub mod factory;
pub mod slot;
pub mod types;

// Re-export for convenience
pub use factory::{ProcessFactory, RandomProcessFactory};
pub use slot::ProcessSlot;
pub use types::{Process, ProcessEvent, ProcessProfile, ProcessState};
