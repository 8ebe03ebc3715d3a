/*!
 * Stage Module
 * Configuration and the running session that owns the process manager
 */

pub mod config;
pub mod session;

pub use config::StageConfig;
pub use session::Stage;
