/*!
 * Monitoring Module
 * Process lifecycle notifications and structured tracing setup
 */

pub mod collector;
pub mod events;
pub mod observer;
pub mod tracer;

pub use collector::Collector;
pub use events::{Event, Payload};
pub use observer::{LogObserver, ProcessObserver};
pub use tracer::init_tracing;
