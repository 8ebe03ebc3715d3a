/*!
 * Scene Module
 * Per-tick capability interface shared by every simulated entity
 */

pub mod events;
pub mod traits;
pub mod view;

pub use events::{GameEvent, KeyEvent};
pub use traits::{SceneObject, TickContext};
pub use view::View;
