//! Input handling: event types, held-key tracking, and the source trait the
//! fly camera reads each frame.

/// Platform-agnostic input events.
pub mod event;
/// Bindable movement actions.
pub mod keyboard;
/// Per-frame input source trait.
pub mod source;
/// Accumulates events between frames.
pub mod state;

pub use event::{InputEvent, Key};
pub use keyboard::MoveAction;
pub use source::InputSource;
pub use state::InputState;
