use glam::Vec2;

use crate::input::keyboard::MoveAction;

/// Per-frame view of mouse and keyboard state.
///
/// [`InputState`](crate::input::InputState) is the stock implementation;
/// engines with their own input layer implement this directly.
pub trait InputSource {
    /// Mouse motion accumulated since the previous frame.
    ///
    /// Positive `x` is rightward, positive `y` is upward.
    fn mouse_delta(&self) -> Vec2;

    /// Whether the key bound to `action` is currently held.
    fn is_action_active(&self, action: MoveAction) -> bool;
}
