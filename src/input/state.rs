use std::collections::HashSet;

use glam::Vec2;

use crate::input::event::{InputEvent, Key};
use crate::input::keyboard::MoveAction;
use crate::input::source::InputSource;
use crate::options::KeybindingOptions;

/// Accumulates input events between frames.
///
/// Mouse motion is summed until [`end_frame`](Self::end_frame); keys stay
/// held until released or focus is lost.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    mouse_delta: Vec2,
    held: HashSet<Key>,
    bindings: KeybindingOptions,
}

impl InputState {
    /// Create an empty state with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty state with custom key bindings.
    #[must_use]
    pub fn with_bindings(bindings: KeybindingOptions) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    /// Active key bindings.
    #[must_use]
    pub fn bindings(&self) -> &KeybindingOptions {
        &self.bindings
    }

    /// Replace the key bindings. Held keys are kept.
    pub fn set_bindings(&mut self, bindings: KeybindingOptions) {
        self.bindings = bindings;
    }

    /// Fold one event into the current frame.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::MouseMotion { dx, dy } => {
                self.mouse_delta += Vec2::new(*dx, *dy);
            }
            InputEvent::Key { key, pressed: true } => {
                let _ = self.held.insert(key.clone());
            }
            InputEvent::Key {
                key,
                pressed: false,
            } => {
                let _ = self.held.remove(key);
            }
            InputEvent::FocusLost => {
                self.held.clear();
                self.mouse_delta = Vec2::ZERO;
            }
        }
    }

    /// Whether `key` is currently held.
    #[must_use]
    pub fn is_key_down(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Reset per-frame accumulators. Call after the camera consumed input.
    pub fn end_frame(&mut self) {
        self.mouse_delta = Vec2::ZERO;
    }
}

impl InputSource for InputState {
    fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    fn is_action_active(&self, action: MoveAction) -> bool {
        self.bindings
            .key_for(action)
            .is_some_and(|key| self.is_key_down(key))
    }
}
