use serde::{Deserialize, Serialize};

/// Camera movement actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// boost = "ShiftLeft"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveAction {
    /// Translate along the camera's forward axis.
    MoveForward,
    /// Translate against the camera's forward axis.
    MoveBack,
    /// Translate along the camera's left axis.
    StrafeLeft,
    /// Translate along the camera's right axis.
    StrafeRight,
    /// Multiply movement speed while held.
    Boost,
}

impl MoveAction {
    /// Every bindable action.
    pub const ALL: [Self; 5] = [
        Self::MoveForward,
        Self::MoveBack,
        Self::StrafeLeft,
        Self::StrafeRight,
        Self::Boost,
    ];
}
