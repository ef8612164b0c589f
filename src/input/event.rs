use std::borrow::Borrow;
use std::fmt;

/// Physical key identifier.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"ShiftLeft"`, `"Escape"`, etc.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(String);

impl Key {
    /// Wrap a key string.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The key string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Key {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::KeyCode> for Key {
    fn from(code: winit::keyboard::KeyCode) -> Self {
        Self(format!("{code:?}"))
    }
}

/// Platform-agnostic input events.
///
/// These are fed into an [`InputState`](super::InputState), which the fly
/// camera reads once per frame.
///
/// # Example
///
/// ```ignore
/// input.handle_event(&InputEvent::MouseMotion { dx: 4.0, dy: -1.0 });
/// input.handle_event(&InputEvent::Key { key: "KeyW".into(), pressed: true });
/// camera.fly(dt, &input, &options.camera);
/// input.end_frame();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Raw (unaccelerated) mouse motion.
    MouseMotion {
        /// Horizontal motion, positive = right.
        dx: f32,
        /// Vertical motion, positive = up.
        dy: f32,
    },
    /// Key pressed or released.
    Key {
        /// Which key changed.
        key: Key,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The window lost keyboard focus; release events may never arrive.
    FocusLost,
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert raw device motion. Winit reports `y` growing downward, so it
    /// is flipped here.
    #[must_use]
    pub fn from_device_event(event: &winit::event::DeviceEvent) -> Option<Self> {
        match event {
            winit::event::DeviceEvent::MouseMotion { delta: (dx, dy) } => {
                Some(Self::MouseMotion {
                    dx: *dx as f32,
                    dy: -(*dy as f32),
                })
            }
            _ => None,
        }
    }

    /// Convert keyboard and focus window events.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(Self::Key {
                    key: Key::from(code),
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }
}

#[cfg(all(test, feature = "viewer"))]
mod tests {
    use super::*;

    #[test]
    fn winit_key_codes_use_debug_names() {
        assert_eq!(Key::from(winit::keyboard::KeyCode::KeyW).as_str(), "KeyW");
        assert_eq!(
            Key::from(winit::keyboard::KeyCode::ShiftLeft).as_str(),
            "ShiftLeft"
        );
    }

    #[test]
    fn device_motion_flips_y() {
        let event = winit::event::DeviceEvent::MouseMotion {
            delta: (3.0, 2.0),
        };
        assert_eq!(
            InputEvent::from_device_event(&event),
            Some(InputEvent::MouseMotion { dx: 3.0, dy: -2.0 })
        );
    }
}
