//! First-person perspective camera.
//!
//! Mouse motion yaws about world up and pitches about the camera's right
//! axis; movement keys translate along the camera's local axes.

use glam::Vec3;

use crate::camera::core::Camera;
use crate::camera::projection::{Perspective, Projection};
use crate::error::CameraError;
use crate::input::{InputSource, MoveAction};
use crate::options::CameraOptions;
use crate::transform::Orientation;

/// Speed multiplier applied while [`MoveAction::Boost`] is held.
pub const BOOST_MULTIPLIER: f32 = 10.0;

/// Perspective camera with first-person fly controls.
pub type Camera3D = Camera<Perspective>;

impl Camera<Perspective> {
    /// Create a perspective camera at the origin looking down +Z.
    ///
    /// `fovy` is the vertical field of view in degrees.
    #[must_use]
    pub fn new(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self::with_projection(Perspective::new(fovy, aspect, znear, zfar))
    }

    /// Create a perspective camera from options, validating the projection.
    pub fn from_options(
        options: &CameraOptions,
        aspect: f32,
    ) -> Result<Self, CameraError> {
        let params = options.perspective(aspect);
        params.validate()?;
        Ok(Self::with_projection(params))
    }

    /// Apply one frame of mouse-look and movement.
    ///
    /// `dt` is the frame time in seconds, `speed` the movement speed in world
    /// units per second and `sens` the look sensitivity in degrees per unit
    /// of mouse motion.
    pub fn process_input(
        &mut self,
        dt: f32,
        speed: f32,
        sens: f32,
        input: &impl InputSource,
    ) {
        self.apply_input(dt, speed, sens, BOOST_MULTIPLIER, input);
    }

    /// [`process_input`](Self::process_input) with speed, sensitivity and
    /// boost taken from `options`.
    pub fn fly(
        &mut self,
        dt: f32,
        input: &impl InputSource,
        options: &CameraOptions,
    ) {
        self.apply_input(
            dt,
            options.move_speed,
            options.mouse_sensitivity,
            options.boost_multiplier,
            input,
        );
    }

    fn apply_input(
        &mut self,
        dt: f32,
        mut speed: f32,
        sens: f32,
        boost: f32,
        input: &impl InputSource,
    ) {
        let delta = input.mouse_delta();
        let transform = self.tracked_transform_mut();
        transform.rotate(Vec3::Y, (delta.x * sens).to_radians());
        let right = transform.rot().right();
        transform.rotate(right, -(delta.y * sens).to_radians());

        if input.is_action_active(MoveAction::Boost) {
            speed *= boost;
        }
        let amount = speed * dt;

        let rot = transform.rot();
        let mut offset = Vec3::ZERO;
        if input.is_action_active(MoveAction::MoveForward) {
            offset += rot.forward() * amount;
        }
        if input.is_action_active(MoveAction::MoveBack) {
            offset -= rot.forward() * amount;
        }
        if input.is_action_active(MoveAction::StrafeLeft) {
            offset += rot.left() * amount;
        }
        if input.is_action_active(MoveAction::StrafeRight) {
            offset += rot.right() * amount;
        }
        transform.translate(offset);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use glam::Vec2;

    use super::*;

    #[derive(Default)]
    struct Scripted {
        delta: Vec2,
        active: HashSet<MoveAction>,
    }

    impl Scripted {
        fn holding(actions: &[MoveAction]) -> Self {
            Self {
                delta: Vec2::ZERO,
                active: actions.iter().copied().collect(),
            }
        }
    }

    impl InputSource for Scripted {
        fn mouse_delta(&self) -> Vec2 {
            self.delta
        }

        fn is_action_active(&self, action: MoveAction) -> bool {
            self.active.contains(&action)
        }
    }

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    fn camera() -> Camera3D {
        Camera3D::new(70.0, 16.0 / 9.0, 0.1, 1000.0)
    }

    #[test]
    fn forward_moves_speed_times_dt() {
        let mut cam = camera();
        cam.process_input(
            0.5,
            4.0,
            1.0,
            &Scripted::holding(&[MoveAction::MoveForward]),
        );
        assert!(approx(cam.transform().pos(), Vec3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut cam = camera();
        cam.process_input(
            1.0,
            3.0,
            1.0,
            &Scripted::holding(&[
                MoveAction::MoveForward,
                MoveAction::MoveBack,
                MoveAction::StrafeLeft,
                MoveAction::StrafeRight,
            ]),
        );
        assert!(approx(cam.transform().pos(), Vec3::ZERO));
    }

    #[test]
    fn strafing_follows_local_axes() {
        let mut cam = camera();
        cam.process_input(
            1.0,
            2.0,
            1.0,
            &Scripted::holding(&[MoveAction::StrafeLeft]),
        );
        assert!(approx(cam.transform().pos(), Vec3::new(-2.0, 0.0, 0.0)));

        cam.process_input(
            1.0,
            2.0,
            1.0,
            &Scripted::holding(&[MoveAction::StrafeRight]),
        );
        assert!(approx(cam.transform().pos(), Vec3::ZERO));
    }

    #[test]
    fn boost_multiplies_speed_by_ten() {
        let mut cam = camera();
        cam.process_input(
            0.1,
            1.0,
            1.0,
            &Scripted::holding(&[MoveAction::MoveForward, MoveAction::Boost]),
        );
        assert!(approx(cam.transform().pos(), Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn mouse_x_yaws_toward_the_right() {
        let mut cam = camera();
        let input = Scripted {
            delta: Vec2::new(90.0, 0.0),
            ..Scripted::default()
        };
        cam.process_input(0.016, 1.0, 1.0, &input);
        let rot = cam.transform().rot();
        assert!(approx(rot.forward(), Vec3::X));
        assert!(approx(rot.up(), Vec3::Y));
    }

    #[test]
    fn mouse_y_pitches_up() {
        let mut cam = camera();
        let input = Scripted {
            delta: Vec2::new(0.0, 30.0),
            ..Scripted::default()
        };
        cam.process_input(0.016, 1.0, 1.0, &input);
        let forward = cam.transform().rot().forward();
        assert!(forward.y > 0.0);
        assert!((forward.y - 30.0_f32.to_radians().sin()).abs() < 1e-5);
        assert!(approx(cam.transform().rot().right(), Vec3::X));
    }

    #[test]
    fn movement_uses_rotation_after_look() {
        let mut cam = camera();
        let mut input = Scripted::holding(&[MoveAction::MoveForward]);
        input.delta = Vec2::new(-90.0, 0.0);
        cam.process_input(1.0, 5.0, 1.0, &input);
        assert!(approx(cam.transform().pos(), Vec3::new(-5.0, 0.0, 0.0)));
    }

    #[test]
    fn idle_frame_keeps_cached_view_projection() {
        let mut cam = camera();
        let vp = cam.view_projection();
        cam.process_input(0.016, 10.0, 0.5, &Scripted::default());
        assert!(!cam.transform().has_changed());
        assert_eq!(cam.cached_view_projection(), Some(vp));
        assert_eq!(cam.view_projection(), vp);
    }

    #[test]
    fn fly_uses_option_values() {
        let options = CameraOptions {
            move_speed: 2.0,
            boost_multiplier: 3.0,
            ..CameraOptions::default()
        };
        let mut cam = Camera3D::from_options(&options, 1.5).unwrap();
        cam.fly(
            1.0,
            &Scripted::holding(&[MoveAction::MoveForward, MoveAction::Boost]),
            &options,
        );
        assert!(approx(cam.transform().pos(), Vec3::new(0.0, 0.0, 6.0)));
    }

    #[test]
    fn from_options_rejects_invalid_projection() {
        let options = CameraOptions {
            znear: 0.0,
            ..CameraOptions::default()
        };
        assert!(matches!(
            Camera3D::from_options(&options, 1.0),
            Err(CameraError::InvalidProjection(_))
        ));
    }
}
