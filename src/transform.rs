//! Position and orientation state driven by the camera's owner.
//!
//! A [`Transform`] records whether it has changed since the last time a
//! consumer (usually [`Camera`](crate::camera::Camera)) derived matrices from
//! it. Setters only raise the flag when the stored value actually differs, so
//! a frame with no input leaves cached matrices valid.

use glam::{Mat4, Quat, Vec3};

/// Local axis helpers for an orientation quaternion.
///
/// The camera looks down local +Z with +Y up and +X to the right.
pub trait Orientation {
    /// Local +Z in world space.
    fn forward(&self) -> Vec3;
    /// Local -Z in world space.
    fn back(&self) -> Vec3;
    /// Local +Y in world space.
    fn up(&self) -> Vec3;
    /// Local -Y in world space.
    fn down(&self) -> Vec3;
    /// Local +X in world space.
    fn right(&self) -> Vec3;
    /// Local -X in world space.
    fn left(&self) -> Vec3;
}

impl Orientation for Quat {
    #[inline]
    fn forward(&self) -> Vec3 {
        *self * Vec3::Z
    }

    #[inline]
    fn back(&self) -> Vec3 {
        *self * Vec3::NEG_Z
    }

    #[inline]
    fn up(&self) -> Vec3 {
        *self * Vec3::Y
    }

    #[inline]
    fn down(&self) -> Vec3 {
        *self * Vec3::NEG_Y
    }

    #[inline]
    fn right(&self) -> Vec3 {
        *self * Vec3::X
    }

    #[inline]
    fn left(&self) -> Vec3 {
        *self * Vec3::NEG_X
    }
}

/// Frame a transform is expressed in, e.g. a vehicle the camera rides in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentFrame {
    /// Parent local-to-world matrix.
    pub matrix: Mat4,
    /// Rotation component of `matrix`.
    pub rotation: Quat,
}

impl ParentFrame {
    /// Build a rigid parent frame from a rotation and translation.
    #[must_use]
    pub fn from_rotation_translation(rotation: Quat, translation: Vec3) -> Self {
        Self {
            matrix: Mat4::from_rotation_translation(rotation, translation),
            rotation,
        }
    }
}

/// Position, rotation and scale with a changed flag.
///
/// Equality compares the pose (position, rotation, scale and parent) and
/// ignores the changed flag.
#[derive(Debug, Clone)]
pub struct Transform {
    pos: Vec3,
    rot: Quat,
    scale: Vec3,
    parent: Option<ParentFrame>,
    changed: bool,
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
            && self.rot == other.rot
            && self.scale == other.scale
            && self.parent == other.parent
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity transform at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pos: Vec3::ZERO,
            rot: Quat::IDENTITY,
            scale: Vec3::ONE,
            parent: None,
            changed: false,
        }
    }

    /// Identity transform placed at `pos`.
    #[must_use]
    pub fn from_position(pos: Vec3) -> Self {
        Self {
            pos,
            ..Self::new()
        }
    }

    /// Local position.
    #[must_use]
    pub fn pos(&self) -> Vec3 {
        self.pos
    }

    /// Local rotation.
    #[must_use]
    pub fn rot(&self) -> Quat {
        self.rot
    }

    /// Local scale.
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Parent frame, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&ParentFrame> {
        self.parent.as_ref()
    }

    /// Move to `pos`.
    pub fn set_pos(&mut self, pos: Vec3) {
        if pos != self.pos {
            self.pos = pos;
            self.changed = true;
        }
    }

    /// Offset the position by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        self.set_pos(self.pos + delta);
    }

    /// Replace the rotation. The quaternion is normalized on store.
    pub fn set_rot(&mut self, rot: Quat) {
        let rot = rot.normalize();
        if rot != self.rot {
            self.rot = rot;
            self.changed = true;
        }
    }

    /// Rotate by `angle` radians about the world-space `axis`.
    ///
    /// The new rotation is applied on top of the current one
    /// (`rot = q(axis, angle) * rot`).
    pub fn rotate(&mut self, axis: Vec3, angle: f32) {
        if angle == 0.0 {
            return;
        }
        let axis = axis.normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }
        self.set_rot(Quat::from_axis_angle(axis, angle) * self.rot);
    }

    /// Replace the scale.
    pub fn set_scale(&mut self, scale: Vec3) {
        if scale != self.scale {
            self.scale = scale;
            self.changed = true;
        }
    }

    /// Attach to (or detach from) a parent frame.
    pub fn set_parent(&mut self, parent: Option<ParentFrame>) {
        if parent != self.parent {
            self.parent = parent;
            self.changed = true;
        }
    }

    /// Position in world space (parent frame applied).
    #[must_use]
    pub fn transformed_pos(&self) -> Vec3 {
        self.parent
            .map_or(self.pos, |p| p.matrix.transform_point3(self.pos))
    }

    /// Rotation in world space (parent rotation applied).
    #[must_use]
    pub fn transformed_rot(&self) -> Quat {
        self.parent.map_or(self.rot, |p| p.rotation * self.rot)
    }

    /// Local-to-world matrix including scale and parent frame.
    #[must_use]
    pub fn transformation(&self) -> Mat4 {
        let local =
            Mat4::from_scale_rotation_translation(self.scale, self.rot, self.pos);
        self.parent.map_or(local, |p| p.matrix * local)
    }

    /// Whether any component changed since the last [`mark_clean`].
    ///
    /// [`mark_clean`]: Self::mark_clean
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Clear the changed flag once derived state has been rebuilt.
    pub fn mark_clean(&mut self) {
        self.changed = false;
    }
}
