//! Projection parameter sets and the trait the camera core is generic over.

use glam::Mat4;

use crate::error::CameraError;

/// Parameters that produce a projection matrix.
///
/// Implementations look down local +Z (left-handed) and emit a `[0, 1]`
/// depth range, matching wgpu/Vulkan clip space.
pub trait Projection {
    /// Build the projection matrix from the current parameters.
    fn matrix(&self) -> Mat4;

    /// Width / height ratio of the view volume.
    fn aspect(&self) -> f32;

    /// Replace the width / height ratio.
    fn set_aspect(&mut self, aspect: f32);

    /// Vertical field of view in degrees, for projections that have one.
    fn fovy(&self) -> Option<f32> {
        None
    }

    /// Check that the parameters yield a finite, invertible matrix.
    fn validate(&self) -> Result<(), CameraError> {
        Ok(())
    }
}

fn check_depth_range(znear: f32, zfar: f32) -> Result<(), CameraError> {
    if !(znear.is_finite() && zfar.is_finite()) || znear <= 0.0 || zfar <= znear
    {
        return Err(CameraError::InvalidProjection(format!(
            "depth range must satisfy 0 < znear < zfar (got {znear}..{zfar})"
        )));
    }
    Ok(())
}

fn check_aspect(aspect: f32) -> Result<(), CameraError> {
    if !aspect.is_finite() || aspect <= 0.0 {
        return Err(CameraError::InvalidProjection(format!(
            "aspect ratio must be positive (got {aspect})"
        )));
    }
    Ok(())
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Perspective {
    /// Bundle perspective parameters.
    #[must_use]
    pub fn new(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            fovy,
            aspect,
            znear,
            zfar,
        }
    }
}

impl Projection for Perspective {
    fn matrix(&self) -> Mat4 {
        Mat4::perspective_lh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    fn aspect(&self) -> f32 {
        self.aspect
    }

    fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    fn fovy(&self) -> Option<f32> {
        Some(self.fovy)
    }

    fn validate(&self) -> Result<(), CameraError> {
        if !(self.fovy > 0.0 && self.fovy < 180.0) {
            return Err(CameraError::InvalidProjection(format!(
                "field of view must lie in (0, 180) degrees (got {})",
                self.fovy
            )));
        }
        check_aspect(self.aspect)?;
        check_depth_range(self.znear, self.zfar)
    }
}

/// Orthographic projection parameters.
///
/// The view volume spans `±half_height` vertically and
/// `±half_height * aspect` horizontally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orthographic {
    /// Half the vertical extent of the view volume in world units.
    pub half_height: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Orthographic {
    /// Bundle orthographic parameters.
    #[must_use]
    pub fn new(half_height: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            half_height,
            aspect,
            znear,
            zfar,
        }
    }
}

impl Projection for Orthographic {
    fn matrix(&self) -> Mat4 {
        let half_width = self.half_height * self.aspect;
        Mat4::orthographic_lh(
            -half_width,
            half_width,
            -self.half_height,
            self.half_height,
            self.znear,
            self.zfar,
        )
    }

    fn aspect(&self) -> f32 {
        self.aspect
    }

    fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    fn validate(&self) -> Result<(), CameraError> {
        if !self.half_height.is_finite() || self.half_height <= 0.0 {
            return Err(CameraError::InvalidProjection(format!(
                "orthographic half height must be positive (got {})",
                self.half_height
            )));
        }
        check_aspect(self.aspect)?;
        check_depth_range(self.znear, self.zfar)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let p = Perspective::new(70.0, 16.0 / 9.0, 0.1, 100.0);
        let m = p.matrix();

        let near = m * Vec3::new(0.0, 0.0, 0.1).extend(1.0);
        let far = m * Vec3::new(0.0, 0.0, 100.0).extend(1.0);
        assert!((near.z / near.w).abs() < 1e-5);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn perspective_scales_x_by_aspect() {
        let square = Perspective::new(90.0, 1.0, 0.1, 10.0).matrix();
        let wide = Perspective::new(90.0, 2.0, 0.1, 10.0).matrix();
        assert!((square.x_axis.x - 1.0).abs() < 1e-5);
        assert!((wide.x_axis.x - 0.5).abs() < 1e-5);
        assert_eq!(square.y_axis.y, wide.y_axis.y);
    }

    #[test]
    fn orthographic_edges_hit_clip_bounds() {
        let o = Orthographic::new(5.0, 2.0, 0.1, 50.0);
        let corner = o.matrix() * Vec3::new(10.0, 5.0, 0.1).extend(1.0);
        let ndc = corner.truncate() / corner.w;
        assert!((ndc - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn only_perspective_reports_fovy() {
        assert_eq!(Perspective::new(55.0, 1.0, 0.1, 10.0).fovy(), Some(55.0));
        assert_eq!(Orthographic::new(1.0, 1.0, 0.1, 10.0).fovy(), None);
    }

    #[test]
    fn validation_rejects_bad_parameters() {
        assert!(Perspective::new(70.0, 1.5, 0.1, 100.0).validate().is_ok());
        assert!(Perspective::new(0.0, 1.5, 0.1, 100.0).validate().is_err());
        assert!(Perspective::new(70.0, 0.0, 0.1, 100.0).validate().is_err());
        assert!(Perspective::new(70.0, 1.5, 0.0, 100.0).validate().is_err());
        assert!(Perspective::new(70.0, 1.5, 10.0, 1.0).validate().is_err());
        assert!(Orthographic::new(-1.0, 1.0, 0.1, 10.0).validate().is_err());
        assert!(Orthographic::new(1.0, f32::NAN, 0.1, 10.0)
            .validate()
            .is_err());
    }
}
