use glam::{Mat4, Vec3};

use crate::camera::projection::Projection;
use crate::camera::uniform::CameraUniform;
use crate::error::CameraError;
use crate::transform::{Orientation, Transform};

/// Size of the surface a camera renders into, in physical pixels.
///
/// Both dimensions are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Viewport of `width` x `height` pixels; a zero dimension is rejected.
    pub fn new(width: u32, height: u32) -> Result<Self, CameraError> {
        if width == 0 || height == 0 {
            return Err(CameraError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in physical pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in physical pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width / height ratio.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Camera driven by a [`Transform`], generic over its projection.
///
/// The combined view-projection matrix is cached and only rebuilt when the
/// transform reports a change (or when no matrix has been built yet).
#[derive(Debug, Clone)]
pub struct Camera<P: Projection> {
    params: P,
    projection: Mat4,
    view_projection: Option<Mat4>,
    transform: Transform,
    viewport: Option<Viewport>,
}

impl<P: Projection> Camera<P> {
    /// Create a camera at the origin with the given projection parameters.
    #[must_use]
    pub fn with_projection(params: P) -> Self {
        Self::with_transform(params, Transform::new())
    }

    /// Create a camera that starts from an existing transform.
    #[must_use]
    pub fn with_transform(params: P, transform: Transform) -> Self {
        let projection = params.matrix();
        Self {
            params,
            projection,
            view_projection: None,
            transform,
            viewport: None,
        }
    }

    /// Projection parameters.
    #[must_use]
    pub fn projection(&self) -> &P {
        &self.params
    }

    /// Projection matrix built from the current parameters.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Last view-projection matrix built, without triggering a rebuild.
    #[must_use]
    pub fn cached_view_projection(&self) -> Option<Mat4> {
        self.view_projection
    }

    /// Viewport recorded by the last successful [`adjust_to_viewport`].
    ///
    /// [`adjust_to_viewport`]: Self::adjust_to_viewport
    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// The camera's transform.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable access to the transform.
    ///
    /// Drops the cached view-projection, since the borrow may replace the
    /// transform wholesale and bypass its changed flag.
    pub fn transform_mut(&mut self) -> &mut Transform {
        self.view_projection = None;
        &mut self.transform
    }

    /// Replace the transform; the next request rebuilds the view-projection.
    pub fn set_transform(&mut self, transform: Transform) {
        self.view_projection = None;
        self.transform = transform;
    }

    /// Mutable access that keeps the cache; only the transform's setters may
    /// be used so the changed flag stays authoritative.
    pub(super) fn tracked_transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Combined view-projection matrix reflecting the latest transform.
    pub fn view_projection(&mut self) -> Mat4 {
        if let Some(vp) = self.view_projection {
            if !self.transform.has_changed() {
                return vp;
            }
        }
        self.calculate_view_matrix()
    }

    /// Rebuild and cache `projection * conj(rotation) * translation(-pos)`.
    ///
    /// Clears the transform's changed flag.
    pub fn calculate_view_matrix(&mut self) -> Mat4 {
        let vp = self.projection * self.view_matrix();
        self.view_projection = Some(vp);
        self.transform.mark_clean();
        vp
    }

    /// World-to-view matrix without projection.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let rotation =
            Mat4::from_quat(self.transform.transformed_rot().conjugate());
        rotation * self.translation_matrix()
    }

    /// Translation that moves the camera's world position to the origin.
    #[must_use]
    pub fn translation_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.transform.transformed_pos())
    }

    /// Rebuild the projection matrix from the current parameters.
    ///
    /// The cached view-projection is left untouched; callers follow up with
    /// [`calculate_view_matrix`](Self::calculate_view_matrix).
    pub fn calculate_projection_matrix(&mut self) -> Mat4 {
        self.projection = self.params.matrix();
        self.projection
    }

    /// Track a new viewport size: updates the aspect ratio, the projection
    /// matrix and the cached view-projection.
    ///
    /// A zero-sized viewport (e.g. a minimized window) is rejected and leaves
    /// the camera untouched.
    pub fn adjust_to_viewport(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<(), CameraError> {
        let viewport = Viewport::new(width, height)?;
        self.params.set_aspect(viewport.aspect());
        let _ = self.calculate_projection_matrix();
        let _ = self.calculate_view_matrix();
        self.viewport = Some(viewport);
        log::debug!(
            "camera viewport {width}x{height}, aspect {:.3}",
            self.params.aspect()
        );
        Ok(())
    }

    /// World-space viewing direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.transform.transformed_rot().forward()
    }

    /// Snapshot for a GPU uniform buffer.
    pub fn uniform(&mut self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            position: self.transform.transformed_pos().to_array(),
            aspect: self.params.aspect(),
            forward: self.forward().to_array(),
            fovy: self.params.fovy().unwrap_or(0.0),
        }
    }
}
