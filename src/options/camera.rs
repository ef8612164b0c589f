use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::projection::Perspective;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub move_speed: f32,
    /// Look sensitivity in degrees per unit of mouse motion.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Speed multiplier while the boost key is held.
    #[schemars(title = "Boost Multiplier", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub boost_multiplier: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 70.0,
            znear: 0.1,
            zfar: 1000.0,
            move_speed: 10.0,
            mouse_sensitivity: 0.5,
            boost_multiplier: 10.0,
        }
    }
}

impl CameraOptions {
    /// Perspective parameters for a viewport with the given aspect ratio.
    #[must_use]
    pub fn perspective(&self, aspect: f32) -> Perspective {
        Perspective::new(self.fovy, aspect, self.znear, self.zfar)
    }
}
