//! Camera system for 3D scene viewing.
//!
//! A transform-driven camera core generic over its projection, a
//! first-person perspective variant, and the GPU uniform layout.

/// Camera core: projection, transform and cached view-projection.
pub mod core;
/// First-person perspective camera.
pub mod fly;
/// Projection parameter sets.
pub mod projection;
/// GPU uniform layout.
pub mod uniform;

pub use self::core::{Camera, Viewport};
pub use fly::{Camera3D, BOOST_MULTIPLIER};
pub use projection::{Orthographic, Perspective, Projection};
pub use uniform::CameraUniform;
