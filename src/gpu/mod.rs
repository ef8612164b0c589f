//! wgpu resources for feeding camera state to shaders.

/// Camera uniform buffer and bind group.
pub mod camera_binding;

pub use camera_binding::CameraBinding;
