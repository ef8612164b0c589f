//! Uniform buffer and bind group mirroring a [`CameraUniform`].

use wgpu::util::DeviceExt;

use crate::camera::CameraUniform;

/// GPU-side camera state: one uniform buffer at binding 0, visible to the
/// vertex and fragment stages.
pub struct CameraBinding {
    /// Uniform buffer holding a [`CameraUniform`].
    pub buffer: wgpu::Buffer,
    /// Layout for the camera bind group.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group referencing `buffer`.
    pub bind_group: wgpu::BindGroup,
}

impl CameraBinding {
    /// Allocate the buffer and bind group, seeded with `uniform`.
    pub fn new(device: &wgpu::Device, uniform: &CameraUniform) -> Self {
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: uniform.as_bytes(),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("Camera Bind Group"),
        });

        Self {
            buffer,
            layout,
            bind_group,
        }
    }

    /// Upload a fresh uniform snapshot.
    pub fn update(&self, queue: &wgpu::Queue, uniform: &CameraUniform) {
        queue.write_buffer(&self.buffer, 0, uniform.as_bytes());
    }
}
