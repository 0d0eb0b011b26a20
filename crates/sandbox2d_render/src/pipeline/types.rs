//! GPU-compatible data types for the shape pipeline
//!
//! These match the layouts in `shape.wgsl`.

use bytemuck::{Pod, Zeroable};

/// A pixel-space vertex with colour
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in pixels (origin top-left, Y down)
    pub position: [f32; 2],
    /// RGBA colour in 0..=1
    pub color: [f32; 4],
}

impl Vertex2D {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// Vertex buffer layout matching `VertexInput` in the shader
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex2D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 8,
                    shader_location: 1,
                },
            ],
        }
    }
}

/// Screen size for the pixel to clip-space transform
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ScreenUniforms {
    pub size: [f32; 2],
    pub _padding: [f32; 2],
}

impl ScreenUniforms {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: [width.max(1) as f32, height.max(1) as f32],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ScreenUniforms {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_size() {
        assert_eq!(std::mem::size_of::<Vertex2D>(), 24);
    }

    #[test]
    fn test_vertex_layout_stride() {
        assert_eq!(Vertex2D::desc().array_stride, 24);
    }

    #[test]
    fn test_screen_uniforms_size() {
        // Uniform buffers need 16-byte alignment
        assert_eq!(std::mem::size_of::<ScreenUniforms>(), 16);
    }

    #[test]
    fn test_screen_uniforms_never_zero() {
        let uniforms = ScreenUniforms::new(0, 0);
        assert_eq!(uniforms.size, [1.0, 1.0]);
    }
}
