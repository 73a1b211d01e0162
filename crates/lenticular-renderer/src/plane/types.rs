//! Plane vertex type and buffer layout.

/// One vertex of a slice plane.
///
/// Layout: position(vec3) + uv(vec2) = 20 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl PlaneVertex {
    /// wgpu vertex buffer layout for `PlaneVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PlaneVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // uv: vec2<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_vertex_size_is_20_bytes() {
        assert_eq!(std::mem::size_of::<PlaneVertex>(), 20);
        assert_eq!(PlaneVertex::LAYOUT.array_stride, 20);
    }

    #[test]
    fn bytemuck_cast_works() {
        let v = PlaneVertex {
            position: [0.5, -0.5, 0.0],
            uv: [1.0, 0.0],
        };
        assert_eq!(bytemuck::bytes_of(&v).len(), 20);
    }
}
