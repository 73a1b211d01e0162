//! Uniform blocks read by the generated lenticular shader.
//!
//! `LenticularUniforms` is the mutable parameter storage the shader graph
//! closes over. Parameter edits write into it in place; nothing is rebuilt.

use crate::layout::matrix::{self, Mat4};
use crate::shader_graph::{LenticularParameters, UniformSlot};

/// GPU-side uniform buffer matching the WGSL `LenticularUniforms` struct.
///
/// Layout: 4 × f32 = 16 bytes, 16-byte aligned (wgpu requirement).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LenticularUniforms {
    /// Strip pairs per unit of U. Stored as f32 because the shader multiplies by it.
    pub divisions: f32,
    /// Peak ridge displacement.
    pub ridge_height: f32,
    /// Mask-to-ramp blend, 0.0..=1.0.
    pub edge_smoothness: f32,
    /// Padding to reach 16 bytes.
    pub _padding: f32,
}

impl LenticularUniforms {
    pub fn from_params(params: &LenticularParameters) -> Self {
        Self {
            divisions: params.divisions as f32,
            ridge_height: params.ridge_height,
            edge_smoothness: params.edge_smoothness,
            _padding: 0.0,
        }
    }

    /// Overwrite every slot from `params`.
    pub fn write_params(&mut self, params: &LenticularParameters) {
        self.divisions = params.divisions as f32;
        self.ridge_height = params.ridge_height;
        self.edge_smoothness = params.edge_smoothness;
    }

    pub fn get(&self, slot: UniformSlot) -> f32 {
        match slot {
            UniformSlot::Divisions => self.divisions,
            UniformSlot::RidgeHeight => self.ridge_height,
            UniformSlot::EdgeSmoothness => self.edge_smoothness,
        }
    }
}

/// Per-slice transform block.
///
/// Layout: 2 × mat4x4<f32> = 128 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SliceUniforms {
    /// Model-View-Projection matrix (column-major).
    pub mvp: [f32; 16],
    /// Model matrix.
    pub model: [f32; 16],
}

impl SliceUniforms {
    /// Combine a host-supplied view-projection with a slice model matrix.
    pub fn new(view_proj: &Mat4, model: &Mat4) -> Self {
        Self {
            mvp: matrix::mul(view_proj, model),
            model: *model,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
