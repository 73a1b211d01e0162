//! Pure slice geometry: ring positions, billboard yaw, parallax tilt.

use std::f32::consts::TAU;

use lenticular_common::Vec3;
use lenticular_config::schema::ParallaxConfig;

use super::matrix::{self, Mat4};

/// Pointer-driven tilt applied on top of the billboard yaw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxTuning {
    /// Radians of yaw per unit of clamped pointer X.
    pub tilt_gain: f32,
    /// Symmetric clamp applied to the normalized pointer X before scaling.
    pub pointer_clamp: f32,
}

impl ParallaxTuning {
    pub fn from_config(config: &ParallaxConfig) -> Self {
        Self {
            tilt_gain: config.tilt_gain as f32,
            pointer_clamp: config.pointer_clamp as f32,
        }
    }

    /// Yaw offset for a normalized pointer X. Non-finite input yields no tilt.
    pub fn tilt(&self, pointer_x: f32) -> f32 {
        if !pointer_x.is_finite() {
            return 0.0;
        }
        let limit = self.pointer_clamp.abs();
        -pointer_x.clamp(-limit, limit) * self.tilt_gain
    }
}

impl Default for ParallaxTuning {
    fn default() -> Self {
        Self {
            tilt_gain: 2.0,
            pointer_clamp: 0.02,
        }
    }
}

/// Position of slice `index` of `count` on a ring of `radius`, in the
/// carousel group's local frame.
pub fn slice_position(index: usize, count: usize, radius: f32) -> Vec3 {
    let angle = TAU * index as f32 / count as f32;
    [angle.sin() * radius, 0.0, angle.cos() * radius]
}

/// Evenly spaced ring positions. Empty for `count == 0`.
pub fn slice_positions(count: usize, radius: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| slice_position(i, count, radius))
        .collect()
}

/// Rotate `p` about the Y axis by `angle`, matching [`matrix::rotate_y`].
pub fn rotate_about_y(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    [c * p[0] + s * p[2], p[1], -s * p[0] + c * p[2]]
}

/// Local yaw that makes a slice at `slice_world` face `camera` while its
/// parent group is rotated by `group_rotation`, plus the parallax tilt.
pub fn billboard_yaw(
    slice_world: Vec3,
    camera: Vec3,
    group_rotation: f32,
    pointer_x: f32,
    parallax: &ParallaxTuning,
) -> f32 {
    let dx = camera[0] - slice_world[0];
    let dz = camera[2] - slice_world[2];
    // atan2 is scale invariant, so the direction need not be normalized.
    dx.atan2(dz) - group_rotation + parallax.tilt(pointer_x)
}

/// Everything the host needs to place one slice this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceTransform {
    pub index: usize,
    /// Position inside the carousel group.
    pub local_position: Vec3,
    /// Position after the group rotation.
    pub world_position: Vec3,
    /// Local yaw relative to the group.
    pub yaw: f32,
}

impl SliceTransform {
    /// World model matrix: group rotation, then ring offset, then local yaw.
    pub fn model_matrix(&self, group_rotation: f32) -> Mat4 {
        let [x, y, z] = self.local_position;
        let local = matrix::mul(&matrix::translate(x, y, z), &matrix::rotate_y(self.yaw));
        matrix::mul(&matrix::rotate_y(group_rotation), &local)
    }
}

/// Lay out `count` slices for the current group rotation, camera and pointer.
pub fn layout_slices(
    count: usize,
    radius: f32,
    group_rotation: f32,
    camera: Vec3,
    pointer_x: f32,
    parallax: &ParallaxTuning,
) -> Vec<SliceTransform> {
    (0..count)
        .map(|index| {
            let local_position = slice_position(index, count, radius);
            let world_position = rotate_about_y(local_position, group_rotation);
            let yaw = billboard_yaw(world_position, camera, group_rotation, pointer_x, parallax);
            SliceTransform {
                index,
                local_position,
                world_position,
                yaw,
            }
        })
        .collect()
}
