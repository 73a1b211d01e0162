//! Host-facing frame output.

use crate::carousel::CarouselPhase;
use crate::layout::SliceTransform;
use crate::shader_graph::LenticularGraph;

/// Values computed for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Carousel group rotation about Y, radians.
    pub rotation: f32,
    pub phase: CarouselPhase,
    pub slices: Vec<SliceTransform>,
}

/// Receiver of frame output, implemented by the host's scene adapter.
pub trait SceneSink {
    /// Rotate the carousel group.
    fn set_group_rotation(&mut self, rotation: f32);

    /// Place one slice and bind its material. Only called for slices whose
    /// material built successfully.
    fn apply_slice(&mut self, transform: &SliceTransform, graph: &LenticularGraph);
}
