//! Lenticular effect core: shader graph, carousel controller, slice layout
//! and the wgpu adapter that draws the result.

pub mod carousel;
pub mod gpu;
pub mod layout;
pub mod pipeline;
pub mod plane;
pub mod scene;
pub mod shader_graph;

pub use carousel::{CarouselController, CarouselPhase, CarouselTuning};
pub use gpu::{LenticularUniforms, RendererError, SliceUniforms};
pub use layout::{ParallaxTuning, SliceTransform};
pub use pipeline::LenticularPipeline;
pub use plane::PlaneVertex;
pub use scene::{Frame, LenticularScene, SceneSink};
pub use shader_graph::{LenticularGraph, LenticularParameters, ShaderGraphBuilder, SliceMaterial};
