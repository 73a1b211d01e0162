//! GPU-facing types: error enum and uniform blocks.

mod types;
mod uniforms;

pub use types::*;
pub use uniforms::*;
