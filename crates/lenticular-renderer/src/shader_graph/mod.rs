//! Procedural shader graph for the lenticular material.
//!
//! The graph is a small expression tree over surface UV, local vertex
//! position, three mutable uniforms and two textures. It can be evaluated on
//! the CPU or lowered to WGSL. Texture identity is baked in at build time;
//! uniform values are not.

mod builder;
mod eval;
mod material;
mod node;
mod params;
pub mod wgsl;

pub use builder::*;
pub use eval::*;
pub use material::*;
pub use node::*;
pub use params::*;
