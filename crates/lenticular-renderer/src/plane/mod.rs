//! Slice plane geometry.
//!
//! A flat quad in the XY plane facing +Z, subdivided into vertical columns
//! so the vertex-stage ridge has vertices to displace.

mod mesh;
mod types;

pub use mesh::*;
pub use types::*;
