//! Slice placement around the carousel ring and billboard orientation.

pub mod matrix;
mod slice;

pub use slice::*;
