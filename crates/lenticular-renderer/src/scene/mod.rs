//! Per-frame entry point tying the carousel, the slice layout and the slice
//! materials together.
//!
//! [`LenticularScene::frame`] is pure with respect to the host: it advances
//! the controller and returns plain transforms. [`LenticularScene::apply`]
//! is the single write-back point into the host's scene graph.

mod sink;
mod state;
mod textures;

pub use sink::*;
pub use state::*;
pub use textures::*;
