//! Value types shared between the config layer, the core and the host.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3-component vector, `[x, y, z]`.
pub type Vec3 = [f32; 3];

/// Opaque handle to a texture owned by the host renderer.
///
/// The core never dereferences it; it only carries it into the shader graph
/// and back out to the GPU adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle(pub u64);

impl fmt::Display for TextureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "texture-{}", self.0)
    }
}

/// Identity of a texture pair. Two pairs with the same key are considered
/// interchangeable and never force a shader rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureKey(pub String);

impl TextureKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TextureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two motion textures interleaved on one slice.
///
/// Handles are optional because the host may not have uploaded a texture yet;
/// the shader graph builder rejects a pair with a missing side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceTexturePair {
    pub texture_a: Option<TextureHandle>,
    pub texture_b: Option<TextureHandle>,
    pub key: TextureKey,
}

impl SliceTexturePair {
    pub fn new(key: impl Into<String>, texture_a: TextureHandle, texture_b: TextureHandle) -> Self {
        Self {
            texture_a: Some(texture_a),
            texture_b: Some(texture_b),
            key: TextureKey::new(key),
        }
    }
}
