//! Named texture pairs.

use serde::{Deserialize, Serialize};

/// A pair of motion textures shown on one slice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextureSetConfig {
    pub key: String,
    pub texture_a: String,
    pub texture_b: String,
}

impl TextureSetConfig {
    fn new(key: &str, texture_a: &str, texture_b: &str) -> Self {
        Self {
            key: key.into(),
            texture_a: texture_a.into(),
            texture_b: texture_b.into(),
        }
    }
}

/// Texture sets and which one the single-panel view starts on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TexturesConfig {
    pub active: String,
    pub sets: Vec<TextureSetConfig>,
}

impl TexturesConfig {
    /// Look up a set by key.
    pub fn find(&self, key: &str) -> Option<&TextureSetConfig> {
        self.sets.iter().find(|s| s.key == key)
    }

    /// Sets in carousel order, starting from the active one.
    pub fn rotated_from_active(&self) -> Vec<&TextureSetConfig> {
        let start = self.sets.iter().position(|s| s.key == self.active).unwrap_or(0);
        self.sets[start..].iter().chain(self.sets[..start].iter()).collect()
    }
}

impl Default for TexturesConfig {
    fn default() -> Self {
        Self {
            active: "nostalgia".into(),
            sets: vec![
                TextureSetConfig::new(
                    "nostalgia",
                    "textures/nostalgia/nostalgia-train.mp4",
                    "textures/nostalgia/nostalgia-woman.mp4",
                ),
                TextureSetConfig::new(
                    "vhs",
                    "textures/vhs/vhs-train.mp4",
                    "textures/vhs/vhs-running.mp4",
                ),
                TextureSetConfig::new(
                    "water",
                    "textures/water/water-closeup.mp4",
                    "textures/water/water-shirt.mp4",
                ),
            ],
        }
    }
}
