//! Pointer-driven parallax tilt.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Multiplier applied to the clamped pointer X.
    pub tilt_gain: f64,
    /// Normalized pointer X is clamped to `[-pointer_clamp, pointer_clamp]`.
    pub pointer_clamp: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            tilt_gain: 2.0,
            pointer_clamp: 0.02,
        }
    }
}
