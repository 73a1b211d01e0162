//! Lenticular material parameters.

use serde::{Deserialize, Serialize};

/// Strip pattern and ridge settings shared by every slice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MaterialConfig {
    /// Number of strip pairs across the width of a slice.
    pub divisions: u32,
    /// Maximum vertex displacement of a ridge.
    pub ridge_height: f64,
    /// 0.0 = hard strip boundary, 1.0 = linear ramp across the strip.
    pub edge_smoothness: f64,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            divisions: 10,
            ridge_height: 0.05,
            edge_smoothness: 0.1,
        }
    }
}
