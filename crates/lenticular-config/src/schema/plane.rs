//! Slice plane geometry and viewer placement.

use serde::{Deserialize, Serialize};

/// Dimensions of one slice plane.
///
/// Defaults to the 51:91 portrait aspect of the bundled videos.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaneConfig {
    pub width: f64,
    pub height: f64,
    /// Upper bound for `material.divisions`. The mesh is built once with
    /// `2 * max_divisions` columns so changing divisions never regenerates it.
    pub max_divisions: u32,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            width: 51.0 / 91.0,
            height: 1.0,
            max_divisions: 100,
        }
    }
}

/// Fixed viewpoint used by headless runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f64; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
        }
    }
}
