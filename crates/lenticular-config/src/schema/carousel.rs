//! Carousel ring and drag/snap tuning.

use serde::{Deserialize, Serialize};

/// Ring of slices and how it reacts to dragging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    pub slice_count: u32,
    pub radius: f64,
    /// Radians of rotation per pixel of horizontal drag.
    pub sensitivity: f64,
    /// Exponential damping coefficient for the snap animation.
    pub damping: f64,
    /// Distance (radians) at which the snap settles exactly on its slot.
    pub snap_epsilon: f64,
    /// Explicit ring angle in radians. Ignored while dragging or snapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_override: Option<f64>,
    pub auto_rotate: bool,
    /// Radians per second when `auto_rotate` is on.
    pub auto_rotate_speed: f64,
    pub draggable: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slice_count: 3,
            radius: 1.2,
            sensitivity: 0.008,
            damping: 8.0,
            snap_epsilon: 0.001,
            rotation_override: None,
            auto_rotate: false,
            auto_rotate_speed: 0.3,
            draggable: true,
        }
    }
}
