//! Carousel state and tuning.

use lenticular_common::{LenticularError, Result};
use lenticular_config::schema::CarouselConfig;

/// Observable phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    Idle,
    Dragging,
    Snapping,
}

/// Feel of the drag and the snap animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTuning {
    /// Radians of rotation per pixel of pointer travel.
    pub sensitivity: f32,
    /// Exponential damping coefficient of the snap, per second.
    pub damping: f32,
    /// Distance below which the snap lands exactly on its target.
    pub snap_epsilon: f32,
    /// Radians per second while auto-rotating.
    pub auto_rotate_speed: f32,
}

impl CarouselTuning {
    pub fn from_config(config: &CarouselConfig) -> Self {
        Self {
            sensitivity: config.sensitivity as f32,
            damping: config.damping as f32,
            snap_epsilon: config.snap_epsilon as f32,
            auto_rotate_speed: config.auto_rotate_speed as f32,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.sensitivity.is_finite() {
            return Err(LenticularError::InvalidParameter(format!(
                "sensitivity = {} must be finite",
                self.sensitivity
            )));
        }
        if !(self.damping.is_finite() && self.damping > 0.0) {
            return Err(LenticularError::InvalidParameter(format!(
                "damping = {} must be a finite value > 0",
                self.damping
            )));
        }
        if !(self.snap_epsilon.is_finite() && self.snap_epsilon > 0.0) {
            return Err(LenticularError::InvalidParameter(format!(
                "snap_epsilon = {} must be a finite value > 0",
                self.snap_epsilon
            )));
        }
        if !self.auto_rotate_speed.is_finite() {
            return Err(LenticularError::InvalidParameter(format!(
                "auto_rotate_speed = {} must be finite",
                self.auto_rotate_speed
            )));
        }
        Ok(())
    }
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            sensitivity: 0.008,
            damping: 8.0,
            snap_epsilon: 0.001,
            auto_rotate_speed: 0.3,
        }
    }
}

/// Mutable state owned by one [`super::CarouselController`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselState {
    /// Group rotation in radians. Unbounded, normalized at drag start.
    pub current_rotation: f32,
    pub dragging: bool,
    pub drag_anchor_client_x: f32,
    pub drag_anchor_rotation: f32,
    pub pending_snap_target: Option<f32>,
}

impl CarouselState {
    pub fn phase(&self) -> CarouselPhase {
        if self.dragging {
            CarouselPhase::Dragging
        } else if self.pending_snap_target.is_some() {
            CarouselPhase::Snapping
        } else {
            CarouselPhase::Idle
        }
    }
}
