//! Carousel state machine.

use std::num::NonZeroUsize;

use lenticular_common::{LenticularError, Result};
use lenticular_config::schema::CarouselConfig;
use tracing::{debug, trace};

use super::angle::{damp, normalize_angle, slot_angle, slot_count, snap_target};
use super::types::{CarouselPhase, CarouselState, CarouselTuning};

/// Owns the rotation of a ring of slices and drives it from pointer events
/// and per-frame updates.
///
/// Pointer callbacks and [`update`](Self::update) are expected on the same
/// thread, serialized by the host's frame loop.
#[derive(Debug, Clone)]
pub struct CarouselController {
    state: CarouselState,
    slices: NonZeroUsize,
    tuning: CarouselTuning,
    rotation_override: Option<f32>,
    auto_rotate: bool,
    draggable: bool,
}

impl CarouselController {
    /// Controller for a ring of `slice_count` slices at rotation 0.
    pub fn new(slice_count: usize, tuning: CarouselTuning) -> Result<Self> {
        tuning.validate()?;
        Ok(Self {
            state: CarouselState::default(),
            slices: slot_count(slice_count)?,
            tuning,
            rotation_override: None,
            auto_rotate: false,
            draggable: true,
        })
    }

    pub fn from_config(config: &CarouselConfig) -> Result<Self> {
        let rotation_override = override_from_config(config)?;
        let mut controller =
            Self::new(config.slice_count as usize, CarouselTuning::from_config(config))?;
        controller.rotation_override = rotation_override;
        controller.auto_rotate = config.auto_rotate;
        controller.draggable = config.draggable;
        if let Some(r) = controller.rotation_override {
            controller.state.current_rotation = r;
        }
        Ok(controller)
    }

    pub fn phase(&self) -> CarouselPhase {
        self.state.phase()
    }

    /// Current group rotation in radians.
    pub fn rotation(&self) -> f32 {
        self.state.current_rotation
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn slice_count(&self) -> usize {
        self.slices.get()
    }

    pub fn slot_angle(&self) -> f32 {
        slot_angle(self.slices)
    }

    pub fn tuning(&self) -> &CarouselTuning {
        &self.tuning
    }

    pub fn rotation_override(&self) -> Option<f32> {
        self.rotation_override
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Whether pointer gestures move the ring. A single slice never drags.
    pub fn drag_enabled(&self) -> bool {
        self.draggable && self.slices.get() > 1
    }

    /// Start a drag at `client_x`. Cancels any snap in progress and
    /// re-anchors from the current rotation. Returns whether a drag started.
    pub fn on_pointer_down(&mut self, client_x: f32) -> bool {
        if !self.drag_enabled() || !client_x.is_finite() {
            return false;
        }
        let anchor = normalize_angle(self.state.current_rotation);
        if let Some(target) = self.state.pending_snap_target.take() {
            debug!(rotation = anchor, target, "snap cancelled by drag");
        }
        if self.rotation_override.take().is_some() {
            debug!("rotation override released by drag");
        }
        self.state.dragging = true;
        self.state.drag_anchor_client_x = client_x;
        self.state.drag_anchor_rotation = anchor;
        self.state.current_rotation = anchor;
        debug!(client_x, rotation = anchor, "drag started");
        true
    }

    /// Follow the pointer while dragging. Ignored otherwise.
    pub fn on_pointer_move(&mut self, client_x: f32) {
        if !self.state.dragging || !client_x.is_finite() {
            return;
        }
        let delta = client_x - self.state.drag_anchor_client_x;
        self.state.current_rotation =
            normalize_angle(self.state.drag_anchor_rotation - delta * self.tuning.sensitivity);
        trace!(client_x, rotation = self.state.current_rotation, "drag");
    }

    /// End the drag and aim for the nearest slot along the shorter arc.
    pub fn on_pointer_up(&mut self) {
        if !self.state.dragging {
            return;
        }
        self.state.dragging = false;
        let target = snap_target(self.state.current_rotation, self.slices);
        self.state.pending_snap_target = Some(target);
        debug!(
            rotation = self.state.current_rotation,
            target, "drag released, snapping"
        );
    }

    /// Advance by `dt` seconds and return the rotation to display.
    ///
    /// Negative or non-finite `dt` is treated as zero.
    pub fn update(&mut self, dt: f32) -> f32 {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        match self.phase() {
            CarouselPhase::Dragging => {}
            CarouselPhase::Snapping => self.step_snap(dt),
            CarouselPhase::Idle => {
                if let Some(r) = self.rotation_override {
                    self.state.current_rotation = r;
                } else if self.auto_rotate {
                    self.state.current_rotation = normalize_angle(
                        self.state.current_rotation + self.tuning.auto_rotate_speed * dt,
                    );
                }
            }
        }
        self.state.current_rotation
    }

    fn step_snap(&mut self, dt: f32) {
        let Some(target) = self.state.pending_snap_target else {
            return;
        };
        let rotation = damp(self.state.current_rotation, target, self.tuning.damping, dt);
        if (rotation - target).abs() < self.tuning.snap_epsilon {
            self.state.current_rotation = target;
            self.state.pending_snap_target = None;
            debug!(rotation = target, "snap settled");
        } else {
            self.state.current_rotation = rotation;
            trace!(rotation, target, "snapping");
        }
    }

    /// Pin the ring to `rotation` while idle, or release it with `None`.
    pub fn set_rotation_override(&mut self, rotation: Option<f32>) -> Result<()> {
        if let Some(r) = rotation {
            check_override(r)?;
        }
        self.rotation_override = rotation;
        Ok(())
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    /// Enable or disable dragging. Disabling mid-drag releases into a snap.
    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
        if !self.drag_enabled() {
            self.on_pointer_up();
        }
    }

    /// Resize the ring. A snap in progress re-targets to the new slots.
    pub fn set_slice_count(&mut self, slice_count: usize) -> Result<()> {
        self.slices = slot_count(slice_count)?;
        if self.state.pending_snap_target.is_some() {
            self.state.pending_snap_target =
                Some(snap_target(self.state.current_rotation, self.slices));
        }
        if !self.drag_enabled() {
            self.on_pointer_up();
        }
        Ok(())
    }

    pub fn set_tuning(&mut self, tuning: CarouselTuning) -> Result<()> {
        tuning.validate()?;
        self.tuning = tuning;
        Ok(())
    }
}

/// The configured override as the f32 the controller stores. Values that
/// overflow f32 are rejected rather than turned into infinity.
pub fn override_from_config(config: &CarouselConfig) -> Result<Option<f32>> {
    config
        .rotation_override
        .map(|r| check_override(r as f32))
        .transpose()
}

fn check_override(rotation: f32) -> Result<f32> {
    if rotation.is_finite() {
        Ok(rotation)
    } else {
        Err(LenticularError::InvalidParameter(format!(
            "rotation_override = {rotation} must be finite"
        )))
    }
}
