use std::f32::consts::TAU;

use lenticular_common::LenticularError;
use lenticular_config::schema::CarouselConfig;

use super::*;

fn controller(n: usize) -> CarouselController {
    CarouselController::new(n, CarouselTuning::default()).unwrap()
}

/// Drag from rotation 0 so the ring ends at `rotation`, then release.
fn release_at(c: &mut CarouselController, rotation: f32) {
    assert!(c.on_pointer_down(0.0));
    c.on_pointer_move(-rotation / c.tuning().sensitivity);
    c.on_pointer_up();
}

#[test]
fn zero_slices_is_a_configuration_error() {
    let err = CarouselController::new(0, CarouselTuning::default()).unwrap_err();
    assert!(matches!(err, LenticularError::Configuration(_)));
}

#[test]
fn set_slice_count_zero_is_rejected_and_keeps_ring() {
    let mut c = controller(3);
    assert!(c.set_slice_count(0).is_err());
    assert_eq!(c.slice_count(), 3);
}

#[test]
fn drag_end_to_end() {
    let mut c = controller(3);
    assert!(c.on_pointer_down(100.0));
    assert_eq!(c.phase(), CarouselPhase::Dragging);
    c.on_pointer_move(200.0);
    assert!((c.rotation() - 5.483_185).abs() < 1e-4, "{}", c.rotation());
    assert!((c.rotation() - (TAU - 0.8)).abs() < 1e-5);
}

#[test]
fn drag_move_stays_normalized() {
    let mut c = controller(3);
    c.on_pointer_down(0.0);
    for x in [-5000.0, -10.0, 0.0, 10.0, 5000.0] {
        c.on_pointer_move(x);
        assert!((0.0..TAU).contains(&c.rotation()), "{x}: {}", c.rotation());
    }
}

#[test]
fn update_does_not_move_ring_while_dragging() {
    let mut c = controller(3);
    c.on_pointer_down(0.0);
    c.on_pointer_move(-50.0);
    let r = c.rotation();
    c.update(0.5);
    assert_eq!(c.rotation(), r);
}

#[test]
fn release_near_zero_snaps_back_via_negative_arc() {
    let mut c = controller(3);
    release_at(&mut c, 0.1);
    assert_eq!(c.phase(), CarouselPhase::Snapping);
    let target = c.state().pending_snap_target.unwrap();
    assert!(target.abs() < 1e-5, "{target}");
    assert!((target - c.rotation()).abs() <= 0.1 + 1e-5);
}

#[test]
fn release_near_seam_snaps_forward_via_short_arc() {
    let mut c = controller(3);
    release_at(&mut c, TAU - 0.05);
    let current = c.rotation();
    let target = c.state().pending_snap_target.unwrap();
    assert!((target - current - 0.05).abs() < 1e-4, "diff {}", target - current);
}

#[test]
fn damping_is_exponential_and_frame_rate_independent() {
    for steps in [1, 10, 100] {
        let mut c = controller(3);
        release_at(&mut c, 0.3);
        let target = c.state().pending_snap_target.unwrap();
        let d0 = (c.rotation() - target).abs();
        let t = 0.1;
        for _ in 0..steps {
            c.update(t / steps as f32);
        }
        let d = (c.rotation() - target).abs();
        let expected = d0 * (-8.0f32 * t).exp();
        assert!((d - expected).abs() < 1e-5, "{steps} steps: {d} vs {expected}");
    }
}

#[test]
fn snap_settles_exactly_and_goes_idle() {
    let mut c = controller(4);
    release_at(&mut c, 1.4);
    let target = c.state().pending_snap_target.unwrap();
    for _ in 0..600 {
        c.update(1.0 / 60.0);
    }
    assert_eq!(c.phase(), CarouselPhase::Idle);
    assert_eq!(c.rotation(), target);
    assert!(c.state().pending_snap_target.is_none());
}

#[test]
fn update_in_idle_is_idempotent() {
    let mut c = controller(3);
    release_at(&mut c, 2.3);
    for _ in 0..600 {
        c.update(1.0 / 60.0);
    }
    let settled = c.rotation();
    for _ in 0..10 {
        assert_eq!(c.update(1.0 / 60.0), settled);
    }
}

#[test]
fn drag_start_during_snap_cancels_and_reanchors() {
    let mut c = controller(3);
    release_at(&mut c, 0.9);
    c.update(0.05);
    let mid = c.rotation();
    assert_eq!(c.phase(), CarouselPhase::Snapping);

    assert!(c.on_pointer_down(300.0));
    assert_eq!(c.phase(), CarouselPhase::Dragging);
    assert!(c.state().pending_snap_target.is_none());
    assert!((c.state().drag_anchor_rotation - mid).abs() < 1e-6);
    assert_eq!(c.state().drag_anchor_client_x, 300.0);
}

#[test]
fn drag_start_normalizes_unbounded_rotation() {
    let mut c = controller(3);
    // Settle onto the 2π target produced by the seam case.
    release_at(&mut c, TAU - 0.01);
    for _ in 0..600 {
        c.update(1.0 / 60.0);
    }
    assert!(c.rotation() > 6.0);
    c.on_pointer_down(0.0);
    assert!(c.state().drag_anchor_rotation < 1e-4 || c.state().drag_anchor_rotation > TAU - 1e-4);
    assert!((0.0..TAU).contains(&c.rotation()));
}

#[test]
fn move_and_up_without_down_are_ignored() {
    let mut c = controller(3);
    c.on_pointer_move(500.0);
    c.on_pointer_up();
    assert_eq!(c.rotation(), 0.0);
    assert_eq!(c.phase(), CarouselPhase::Idle);
}

#[test]
fn single_slice_is_static() {
    let mut c = controller(1);
    assert!(!c.drag_enabled());
    assert!(!c.on_pointer_down(10.0));
    c.on_pointer_move(400.0);
    assert_eq!(c.rotation(), 0.0);
}

#[test]
fn non_draggable_ring_ignores_pointer() {
    let mut c = controller(3);
    c.set_draggable(false);
    assert!(!c.on_pointer_down(10.0));
}

#[test]
fn disabling_drag_mid_gesture_releases_into_snap() {
    let mut c = controller(3);
    c.on_pointer_down(0.0);
    c.on_pointer_move(-20.0);
    c.set_draggable(false);
    assert_eq!(c.phase(), CarouselPhase::Snapping);
}

#[test]
fn auto_rotate_accumulates_and_wraps() {
    let mut c = controller(3);
    c.set_auto_rotate(true);
    c.update(1.0);
    assert!((c.rotation() - 0.3).abs() < 1e-6);
    for _ in 0..100 {
        c.update(1.0);
    }
    assert!((0.0..TAU).contains(&c.rotation()));
}

#[test]
fn auto_rotate_pauses_during_drag_and_snap() {
    let mut c = controller(3);
    c.set_auto_rotate(true);
    release_at(&mut c, 0.2);
    let target = c.state().pending_snap_target.unwrap();
    c.update(0.01);
    // Snapping moves towards the target, not forward at auto speed.
    assert!((c.rotation() - target).abs() < 0.2);
    assert_eq!(c.phase(), CarouselPhase::Snapping);
}

#[test]
fn rotation_override_applies_when_idle_and_wins_over_auto() {
    let mut c = controller(3);
    c.set_auto_rotate(true);
    c.set_rotation_override(Some(1.25)).unwrap();
    assert_eq!(c.update(0.5), 1.25);
    assert_eq!(c.update(0.5), 1.25);
}

#[test]
fn drag_releases_rotation_override() {
    let mut c = controller(3);
    c.set_rotation_override(Some(1.0)).unwrap();
    c.update(0.016);
    assert!(c.on_pointer_down(0.0));
    assert!(c.rotation_override().is_none());
    c.on_pointer_move(-10.0);
    assert!((c.rotation() - 1.08).abs() < 1e-5);
}

#[test]
fn non_finite_override_rejected() {
    let mut c = controller(3);
    let err = c.set_rotation_override(Some(f32::NAN)).unwrap_err();
    assert!(matches!(err, LenticularError::InvalidParameter(_)));
}

#[test]
fn negative_or_nan_dt_is_a_no_op() {
    let mut c = controller(3);
    release_at(&mut c, 0.5);
    let r = c.rotation();
    c.update(-1.0);
    c.update(f32::NAN);
    assert_eq!(c.rotation(), r);
}

#[test]
fn resizing_mid_snap_retargets() {
    let mut c = controller(3);
    release_at(&mut c, 1.4);
    c.set_slice_count(4).unwrap();
    let target = c.state().pending_snap_target.unwrap();
    assert!((target - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
}

#[test]
fn from_config_applies_flags() {
    let c = CarouselController::from_config(&CarouselConfig {
        slice_count: 5,
        rotation_override: Some(0.7),
        auto_rotate: true,
        draggable: false,
        ..CarouselConfig::default()
    })
    .unwrap();
    assert_eq!(c.slice_count(), 5);
    assert_eq!(c.rotation(), 0.7);
    assert!(c.auto_rotate());
    assert!(!c.drag_enabled());
}

#[test]
fn from_config_rejects_override_that_overflows_f32() {
    let err = CarouselController::from_config(&CarouselConfig {
        rotation_override: Some(1e39),
        ..CarouselConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, LenticularError::InvalidParameter(_)));
}
