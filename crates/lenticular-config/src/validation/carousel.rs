use crate::schema::LenticularConfig;

use super::helpers::Report;

pub(crate) fn check_carousel(report: &mut Report, config: &LenticularConfig) {
    let c = &config.carousel;
    report.within("carousel.slice_count", c.slice_count, 1, 16);
    report.within("carousel.radius", c.radius, 0.1, 10.0);
    report.positive("carousel.sensitivity", c.sensitivity, 0.1);
    report.within("carousel.damping", c.damping, 0.1, 50.0);
    report.positive("carousel.snap_epsilon", c.snap_epsilon, 0.1);
    report.within("carousel.auto_rotate_speed", c.auto_rotate_speed, -10.0, 10.0);
    if let Some(angle) = c.rotation_override {
        report.within_f32("carousel.rotation_override", angle);
    }
}

pub(crate) fn check_parallax(report: &mut Report, config: &LenticularConfig) {
    report.within("parallax.tilt_gain", config.parallax.tilt_gain, 0.0, 10.0);
    report.within("parallax.pointer_clamp", config.parallax.pointer_clamp, 0.0, 0.1);
}
