//! Material parameters are bounded by the plane mesh they displace.

use crate::schema::LenticularConfig;

use super::helpers::Report;

pub(crate) fn check_material(report: &mut Report, config: &LenticularConfig) {
    let m = &config.material;
    let capacity = config.plane.max_divisions.max(1);
    report.within("material.divisions", m.divisions, 1, capacity);
    report.within("material.ridge_height", m.ridge_height, 0.0, 0.2);
    report.within("material.edge_smoothness", m.edge_smoothness, 0.0, 1.0);
}

pub(crate) fn check_plane(report: &mut Report, config: &LenticularConfig) {
    let p = &config.plane;
    report.positive("plane.width", p.width, 10.0);
    report.positive("plane.height", p.height, 10.0);
    report.within("plane.max_divisions", p.max_divisions, 1, 500);
    for (axis, value) in ["x", "y", "z"].iter().zip(config.camera.position) {
        report.finite(&format!("camera.position.{axis}"), value);
    }
}
