//! Column-major 4×4 transforms for slice model matrices.
//!
//! Layout matches WGSL `mat4x4<f32>`. Only what slice placement and the
//! headless camera need: Y rotation, translation, perspective, product and
//! point transform.

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0, //
];

/// Right-handed rotation of `angle` radians about +Y.
///
/// Maps +Z towards +X, so a yaw of `atan2(dx, dz)` turns a plane whose
/// normal is +Z to face direction `(dx, dz)`.
pub fn rotate_y(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    [
        c, 0.0, -s, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        s, 0.0, c, 0.0, //
        0.0, 0.0, 0.0, 1.0, //
    ]
}

pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        x, y, z, 1.0, //
    ]
}

/// OpenGL-style perspective projection. `fov_y` in radians.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);
    let mut m = [0.0; 16];
    m[0] = f / aspect;
    m[5] = f;
    m[10] = (far + near) * range_inv;
    m[11] = -1.0;
    m[14] = 2.0 * far * near * range_inv;
    m
}

/// `a × b`.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            out[col * 4 + row] = (0..4).map(|k| a[k * 4 + row] * b[col * 4 + k]).sum();
        }
    }
    out
}

/// Transform a point (w = 1), dropping the resulting w.
pub fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 3] {
    std::array::from_fn(|row| m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn identity_is_neutral() {
        let t = translate(1.0, 2.0, 3.0);
        assert_eq!(mul(&IDENTITY, &t), t);
        assert_eq!(mul(&t, &IDENTITY), t);
    }

    #[test]
    fn rotate_y_quarter_turn_maps_z_to_x() {
        let r = rotate_y(FRAC_PI_2);
        assert!(close(transform_point(&r, [0.0, 0.0, 1.0]), [1.0, 0.0, 0.0]));
        assert!(close(transform_point(&r, [1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]));
    }

    #[test]
    fn translate_then_rotate_order() {
        // Rotate first, then translate.
        let m = mul(&translate(0.0, 0.0, 5.0), &rotate_y(FRAC_PI_2));
        assert!(close(transform_point(&m, [0.0, 0.0, 1.0]), [1.0, 0.0, 5.0]));
    }

    #[test]
    fn perspective_has_w_divide() {
        let p = perspective(std::f32::consts::FRAC_PI_4, 1.0, 0.1, 100.0);
        assert_eq!(p[11], -1.0);
        assert_eq!(p[15], 0.0);
    }
}
