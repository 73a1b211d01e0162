//! Plane mesh generation.

use lenticular_config::schema::PlaneConfig;

use super::types::PlaneVertex;

/// Generate a `width × height` plane centred on the origin, split into
/// `columns × rows` quads.
///
/// Non-indexed triangle list, `columns * rows * 6` vertices, counter-clockwise
/// when viewed from +Z. UV (0, 0) is the bottom-left corner. Zero counts are
/// raised to 1.
pub fn generate_plane_mesh(width: f32, height: f32, columns: u32, rows: u32) -> Vec<PlaneVertex> {
    let columns = columns.max(1);
    let rows = rows.max(1);
    let mut vertices = Vec::with_capacity((columns * rows * 6) as usize);

    let corner = |col: u32, row: u32| {
        let u = col as f32 / columns as f32;
        let v = row as f32 / rows as f32;
        PlaneVertex {
            position: [(u - 0.5) * width, (v - 0.5) * height, 0.0],
            uv: [u, v],
        }
    };

    for row in 0..rows {
        for col in 0..columns {
            let bl = corner(col, row);
            let br = corner(col + 1, row);
            let tl = corner(col, row + 1);
            let tr = corner(col + 1, row + 1);
            vertices.extend_from_slice(&[bl, br, tr, bl, tr, tl]);
        }
    }

    vertices
}

/// Column count that gives every strip pair two columns at the largest
/// division count, so division changes never need new geometry.
pub fn columns_for(max_divisions: u32) -> u32 {
    max_divisions.max(1).saturating_mul(2)
}

/// Slice mesh from the `[plane]` config section.
pub fn plane_mesh_from_config(config: &PlaneConfig) -> Vec<PlaneVertex> {
    generate_plane_mesh(
        config.width as f32,
        config.height as f32,
        columns_for(config.max_divisions),
        1,
    )
}
