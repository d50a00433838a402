//! The fixed geometry and colors both demos are built around. Kept as plain
//! data so the invariants can be checked without a GL context.

/// Background color both demos clear to every frame (teal).
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

/// Color the rectangle's fragment stage writes (orange). Must stay in sync
/// with `glsl/rect_frag.glsl`.
pub const FILL_COLOR: [f32; 4] = [1.0, 0.5, 0.2, 1.0];

/// Quad corners on the z = 0 plane, 3 floats per vertex, tightly packed.
#[rustfmt::skip]
pub const QUAD_VERTICES: [f32; 12] = [
     0.5,  0.5, 0.0, // top right
     0.5, -0.5, 0.0, // bottom right
    -0.5, -0.5, 0.0, // bottom left
    -0.5,  0.5, 0.0, // top left
];

/// Two triangles covering the quad, sharing the 1-3 diagonal.
#[rustfmt::skip]
pub const QUAD_INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(i: u32) -> (f32, f32, f32) {
        let base = i as usize * 3;
        (
            QUAD_VERTICES[base],
            QUAD_VERTICES[base + 1],
            QUAD_VERTICES[base + 2],
        )
    }

    /// Twice the signed area of the triangle at `tri` (xy plane).
    fn doubled_signed_area(tri: &[u32]) -> f32 {
        let (ax, ay, _) = vertex(tri[0]);
        let (bx, by, _) = vertex(tri[1]);
        let (cx, cy, _) = vertex(tri[2]);
        (bx - ax) * (cy - ay) - (cx - ax) * (by - ay)
    }

    #[test]
    fn every_index_references_a_real_vertex() {
        let vertex_count = (QUAD_VERTICES.len() / 3) as u32;
        assert_eq!(vertex_count, 4);
        assert!(QUAD_INDICES.iter().all(|&i| i < vertex_count));
    }

    #[test]
    fn six_indices_form_two_triangles() {
        assert_eq!(QUAD_INDICES.len(), 6);
        for tri in QUAD_INDICES.chunks(3) {
            // degenerate triangles have zero area
            assert!(doubled_signed_area(tri) != 0.0);
        }
    }

    #[test]
    fn triangles_share_the_1_3_diagonal() {
        let (first, second) = (&QUAD_INDICES[..3], &QUAD_INDICES[3..]);
        let shared: Vec<u32> = first
            .iter()
            .copied()
            .filter(|i| second.contains(i))
            .collect();
        assert_eq!(shared, vec![1, 3]);
    }

    #[test]
    fn all_four_corners_are_drawn() {
        for corner in 0..4 {
            assert!(QUAD_INDICES.contains(&corner), "corner {corner} unused");
        }
    }

    #[test]
    fn triangles_tile_the_quad_exactly_once() {
        let areas: Vec<f32> = QUAD_INDICES
            .chunks(3)
            .map(doubled_signed_area)
            .collect();
        // same winding for both halves
        assert_eq!(areas[0].signum(), areas[1].signum());
        // each triangle is half the unit quad
        assert_eq!(areas[0].abs(), 1.0);
        assert_eq!(areas[1].abs(), 1.0);
    }

    #[test]
    fn quad_lies_on_the_z_0_plane() {
        for i in 0..4 {
            assert_eq!(vertex(i).2, 0.0);
        }
    }

    #[test]
    fn colors_are_the_tutorial_colors() {
        assert_eq!(CLEAR_COLOR, [0.2, 0.3, 0.3, 1.0]);
        assert_eq!(FILL_COLOR, [1.0, 0.5, 0.2, 1.0]);
    }
}
