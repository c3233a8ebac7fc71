//! Dense per-face grids of sphere-projected base vertex positions.

use glam::{DVec2, DVec3};

use crate::{CubeFace, cube_to_sphere};

/// A `(world_size + 1) x (world_size + 1)` grid of unit-sphere points for one
/// cube face, computed once at construction and immutable thereafter.
///
/// Grid coordinate `(x, y)` fractions across the face as `(x, y) / world_size`
/// (so the last row and column sit exactly on the face edge), is placed on the
/// `[-1, 1]` cube via the face's local-up / axis-a / axis-b basis, and is then
/// warped onto the unit sphere with [`cube_to_sphere`].
#[derive(Debug)]
pub struct VertexGrid {
    face: CubeFace,
    world_size: usize,
    points: Vec<DVec3>,
}

impl VertexGrid {
    /// Build the projected vertex grid for `face` at `world_size` cells per side.
    #[must_use]
    pub fn new(face: CubeFace, world_size: usize) -> Self {
        let up = face.local_up();
        let axis_a = face.axis_a();
        let axis_b = face.axis_b();

        let side = world_size + 1;
        let mut points = Vec::with_capacity(side * side);
        for x in 0..side {
            for y in 0..side {
                let percent = DVec2::new(x as f64, y as f64) / world_size as f64;
                let on_cube =
                    up + (percent.x - 0.5) * 2.0 * axis_a + (percent.y - 0.5) * 2.0 * axis_b;
                points.push(cube_to_sphere(on_cube));
            }
        }

        Self {
            face,
            world_size,
            points,
        }
    }

    /// Which cube face this grid belongs to.
    #[inline]
    #[must_use]
    pub fn face(&self) -> CubeFace {
        self.face
    }

    /// The face resolution in cells per side.
    #[inline]
    #[must_use]
    pub fn world_size(&self) -> usize {
        self.world_size
    }

    /// Vertices per side: `world_size + 1`.
    #[inline]
    #[must_use]
    pub fn side_len(&self) -> usize {
        self.world_size + 1
    }

    /// The sphere-projected vertex at grid coordinate `(x, y)`.
    ///
    /// Valid coordinates satisfy `0 <= x, y <= world_size`.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> DVec3 {
        let side = self.side_len();
        debug_assert!(x < side, "grid x {x} out of range 0..{side}");
        debug_assert!(y < side, "grid y {y} out of range 0..{side}");
        self.points[x * side + y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_world_size_plus_one_per_side() {
        let grid = VertexGrid::new(CubeFace::PosX, 8);
        assert_eq!(grid.side_len(), 9);
        assert_eq!(grid.world_size(), 8);
    }

    #[test]
    fn test_grid_is_deterministic_across_construction() {
        let a = VertexGrid::new(CubeFace::NegZ, 16);
        let b = VertexGrid::new(CubeFace::NegZ, 16);
        for x in 0..=16 {
            for y in 0..=16 {
                assert_eq!(
                    a.get(x, y),
                    b.get(x, y),
                    "Grid point ({x}, {y}) differs between constructions"
                );
            }
        }
    }

    #[test]
    fn test_all_grid_points_on_unit_sphere() {
        for face in CubeFace::ALL {
            let grid = VertexGrid::new(face, 8);
            for x in 0..=8 {
                for y in 0..=8 {
                    let len = grid.get(x, y).length();
                    assert!(
                        (len - 1.0).abs() < 1e-10,
                        "Grid point ({x}, {y}) on {face:?} not unit length: {len}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_grid_center_is_local_up() {
        // percent = 0.5 at the face midpoint, so the cube point is local_up itself.
        let grid = VertexGrid::new(CubeFace::PosY, 8);
        let center = grid.get(4, 4);
        assert!(
            (center - CubeFace::PosY.local_up()).length() < 1e-12,
            "Face midpoint should project to local_up, got {center:?}"
        );
    }

    #[test]
    fn test_grid_corner_matches_documented_formula() {
        // Corner (0, 0) on PosY: cube point = up - axis_a - axis_b = (-1, 1, 1).
        let grid = VertexGrid::new(CubeFace::PosY, 8);
        let expected = cube_to_sphere(DVec3::new(-1.0, 1.0, 1.0));
        assert_eq!(grid.get(0, 0), expected);
    }

    #[test]
    fn test_neighbor_faces_share_edge_vertices() {
        // The projection is seam-free: the same cube edge projected from two
        // adjacent faces lands on identical sphere points.
        let pos_y = VertexGrid::new(CubeFace::PosY, 8);
        let corner_a = pos_y.get(0, 0);
        let pos_x = VertexGrid::new(CubeFace::PosX, 8);
        let found = (0..=8).any(|x| {
            (0..=8).any(|y| (pos_x.get(x, y) - corner_a).length() < 1e-12)
        });
        assert!(
            !found,
            "Corner (-1, 1, 1) lies on the -X edge and must not appear on the +X face"
        );

        let neg_x = VertexGrid::new(CubeFace::NegX, 8);
        let shared = (0..=8).any(|x| {
            (0..=8).any(|y| (neg_x.get(x, y) - corner_a).length() < 1e-12)
        });
        assert!(
            shared,
            "Cube corner (-1, 1, 1) should appear on both the +Y and -X grids"
        );
    }
}
