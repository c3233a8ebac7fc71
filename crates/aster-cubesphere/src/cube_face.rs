//! The six faces of a cubesphere and their in-plane basis vectors.

use glam::DVec3;

/// The six faces of the cube that forms the cubesphere.
///
/// Each variant corresponds to a face whose outward "local up" vector points
/// along the named axis direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Canonical index of this face, matching its position in [`CubeFace::ALL`].
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The face at the given canonical index.
    ///
    /// # Panics
    /// Panics if `index >= 6`.
    #[must_use]
    pub fn from_index(index: usize) -> CubeFace {
        CubeFace::ALL[index]
    }

    /// Outward-pointing unit "local up" vector for this face.
    #[must_use]
    pub fn local_up(self) -> DVec3 {
        match self {
            CubeFace::PosX => DVec3::X,
            CubeFace::NegX => DVec3::NEG_X,
            CubeFace::PosY => DVec3::Y,
            CubeFace::NegY => DVec3::NEG_Y,
            CubeFace::PosZ => DVec3::Z,
            CubeFace::NegZ => DVec3::NEG_Z,
        }
    }

    /// First in-plane axis: the fixed swizzle `(up.y, up.z, up.x)` of the
    /// local up vector.
    ///
    /// For an axis-aligned unit `local_up` this is always another unit axis
    /// vector perpendicular to it.
    #[must_use]
    pub fn axis_a(self) -> DVec3 {
        let up = self.local_up();
        DVec3::new(up.y, up.z, up.x)
    }

    /// Second in-plane axis: `local_up × axis_a`.
    ///
    /// Together with [`axis_a`](Self::axis_a) this spans the face plane, and
    /// `axis_a × axis_b = local_up`.
    #[must_use]
    pub fn axis_b(self) -> DVec3 {
        self.local_up().cross(self.axis_a())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_six_face_variants_exist() {
        assert_eq!(CubeFace::ALL.len(), 6);
        let faces: Vec<CubeFace> = CubeFace::ALL.to_vec();
        assert!(faces.contains(&CubeFace::PosX));
        assert!(faces.contains(&CubeFace::NegX));
        assert!(faces.contains(&CubeFace::PosY));
        assert!(faces.contains(&CubeFace::NegY));
        assert!(faces.contains(&CubeFace::PosZ));
        assert!(faces.contains(&CubeFace::NegZ));
    }

    #[test]
    fn test_index_round_trip() {
        for (i, face) in CubeFace::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(CubeFace::from_index(i), *face);
        }
    }

    #[test]
    fn test_local_up_is_unit_length() {
        for face in CubeFace::ALL {
            let up = face.local_up();
            assert!(
                (up.length() - 1.0).abs() < 1e-12,
                "local_up for {face:?} is not unit length: {}",
                up.length()
            );
        }
    }

    #[test]
    fn test_axes_are_unit_length() {
        for face in CubeFace::ALL {
            let a = face.axis_a();
            let b = face.axis_b();
            assert!(
                (a.length() - 1.0).abs() < 1e-12,
                "axis_a not unit for {face:?}"
            );
            assert!(
                (b.length() - 1.0).abs() < 1e-12,
                "axis_b not unit for {face:?}"
            );
        }
    }

    #[test]
    fn test_axes_perpendicular_to_local_up() {
        for face in CubeFace::ALL {
            let up = face.local_up();
            assert!(
                face.axis_a().dot(up).abs() < 1e-12,
                "axis_a not perpendicular to local_up for {face:?}"
            );
            assert!(
                face.axis_b().dot(up).abs() < 1e-12,
                "axis_b not perpendicular to local_up for {face:?}"
            );
        }
    }

    #[test]
    fn test_axis_a_cross_axis_b_equals_local_up() {
        for face in CubeFace::ALL {
            let cross = face.axis_a().cross(face.axis_b());
            let up = face.local_up();
            assert!(
                (cross - up).length() < 1e-12,
                "axis_a x axis_b != local_up for {face:?}: got {cross:?}, expected {up:?}"
            );
        }
    }

    #[test]
    fn test_pos_y_axes_match_swizzle_recipe() {
        // localUp = (0, 1, 0) => axisA = (1, 0, 0), axisB = up x axisA = (0, 0, -1).
        assert_eq!(CubeFace::PosY.axis_a(), DVec3::X);
        assert_eq!(CubeFace::PosY.axis_b(), DVec3::NEG_Z);
    }
}
