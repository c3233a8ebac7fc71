//! The owned world aggregate: exactly six planet faces.

use aster_cubesphere::CubeFace;
use aster_mesh::CHUNK_SIZE;
use aster_terrain::face_rng;

use crate::error::PlanetError;
use crate::face::PlanetFace;

/// A cube-sphere pillar world.
///
/// Owns six [`PlanetFace`]s in [`CubeFace::ALL`] order. The world is an
/// explicit value passed to every operation; nothing about it is global, and
/// two worlds never share state.
#[derive(Debug)]
pub struct World {
    faces: [PlanetFace; 6],
    world_size: usize,
    seed: u64,
}

impl World {
    /// Create a world at `world_size` cells per face side.
    ///
    /// Each face's height map draws from its own RNG stream derived from
    /// `seed`, so the same `(world_size, seed)` pair always reproduces the
    /// same world. Fails with [`PlanetError::InvalidWorldSize`] unless
    /// `world_size` is a positive multiple of 8.
    pub fn new(world_size: usize, seed: u64) -> Result<Self, PlanetError> {
        let faces = [
            Self::make_face(world_size, seed, CubeFace::PosX)?,
            Self::make_face(world_size, seed, CubeFace::NegX)?,
            Self::make_face(world_size, seed, CubeFace::PosY)?,
            Self::make_face(world_size, seed, CubeFace::NegY)?,
            Self::make_face(world_size, seed, CubeFace::PosZ)?,
            Self::make_face(world_size, seed, CubeFace::NegZ)?,
        ];
        Ok(Self {
            faces,
            world_size,
            seed,
        })
    }

    fn make_face(world_size: usize, seed: u64, face: CubeFace) -> Result<PlanetFace, PlanetError> {
        let mut rng = face_rng(seed, face.index());
        PlanetFace::new(world_size, face, &mut rng)
    }

    /// Cells per face side.
    #[inline]
    #[must_use]
    pub fn world_size(&self) -> usize {
        self.world_size
    }

    /// The seed the height maps were generated from.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Chunks per face side: `world_size / 8`.
    #[inline]
    #[must_use]
    pub fn chunks_per_side(&self) -> usize {
        self.world_size / CHUNK_SIZE
    }

    /// All six faces in [`CubeFace::ALL`] order.
    #[inline]
    #[must_use]
    pub fn faces(&self) -> &[PlanetFace; 6] {
        &self.faces
    }

    /// The face for the given cube face.
    #[inline]
    #[must_use]
    pub fn face(&self, face: CubeFace) -> &PlanetFace {
        &self.faces[face.index()]
    }

    /// Mutable access to the face for the given cube face.
    #[inline]
    pub fn face_mut(&mut self, face: CubeFace) -> &mut PlanetFace {
        &mut self.faces[face.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_always_has_six_faces() {
        let world = World::new(8, 42).unwrap();
        assert_eq!(world.faces().len(), 6);
        for (i, face) in world.faces().iter().enumerate() {
            assert_eq!(face.face(), CubeFace::ALL[i], "Face {i} out of order");
        }
    }

    #[test]
    fn test_indivisible_world_size_is_rejected() {
        let err = World::new(10, 42).unwrap_err();
        assert!(
            matches!(err, PlanetError::InvalidWorldSize { world_size: 10, .. }),
            "Expected InvalidWorldSize, got {err:?}"
        );
    }

    #[test]
    fn test_same_seed_reproduces_heights() {
        let a = World::new(16, 7).unwrap();
        let b = World::new(16, 7).unwrap();
        for face in CubeFace::ALL {
            assert_eq!(
                a.face(face).heights(),
                b.face(face).heights(),
                "Heights differ on {face:?} for identical seeds"
            );
        }
    }

    #[test]
    fn test_faces_draw_from_distinct_streams() {
        let world = World::new(16, 7).unwrap();
        let pos_x = world.face(CubeFace::PosX).heights();
        let neg_x = world.face(CubeFace::NegX).heights();
        assert_ne!(pos_x, neg_x, "Two faces should not share a height map");
    }

    #[test]
    fn test_geometry_ignores_seed() {
        let a = World::new(8, 1).unwrap();
        let b = World::new(8, 2).unwrap();
        for face in CubeFace::ALL {
            for x in 0..=8 {
                for y in 0..=8 {
                    assert_eq!(
                        a.face(face).vertex_grid().get(x, y),
                        b.face(face).vertex_grid().get(x, y),
                        "Base vertex ({x}, {y}) on {face:?} should not depend on the seed"
                    );
                }
            }
        }
    }
}
