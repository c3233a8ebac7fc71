//! One cube face of a planet: projected vertex grid, height map, chunk slots.

use rand::Rng;

use aster_cubesphere::{CubeFace, VertexGrid};
use aster_mesh::{CHUNK_SIZE, ChunkMeshData};
use aster_terrain::HeightField;

use crate::error::PlanetError;

/// A persistent slot for one chunk's mesh.
///
/// The slot outlives any individual build: assignment replaces the mesh
/// wholesale, and a failed build leaves the previous mesh in place. The
/// display side owns normal recomputation, so assignment only flags it.
#[derive(Debug, Default)]
pub struct ChunkSlot {
    mesh: Option<ChunkMeshData>,
    normals_dirty: bool,
}

impl ChunkSlot {
    /// The slot's current mesh, if a build has completed.
    #[inline]
    #[must_use]
    pub fn mesh(&self) -> Option<&ChunkMeshData> {
        self.mesh.as_ref()
    }

    /// Whether the mesh has been replaced since normals were last recomputed.
    #[inline]
    #[must_use]
    pub fn normals_dirty(&self) -> bool {
        self.normals_dirty
    }

    /// Replace the slot's mesh and flag normals for recomputation.
    pub fn assign(&mut self, mesh: ChunkMeshData) {
        self.mesh = Some(mesh);
        self.normals_dirty = true;
    }

    /// Clear the dirty flag once the display side has recomputed normals.
    pub fn mark_normals_clean(&mut self) {
        self.normals_dirty = false;
    }
}

/// One of the six faces of a planet.
///
/// Owns the face's immutable sphere-projected vertex grid, its mutable height
/// map, and a `(world_size / 8)^2` grid of chunk slots whose shape is fixed
/// at construction.
#[derive(Debug)]
pub struct PlanetFace {
    face: CubeFace,
    grid: VertexGrid,
    heights: HeightField,
    chunks: Vec<ChunkSlot>,
}

impl PlanetFace {
    /// Construct a face at `world_size` cells per side.
    ///
    /// Heights are drawn from the injected RNG (`world_size ± 2` per cell).
    /// Fails with [`PlanetError::InvalidWorldSize`] unless `world_size` is a
    /// positive multiple of the chunk size.
    pub fn new(
        world_size: usize,
        face: CubeFace,
        rng: &mut impl Rng,
    ) -> Result<Self, PlanetError> {
        if world_size == 0 || world_size % CHUNK_SIZE != 0 {
            return Err(PlanetError::InvalidWorldSize {
                world_size,
                chunk_size: CHUNK_SIZE,
            });
        }

        let width = world_size / CHUNK_SIZE;
        let mut chunks = Vec::with_capacity(width * width);
        chunks.resize_with(width * width, ChunkSlot::default);

        Ok(Self {
            face,
            grid: VertexGrid::new(face, world_size),
            heights: HeightField::generate(world_size, rng),
            chunks,
        })
    }

    /// Which cube face this is.
    #[inline]
    #[must_use]
    pub fn face(&self) -> CubeFace {
        self.face
    }

    /// The face's sphere-projected vertex grid.
    #[inline]
    #[must_use]
    pub fn vertex_grid(&self) -> &VertexGrid {
        &self.grid
    }

    /// The face's height map.
    #[inline]
    #[must_use]
    pub fn heights(&self) -> &HeightField {
        &self.heights
    }

    /// Mutable height map access for terrain passes. The next build picks the
    /// changes up; existing chunk meshes are untouched until then.
    #[inline]
    pub fn heights_mut(&mut self) -> &mut HeightField {
        &mut self.heights
    }

    /// Chunks per face side: `world_size / 8`.
    #[inline]
    #[must_use]
    pub fn chunks_per_side(&self) -> usize {
        self.grid.world_size() / CHUNK_SIZE
    }

    /// The chunk slot at chunk coordinate `(x, y)`.
    #[inline]
    #[must_use]
    pub fn chunk(&self, x: usize, y: usize) -> &ChunkSlot {
        let width = self.chunks_per_side();
        debug_assert!(x < width && y < width, "chunk ({x}, {y}) out of range");
        &self.chunks[x * width + y]
    }

    /// Mutable chunk slot access.
    #[inline]
    pub fn chunk_mut(&mut self, x: usize, y: usize) -> &mut ChunkSlot {
        let width = self.chunks_per_side();
        debug_assert!(x < width && y < width, "chunk ({x}, {y}) out of range");
        &mut self.chunks[x * width + y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_world_size_must_be_divisible_by_chunk_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = PlanetFace::new(10, CubeFace::PosX, &mut rng).unwrap_err();
        assert!(
            matches!(
                err,
                PlanetError::InvalidWorldSize {
                    world_size: 10,
                    chunk_size: 8
                }
            ),
            "Expected InvalidWorldSize, got {err:?}"
        );
        assert!(PlanetFace::new(0, CubeFace::PosX, &mut rng).is_err());
    }

    #[test]
    fn test_chunk_grid_shape_matches_world_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let face = PlanetFace::new(32, CubeFace::NegY, &mut rng).unwrap();
        assert_eq!(face.chunks_per_side(), 4);
        assert_eq!(face.vertex_grid().side_len(), 33);
        assert_eq!(face.heights().world_size(), 32);
    }

    #[test]
    fn test_slots_start_empty_and_assignment_flags_normals() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut face = PlanetFace::new(8, CubeFace::PosZ, &mut rng).unwrap();
        assert!(face.chunk(0, 0).mesh().is_none());
        assert!(!face.chunk(0, 0).normals_dirty());

        let mesh = aster_mesh::build_chunk(face.vertex_grid(), face.heights(), 0, 0).unwrap();
        face.chunk_mut(0, 0).assign(mesh);
        assert!(face.chunk(0, 0).mesh().is_some());
        assert!(face.chunk(0, 0).normals_dirty());

        face.chunk_mut(0, 0).mark_normals_clean();
        assert!(!face.chunk(0, 0).normals_dirty());
        assert!(face.chunk(0, 0).mesh().is_some());
    }
}
