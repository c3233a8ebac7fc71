//! Flat mesh buffers for exactly one chunk.

use glam::{Vec2, Vec3};

/// Cells per chunk edge. Faces are carved into chunks of this fixed size, so
/// a face's `world_size` must be a multiple of it.
pub const CHUNK_SIZE: usize = 8;

/// Cells per chunk: `CHUNK_SIZE^2`.
pub const CELLS_PER_CHUNK: usize = CHUNK_SIZE * CHUNK_SIZE;

/// Vertices emitted per cell: 4 top cap + 8 middle ring + 8 base ring.
pub const VERTS_PER_CELL: usize = 20;

/// Indices emitted per cell: 18 triangles (top quad + 2x4 wall quads).
pub const INDICES_PER_CELL: usize = 54;

/// Total vertices in a chunk mesh.
pub const CHUNK_VERTEX_COUNT: usize = CELLS_PER_CHUNK * VERTS_PER_CELL;

/// Total indices in a chunk mesh.
pub const CHUNK_INDEX_COUNT: usize = CELLS_PER_CHUNK * INDICES_PER_CELL;

/// The mesh output for one chunk: flat vertex, triangle-index, and uv buffers
/// ready for GPU upload.
///
/// Produced fresh by every build and never mutated in place. Buffer sizes are
/// always exactly [`CHUNK_VERTEX_COUNT`] / [`CHUNK_INDEX_COUNT`] /
/// [`CHUNK_VERTEX_COUNT`]; each cell owns the fixed slice starting at
/// `cell * VERTS_PER_CELL` (vertices, uvs) and `cell * INDICES_PER_CELL`
/// (indices), with no vertex sharing across cells.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkMeshData {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Triangle indices into `vertices`, 3 per triangle.
    pub indices: Vec<u32>,
    /// Per-vertex texture coordinates.
    pub uvs: Vec<Vec2>,
}

impl ChunkMeshData {
    /// A zeroed chunk-sized mesh for the mesher to write into at fixed offsets.
    #[must_use]
    pub(crate) fn zeroed() -> Self {
        Self {
            vertices: vec![Vec3::ZERO; CHUNK_VERTEX_COUNT],
            indices: vec![0; CHUNK_INDEX_COUNT],
            uvs: vec![Vec2::ZERO; CHUNK_VERTEX_COUNT],
        }
    }

    /// Number of vertices in the mesh.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles in the mesh.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_buffer_sizes() {
        assert_eq!(CHUNK_VERTEX_COUNT, 1280);
        assert_eq!(CHUNK_INDEX_COUNT, 3456);
        let mesh = ChunkMeshData::zeroed();
        assert_eq!(mesh.vertex_count(), 1280);
        assert_eq!(mesh.triangle_count(), 1152);
        assert_eq!(mesh.uvs.len(), mesh.vertices.len());
    }
}
