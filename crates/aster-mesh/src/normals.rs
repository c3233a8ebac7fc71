//! Vertex-normal recomputation for freshly assigned chunk meshes.

use glam::Vec3;

use crate::chunk_mesh::ChunkMeshData;

/// Compute smooth per-vertex normals by area-weighted averaging.
///
/// Accumulates each triangle's cross product at its three vertices, then
/// normalizes. The unnormalized cross product weights large triangles more
/// heavily, which is the behavior expected of a standard recompute pass.
/// Vertices touched only by degenerate triangles come back as zero vectors.
#[must_use]
pub fn compute_normals(mesh: &ChunkMeshData) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; mesh.vertices.len()];

    for tri in mesh.indices.chunks_exact(3) {
        let i0 = tri[0] as usize;
        let i1 = tri[1] as usize;
        let i2 = tri[2] as usize;

        let a = mesh.vertices[i0];
        let face_normal = (mesh.vertices[i1] - a).cross(mesh.vertices[i2] - a);

        normals[i0] += face_normal;
        normals[i1] += face_normal;
        normals[i2] += face_normal;
    }

    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }
    normals
}
