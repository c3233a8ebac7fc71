//! The pillar-extrusion chunk mesher.
//!
//! Every cell becomes a free-standing pillar: a quad cap at the cell's height,
//! a wall ring one unit below it, and a base ring resting on the unit sphere.
//! Ring corners are duplicated so each of the four walls carries its own uv
//! seam. Cells never share vertices, and every cell writes to fixed offsets in
//! the chunk's flat buffers.

use glam::Vec2;
use thiserror::Error;

use aster_cubesphere::VertexGrid;
use aster_terrain::HeightField;

use crate::atlas::{GRASS_TILE, UV_STEP, tile_origin};
use crate::chunk_mesh::{CHUNK_SIZE, ChunkMeshData, INDICES_PER_CELL, VERTS_PER_CELL};

/// Errors returned by the chunk mesher. Both variants are contract violations
/// on the caller's side, reported instead of clamped.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The requested chunk coordinate lies outside the face's chunk grid.
    #[error("chunk coordinate ({chunk_x}, {chunk_y}) outside face chunk grid 0..{limit}")]
    ChunkOutOfRange {
        /// Requested chunk column.
        chunk_x: usize,
        /// Requested chunk row.
        chunk_y: usize,
        /// Chunks per face side.
        limit: usize,
    },

    /// The vertex grid and height field describe differently sized faces.
    #[error("vertex grid is {grid_size} cells per side but height field is {field_size}")]
    SizeMismatch {
        /// Cells per side of the vertex grid.
        grid_size: usize,
        /// Cells per side of the height field.
        field_size: usize,
    },
}

/// Duplicated wall-ring order: c00, c00, c10, c10, c11, c11, c01, c01
/// (corner ids 0..4 are c00, c10, c01, c11).
const RING_CORNERS: [usize; 8] = [0, 0, 1, 1, 3, 3, 2, 2];

/// Per-ring-vertex uv offsets, in tile steps from the tile origin. The middle
/// ring applies them at one step, the base ring at two, which stretches the
/// tile down the taller lower wall segment.
const RING_UV_OFFSETS: [(f32, f32); 8] = [
    (-1.0, 0.0),
    (0.0, 1.0),
    (1.0, 1.0),
    (2.0, 0.0),
    (2.0, -1.0),
    (1.0, -2.0),
    (0.0, -2.0),
    (-1.0, -1.0),
];

/// Wall quads as `[near_a, near_b, far_a, far_b]` cell-local vertex ids, in
/// back/right/front/left order. Upper walls span cap ring to middle ring,
/// lower walls span middle ring to base ring.
const UPPER_WALLS: [[usize; 4]; 4] = [[0, 1, 5, 6], [1, 3, 7, 8], [3, 2, 9, 10], [2, 0, 11, 4]];
const LOWER_WALLS: [[usize; 4]; 4] = [
    [5, 6, 13, 14],
    [7, 8, 15, 16],
    [9, 10, 17, 18],
    [11, 4, 19, 12],
];

/// Build the mesh for chunk `(chunk_x, chunk_y)` of one face.
///
/// Reads the face's precomputed vertex grid and height map only; the same
/// inputs always produce bit-identical output. The result always holds
/// exactly [`CHUNK_VERTEX_COUNT`](crate::CHUNK_VERTEX_COUNT) vertices and
/// [`CHUNK_INDEX_COUNT`](crate::CHUNK_INDEX_COUNT) indices.
pub fn build_chunk(
    grid: &VertexGrid,
    heights: &HeightField,
    chunk_x: usize,
    chunk_y: usize,
) -> Result<ChunkMeshData, MeshError> {
    if grid.world_size() != heights.world_size() {
        return Err(MeshError::SizeMismatch {
            grid_size: grid.world_size(),
            field_size: heights.world_size(),
        });
    }
    let limit = grid.world_size() / CHUNK_SIZE;
    if chunk_x >= limit || chunk_y >= limit {
        return Err(MeshError::ChunkOutOfRange {
            chunk_x,
            chunk_y,
            limit,
        });
    }

    let mut mesh = ChunkMeshData::zeroed();
    let x_offset = chunk_x * CHUNK_SIZE;
    let y_offset = chunk_y * CHUNK_SIZE;

    for x in 0..CHUNK_SIZE {
        for y in 0..CHUNK_SIZE {
            let cell = x * CHUNK_SIZE + y;
            emit_cell(&mut mesh, grid, heights, x + x_offset, y + y_offset, cell);
        }
    }

    Ok(mesh)
}

/// Write one cell's 20 vertices, 20 uvs, and 54 indices at its fixed offsets.
fn emit_cell(
    mesh: &mut ChunkMeshData,
    grid: &VertexGrid,
    heights: &HeightField,
    gx: usize,
    gy: usize,
    cell: usize,
) {
    let vi = cell * VERTS_PER_CELL;
    let ti = cell * INDICES_PER_CELL;

    // Corner directions on the unit sphere, c00/c10/c01/c11.
    let corners = [
        grid.get(gx, gy),
        grid.get(gx + 1, gy),
        grid.get(gx, gy + 1),
        grid.get(gx + 1, gy + 1),
    ];
    let height = heights.get(gx, gy);
    let tile = tile_origin(GRASS_TILE.0, GRASS_TILE.1);

    // Top cap, pushed out to the pillar height.
    for (i, corner) in corners.iter().enumerate() {
        mesh.vertices[vi + i] = (*corner * height).as_vec3();
    }
    mesh.uvs[vi] = tile;
    mesh.uvs[vi + 1] = tile + Vec2::new(UV_STEP, 0.0);
    mesh.uvs[vi + 2] = tile - Vec2::new(0.0, UV_STEP);
    mesh.uvs[vi + 3] = tile + Vec2::new(UV_STEP, -UV_STEP);

    // Middle ring, one unit below the cap.
    let mid_height = height - 1.0;
    for (i, &corner_id) in RING_CORNERS.iter().enumerate() {
        mesh.vertices[vi + 4 + i] = (corners[corner_id] * mid_height).as_vec3();
        let (du, dv) = RING_UV_OFFSETS[i];
        mesh.uvs[vi + 4 + i] = tile + Vec2::new(du, dv) * UV_STEP;
    }

    // Base ring, resting on the unit sphere.
    for (i, &corner_id) in RING_CORNERS.iter().enumerate() {
        mesh.vertices[vi + 12 + i] = corners[corner_id].as_vec3();
        let (du, dv) = RING_UV_OFFSETS[i];
        mesh.uvs[vi + 12 + i] = tile + Vec2::new(du, dv) * (UV_STEP * 2.0);
    }

    // Top cap quad.
    let v = vi as u32;
    mesh.indices[ti..ti + 6].copy_from_slice(&[v, v + 1, v + 2, v + 1, v + 3, v + 2]);

    // Wall quads, upper ring then lower ring.
    for (w, wall) in UPPER_WALLS.iter().chain(LOWER_WALLS.iter()).enumerate() {
        let [a, b, c, d] = wall.map(|id| (vi + id) as u32);
        let at = ti + 6 + w * 6;
        mesh.indices[at..at + 6].copy_from_slice(&[a, c, d, b, a, d]);
    }
}
