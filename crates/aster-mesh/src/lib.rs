//! Pillar-extruded chunk meshing for cube-sphere planets.
//!
//! Turns one 8x8-cell chunk of a face's projected vertex grid and height map
//! into a watertight mesh of per-cell pillars: a height-scaled top cap and
//! two stacked wall rings tapering toward the planet center.

mod atlas;
mod chunk_mesh;
mod normals;
mod pillar;

pub use atlas::{ATLAS_TILES_PER_ROW, GRASS_TILE, UV_STEP, tile_origin};
pub use chunk_mesh::{
    CELLS_PER_CHUNK, CHUNK_INDEX_COUNT, CHUNK_SIZE, CHUNK_VERTEX_COUNT, ChunkMeshData,
    INDICES_PER_CELL, VERTS_PER_CELL,
};
pub use normals::compute_normals;
pub use pillar::{MeshError, build_chunk};
