//! Fixed texture atlas layout for pillar UVs.
//!
//! The atlas is a 16x16 grid of square tiles. The core mesher textures every
//! pillar from the single grass tile; picking tiles per pillar material is a
//! later concern.

use glam::Vec2;

/// Tiles per atlas row and column.
pub const ATLAS_TILES_PER_ROW: usize = 16;

/// UV extent of one tile.
pub const UV_STEP: f32 = 1.0 / ATLAS_TILES_PER_ROW as f32;

/// `(column, row)` of the grass tile every pillar currently samples.
pub const GRASS_TILE: (usize, usize) = (2, 14);

/// Top-left UV corner of the tile at `(col, row)`.
///
/// Rows count upward in UV space, so row 14 sits near the top of the atlas;
/// offsets into a tile subtract from `y`.
#[inline]
#[must_use]
pub fn tile_origin(col: usize, row: usize) -> Vec2 {
    Vec2::new(col as f32 * UV_STEP, row as f32 * UV_STEP)
}
