//! Planet construction and build error types.

use aster_mesh::MeshError;

/// Errors from world construction or planet builds.
#[derive(Debug, thiserror::Error)]
pub enum PlanetError {
    /// The requested world size cannot be carved into whole chunks.
    #[error("world size {world_size} is not divisible by the chunk size {chunk_size}")]
    InvalidWorldSize {
        /// The rejected world size.
        world_size: usize,
        /// The fixed chunk edge length.
        chunk_size: usize,
    },

    /// A chunk build failed during phase 1; no mesh slot was touched.
    #[error("chunk build failed: {0}")]
    ChunkBuild(#[from] MeshError),
}
