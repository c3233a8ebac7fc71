//! Two-phase planet builder: mesh every chunk, then commit the results.

use tracing::info;

use aster_cubesphere::CubeFace;
use aster_mesh::{ChunkMeshData, MeshError, build_chunk};

use crate::error::PlanetError;
use crate::parallel::parallel_map;
use crate::world::World;

/// Totals reported by a completed build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildStats {
    /// Chunks meshed across all six faces.
    pub chunks: usize,
    /// Vertices emitted across all chunks.
    pub vertices: usize,
    /// Triangles emitted across all chunks.
    pub triangles: usize,
}

/// Builds every chunk of a world and commits the meshes into their slots.
///
/// Phase 1 meshes all `6 * (world_size / 8)^2` chunks into a flat result
/// array, either sequentially or over a worker pool; each chunk writes only
/// its own reserved slot, so the parallel path needs no locks. Phase 2 runs
/// after the pool's completion barrier and assigns results in a fixed
/// `(face, x, y)` order on the calling thread.
///
/// Overlapping builds of the same world are not supported; callers serialize
/// build requests themselves.
pub struct PlanetBuilder {
    thread_count: usize,
}

impl PlanetBuilder {
    /// A builder using the default worker count: all CPUs minus two, to leave
    /// headroom for the main thread and the display side.
    #[must_use]
    pub fn new() -> Self {
        let cpus = num_cpus::get().max(2);
        Self {
            thread_count: (cpus - 2).max(1),
        }
    }

    /// A builder with an explicit worker count for the parallel path.
    #[must_use]
    pub fn with_thread_count(thread_count: usize) -> Self {
        Self {
            thread_count: thread_count.max(1),
        }
    }

    /// Workers used by the parallel path.
    #[inline]
    #[must_use]
    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    /// Mesh every chunk of `world` and commit the results.
    ///
    /// With `parallel` set, phase 1 fans out over the worker pool; the two
    /// paths produce bit-identical meshes. The first failed chunk aborts the
    /// build after the barrier and leaves every slot's previous mesh intact.
    /// Rebuilding an unchanged world is idempotent.
    pub fn build_planet(&self, world: &mut World, parallel: bool) -> Result<BuildStats, PlanetError> {
        let width = world.chunks_per_side();
        let chunks_per_face = width * width;
        let total = 6 * chunks_per_face;

        // Phase 1: mesh chunks into a flat, index-addressed result array.
        let build_one = |index: usize| -> Result<ChunkMeshData, MeshError> {
            let face_index = index / chunks_per_face;
            let x = (index / width) % width;
            let y = index % width;
            let face = &world.faces()[face_index];
            build_chunk(face.vertex_grid(), face.heights(), x, y)
        };

        let results: Vec<Result<ChunkMeshData, MeshError>> = if parallel {
            parallel_map(total, self.thread_count, build_one)
        } else {
            (0..total).map(build_one).collect()
        };

        // Barrier reached. Surface the first failure before touching any slot.
        let mut meshes = Vec::with_capacity(total);
        for result in results {
            meshes.push(result?);
        }

        // Phase 2: commit in fixed (face, x, y) order on this thread. The
        // flat index already enumerates that order.
        let mut stats = BuildStats {
            chunks: total,
            vertices: 0,
            triangles: 0,
        };
        for (index, mesh) in meshes.into_iter().enumerate() {
            let face = CubeFace::from_index(index / chunks_per_face);
            let x = (index / width) % width;
            let y = index % width;

            stats.vertices += mesh.vertex_count();
            stats.triangles += mesh.triangle_count();

            world.face_mut(face).chunk_mut(x, y).assign(mesh);
        }

        info!(
            "Planet built: {} chunks, {} vertices, {} triangles across 6 faces",
            stats.chunks, stats.vertices, stats.triangles
        );
        Ok(stats)
    }
}

impl Default for PlanetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
