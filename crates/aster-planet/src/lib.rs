//! Planet assembly: six cube faces of chunked pillar terrain, and the
//! sequential / worker-pool builders that mesh them.

mod builder;
mod error;
mod face;
mod parallel;
mod world;

pub use builder::{BuildStats, PlanetBuilder};
pub use error::PlanetError;
pub use face::{ChunkSlot, PlanetFace};
pub use parallel::parallel_map;
pub use world::World;
