//! Terrain data for pillar planets: per-cell height fields and deterministic
//! seeded generation.

mod height_field;
mod seed;

pub use height_field::HeightField;
pub use seed::{derive_face_seed, face_rng};
