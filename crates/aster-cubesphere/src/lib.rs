//! Cube-sphere geometry: the six cube faces, cube-to-sphere projection, and
//! per-face grids of sphere-projected vertices.

mod cube_face;
mod projection;
mod vertex_grid;

pub use cube_face::CubeFace;
pub use projection::cube_to_sphere;
pub use vertex_grid::VertexGrid;
