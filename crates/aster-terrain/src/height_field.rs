//! Per-cell pillar heights for one cube face.

use rand::Rng;

/// Half-width of the random perturbation applied around the base height.
const PERTURBATION: f64 = 2.0;

/// A `world_size x world_size` grid of scalar pillar heights, one per cell.
///
/// Heights start out as `world_size` (the nominal planet radius in cells)
/// randomly perturbed by `±2`, and may be rewritten by later terrain passes
/// through [`set`](Self::set).
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    world_size: usize,
    values: Vec<f64>,
}

impl HeightField {
    /// Generate a height field from the given random source.
    ///
    /// Each cell is `world_size + uniform(-2, 2)`. The RNG is injected by the
    /// caller, so a fixed seed reproduces the exact same field.
    #[must_use]
    pub fn generate(world_size: usize, rng: &mut impl Rng) -> Self {
        let base = world_size as f64;
        let values = (0..world_size * world_size)
            .map(|_| base + rng.random_range(-PERTURBATION..PERTURBATION))
            .collect();
        Self { world_size, values }
    }

    /// A uniform field where every cell has the same height.
    #[must_use]
    pub fn flat(world_size: usize, height: f64) -> Self {
        Self {
            world_size,
            values: vec![height; world_size * world_size],
        }
    }

    /// The field resolution in cells per side.
    #[inline]
    #[must_use]
    pub fn world_size(&self) -> usize {
        self.world_size
    }

    /// The height of cell `(x, y)`. Valid coordinates satisfy
    /// `0 <= x, y < world_size`.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        debug_assert!(x < self.world_size, "cell x {x} out of range");
        debug_assert!(y < self.world_size, "cell y {y} out of range");
        self.values[x * self.world_size + y]
    }

    /// Overwrite the height of cell `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, height: f64) {
        debug_assert!(x < self.world_size, "cell x {x} out of range");
        debug_assert!(y < self.world_size, "cell y {y} out of range");
        self.values[x * self.world_size + y] = height;
    }
}
