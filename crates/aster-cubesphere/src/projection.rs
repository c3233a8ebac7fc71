//! Closed-form cube-to-sphere projection.

use glam::DVec3;

/// Project a point on the surface of the `[-1, 1]` cube onto the unit sphere.
///
/// Uses the analytic Everitt/Mathworld mapping rather than plain
/// normalization, which keeps cell areas far more uniform near cube edges
/// and corners:
///
/// ```text
/// sx = x * sqrt(1 - y²/2 - z²/2 + y²z²/3)
/// sy = y * sqrt(1 - x²/2 - z²/2 + x²z²/3)
/// sz = z * sqrt(1 - x²/2 - y²/2 + x²y²/3)
/// ```
///
/// Pure and deterministic; every input with components in `[-1, 1]` produces
/// a finite, NaN-free result (the radicands are non-negative on that domain).
#[inline]
#[must_use]
pub fn cube_to_sphere(p: DVec3) -> DVec3 {
    let x2 = p.x * p.x;
    let y2 = p.y * p.y;
    let z2 = p.z * p.z;

    DVec3::new(
        p.x * (1.0 - y2 / 2.0 - z2 / 2.0 + y2 * z2 / 3.0).sqrt(),
        p.y * (1.0 - x2 / 2.0 - z2 / 2.0 + x2 * z2 / 3.0).sqrt(),
        p.z * (1.0 - x2 / 2.0 - y2 / 2.0 + x2 * y2 / 3.0).sqrt(),
    )
}
