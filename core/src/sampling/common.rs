//! Common sampling functions.

use crate::geometry::*;
use crate::math::*;
use crate::rng::*;

/// Uniformly sample a point on a disk centred at the origin. The angle is
/// drawn first, then the radius.
///
/// * `rng`    - Random number generator.
/// * `radius` - Radius of the disk.
pub fn disk_sample_2d(rng: &mut RNG, radius: Float) -> Point2f {
    let phi = rng.uniform_range(0.0, TWO_PI);
    let r = radius * rng.uniform_float().sqrt();
    Point2f::new(r * cos(phi), r * sin(phi))
}

/// Uniformly sample a point on a disk in the xy plane (z = 0).
///
/// * `rng`    - Random number generator.
/// * `radius` - Radius of the disk.
pub fn disk_sample(rng: &mut RNG, radius: Float) -> Vector3f {
    let p = disk_sample_2d(rng, radius);
    Vector3f::new(p.x, p.y, 0.0)
}

/// Uniformly sample a direction on the unit sphere. The polar axis is x: the
/// first component is uniform over [-1, 1].
///
/// * `rng` - Random number generator.
pub fn isotropic_direction(rng: &mut RNG) -> Vector3f {
    let w = rng.uniform_range(-1.0, 1.0);
    let phi = rng.uniform_range(0.0, TWO_PI);
    let s = max(0.0, 1.0 - w * w).sqrt();
    Vector3f::new(w, s * cos(phi), s * sin(phi))
}

/// Returns the PDF for uniformly sampling a direction from a sphere.
pub fn uniform_sphere_pdf() -> Float {
    INV_FOUR_PI
}

/// Sample a direction from the cosine-weighted hemisphere around +z.
///
/// * `rng` - Random number generator.
pub fn lambert_direction(rng: &mut RNG) -> Vector3f {
    let w = rng.uniform_float().sqrt();
    let phi = rng.uniform_range(0.0, TWO_PI);
    let s = max(0.0, 1.0 - w * w).sqrt();
    Vector3f::new(s * cos(phi), s * sin(phi), w)
}

/// Sample a direction from the cosine-weighted hemisphere around `normal`.
///
/// * `rng`    - Random number generator.
/// * `normal` - The hemisphere's axis. Need not be normalized but must not be
///              the zero vector.
pub fn lambert_direction_about(rng: &mut RNG, normal: &Vector3f) -> Vector3f {
    let local = lambert_direction(rng);
    Frame::from_normal(normal).to_world(&local)
}

/// Returns the PDF for cosine-weighted sampling a direction from a hemisphere.
///
/// * `cos_theta` - Cosine of the angle to the hemisphere's axis.
pub fn cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    cos_theta * INV_PI
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
