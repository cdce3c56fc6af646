//! Reflection and surface scattering models

use crate::geometry::*;
use crate::math::*;
use crate::rng::*;

mod bsdf_sample;
mod lambertian_reflection;
mod microfacet_reflection;

// Re-export
pub use bsdf_sample::*;
pub use lambertian_reflection::*;
pub use microfacet_reflection::*;

/// Interface for scattering models. Directions are in the local shading frame
/// where the normal is +z and both point away from the surface.
pub trait BSDF {
    /// Returns the cosine-weighted scattering density `f(wi, wo) |cos θo|` for
    /// the given pair of directions.
    ///
    /// * `wi` - Incident direction.
    /// * `wo` - Outgoing direction.
    fn eval(&self, wi: &Vector3f, wo: &Vector3f) -> Float;

    /// Samples an outgoing direction. Returns `None` when the sample is
    /// absorbed.
    ///
    /// * `wi`  - Incident direction.
    /// * `rng` - Random number generator.
    fn sample(&self, wi: &Vector3f, rng: &mut RNG) -> Option<BSDFSample>;

    /// Evaluates the PDF of `sample()` with respect to solid angle.
    ///
    /// * `wi` - Incident direction.
    /// * `wo` - Outgoing direction.
    fn pdf(&self, wi: &Vector3f, wo: &Vector3f) -> Float;
}
