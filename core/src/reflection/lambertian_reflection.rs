//! Lambertian Reflection

use super::*;
use crate::sampling::*;

/// BRDF for the Lambertian model for perfect diffuse surfaces that scatters
/// incident illumination equally in all directions.
#[derive(Copy, Clone, Debug)]
pub struct LambertianReflection {
    /// Albedo which gives the fraction of incident light that is scattered.
    r: Float,
}

impl LambertianReflection {
    /// Create a new instance of `LambertianReflection`.
    ///
    /// * `r` - Albedo which gives the fraction of incident light that is
    ///         scattered.
    pub fn new(r: Float) -> Self {
        Self { r }
    }

    /// Computes the hemispherical-directional reflectance function ρ.
    pub fn rho(&self) -> Float {
        self.r
    }
}

impl BSDF for LambertianReflection {
    /// Returns the cosine-weighted scattering density.
    ///
    /// * `wi` - Incident direction.
    /// * `wo` - Outgoing direction.
    fn eval(&self, wi: &Vector3f, wo: &Vector3f) -> Float {
        if same_hemisphere(wi, wo) {
            self.r * INV_PI * abs_cos_theta(wo)
        } else {
            0.0
        }
    }

    /// Samples a cosine-weighted direction in the hemisphere of `wi`.
    ///
    /// * `wi`  - Incident direction.
    /// * `rng` - Random number generator.
    fn sample(&self, wi: &Vector3f, rng: &mut RNG) -> Option<BSDFSample> {
        if wi.z == 0.0 {
            return None;
        }

        let mut wo = lambert_direction(rng);
        if wi.z < 0.0 {
            wo.z = -wo.z;
        }

        let pdf = self.pdf(wi, &wo);
        if pdf == 0.0 {
            None
        } else {
            Some(BSDFSample::new(wo, pdf, self.eval(wi, &wo)))
        }
    }

    /// Evaluates the PDF of `sample()`.
    ///
    /// * `wi` - Incident direction.
    /// * `wo` - Outgoing direction.
    fn pdf(&self, wi: &Vector3f, wo: &Vector3f) -> Float {
        if same_hemisphere(wi, wo) {
            cosine_hemisphere_pdf(abs_cos_theta(wo))
        } else {
            0.0
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
