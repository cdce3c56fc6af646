//! Torrance-Sparrow Microfacet Reflection Model

use super::*;
use crate::microfacet::*;
use std::sync::Arc;

/// Single scattering BRDF of a surface of perfectly reflecting microfacets
/// (rough mirror). The Fresnel term is 1.
#[derive(Clone)]
pub struct MicrofacetReflection {
    /// The microfacet distribution model.
    distribution: ArcMicrofacetDistribution,
}

impl MicrofacetReflection {
    /// Create a new instance of `MicrofacetReflection`.
    ///
    /// * `distribution` - Microfacet distribution.
    pub fn new(distribution: ArcMicrofacetDistribution) -> Self {
        Self {
            distribution: Arc::clone(&distribution),
        }
    }

    /// Returns the microfacet distribution.
    pub fn distribution(&self) -> &ArcMicrofacetDistribution {
        &self.distribution
    }
}

impl BSDF for MicrofacetReflection {
    /// Returns the cosine-weighted scattering density
    /// `D(wh) G(wi, wo) / (4 |cos θi|)`.
    ///
    /// * `wi` - Incident direction.
    /// * `wo` - Outgoing direction.
    fn eval(&self, wi: &Vector3f, wo: &Vector3f) -> Float {
        let cos_theta_i = cos_theta(wi);
        let cos_theta_o = cos_theta(wo);

        // Only the upper side of the surface reflects.
        if cos_theta_i <= 0.0 || cos_theta_o <= 0.0 {
            return 0.0;
        }

        let wh = *wi + *wo;
        if wh.length_squared() == 0.0 {
            return 0.0;
        }
        let wh = wh.normalize();

        self.distribution.d(&wh) * self.distribution.g(wo, wi) / (4.0 * cos_theta_i)
    }

    /// Samples a microfacet normal and reflects `wi` about it.
    ///
    /// * `wi`  - Incident direction.
    /// * `rng` - Random number generator.
    fn sample(&self, wi: &Vector3f, rng: &mut RNG) -> Option<BSDFSample> {
        if wi.z <= 0.0 {
            return None;
        }

        let wh = self.distribution.sample_wh(wi, rng);
        let wi_dot_wh = wi.dot(&wh);
        if wi_dot_wh <= 0.0 {
            // Should be rare.
            return None;
        }

        let wo = reflect(wi, &wh);
        if !same_hemisphere(wi, &wo) {
            return None;
        }

        let pdf = self.distribution.pdf(wi, &wh) / (4.0 * wi_dot_wh);
        if pdf > 0.0 {
            Some(BSDFSample::new(wo, pdf, self.eval(wi, &wo)))
        } else {
            None
        }
    }

    /// Evaluates the PDF of `sample()`.
    ///
    /// * `wi` - Incident direction.
    /// * `wo` - Outgoing direction.
    fn pdf(&self, wi: &Vector3f, wo: &Vector3f) -> Float {
        if wi.z <= 0.0 || wo.z <= 0.0 {
            return 0.0;
        }

        let wh = (*wi + *wo).normalize();
        self.distribution.pdf(wi, &wh) / (4.0 * wi.dot(&wh))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
