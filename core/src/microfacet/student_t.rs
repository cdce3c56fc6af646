//! Student-t Distribution

use super::*;

/// Implements an isotropic microfacet distribution whose slopes follow a
/// Student-t distribution. The shape γ controls the tail: it approaches
/// Beckmann as γ → ∞ and gets heavier as γ → 1.
#[derive(Copy, Clone, Debug)]
pub struct StudentTDistribution {
    /// Roughness.
    alpha: Float,

    /// Shape of the slope distribution. Must be greater than 1.
    gamma: Float,
}

impl StudentTDistribution {
    /// Create a new `StudentTDistribution`.
    ///
    /// Panics if `gamma` is not greater than 1.
    ///
    /// * `alpha` - Roughness.
    /// * `gamma` - Shape of the slope distribution.
    pub fn new(alpha: Float, gamma: Float) -> Self {
        assert!(gamma > 1.0, "Student-t shape must be greater than 1, got {gamma}");
        Self {
            alpha: max(0.001, alpha),
            gamma,
        }
    }

    /// Returns the roughness.
    pub fn alpha(&self) -> Float {
        self.alpha
    }

    /// Returns the shape.
    pub fn gamma(&self) -> Float {
        self.gamma
    }
}

impl MicrofacetDistribution for StudentTDistribution {
    /// Return the differential area of microfacets oriented with the surface
    /// normal `wh`.
    ///
    /// * `wh` - A sample normal from the distrubition of normal vectors.
    fn d(&self, wh: &Vector3f) -> Float {
        let tan2_theta = tan_2_theta(wh);
        if wh.z <= 0.0 || tan2_theta.is_infinite() {
            return 0.0;
        }

        let alpha2 = self.alpha * self.alpha;
        let cos4_theta = cos_2_theta(wh) * cos_2_theta(wh);
        (1.0 + tan2_theta / (alpha2 * (self.gamma - 1.0))).powf(-self.gamma) / (PI * alpha2 * cos4_theta)
    }

    /// Returns a sample from the distribution of normal vectors.
    ///
    /// * `wo`  - Outgoing direction.
    /// * `rng` - Random number generator.
    fn sample_wh(&self, wo: &Vector3f, rng: &mut RNG) -> Vector3f {
        let u0 = rng.uniform_float();
        let u1 = rng.uniform_float();

        // Invert P(tan²θ < t) = 1 - (1 + t / (α²(γ - 1)))^(1 - γ).
        let tan2_theta =
            self.alpha * self.alpha * (self.gamma - 1.0) * ((1.0 - u0).powf(1.0 / (1.0 - self.gamma)) - 1.0);
        let phi = u1 * TWO_PI;

        normal_from_slope(wo, tan2_theta, phi)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
