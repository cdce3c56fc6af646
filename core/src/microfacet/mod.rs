//! Microfacet Distribution Models

use crate::geometry::*;
use crate::math::*;
use crate::quadrature::*;
use crate::rng::*;
use std::sync::Arc;

mod beckmann;
mod student_t;

// Re-exports
pub use beckmann::*;
pub use student_t::*;

/// Interface for microfacet distribution models. All directions are in the
/// local frame where the macrosurface normal is +z.
pub trait MicrofacetDistribution {
    /// Return the differential area of microfacets oriented with the surface
    /// normal `wh`. Zero for normals below the macrosurface.
    ///
    /// * `wh` - A sample normal from the distrubition of normal vectors.
    fn d(&self, wh: &Vector3f) -> Float;

    /// Returns the projected area of the microsurface seen from direction `w`,
    /// `∫ D(m) max(0, w·m) dm`.
    ///
    /// The default integrates `d()` over the upper hemisphere with the
    /// tensor-product Gauss rule.
    ///
    /// * `w` - The direction from camera/viewer.
    fn sigma(&self, w: &Vector3f) -> Float {
        sigma_by_quadrature(self, w, &GAUSS_100)
    }

    /// Returns the invisible masked microfacet area per visible microfacet area.
    ///
    /// The default derives it from `sigma()`.
    ///
    /// * `w` - The direction from camera/viewer.
    fn lambda(&self, w: &Vector3f) -> Float {
        let cos_theta = cos_theta(w);
        if cos_theta == 0.0 {
            return INFINITY;
        }

        let sigma = self.sigma(w);
        if cos_theta > 0.0 {
            max(0.0, sigma / cos_theta - 1.0)
        } else {
            sigma / -cos_theta
        }
    }

    /// Evaluates Smith's masking-shadowing function which gives the fraction of
    /// microfacets that are visible from a given direction.
    ///
    /// * `w` - The direction from camera/viewer.
    fn g1(&self, w: &Vector3f) -> Float {
        1.0 / (1.0 + self.lambda(w))
    }

    /// Returns the fraction of microfacets in a differential area that are
    /// visible from both directions `wo` and `wi`.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    fn g(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        1.0 / (1.0 + self.lambda(wo) + self.lambda(wi))
    }

    /// Returns a sample from the distribution of normal vectors weighted by
    /// `D(wh) cos θh`, flipped into the hemisphere of `wo`.
    ///
    /// * `wo`  - Outgoing direction.
    /// * `rng` - Random number generator.
    fn sample_wh(&self, wo: &Vector3f, rng: &mut RNG) -> Vector3f;

    /// Evaluates the PDF of `sample_wh()` with respect to solid angle.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wh` - A sample normal from the distrubition of normal vectors.
    fn pdf(&self, _wo: &Vector3f, wh: &Vector3f) -> Float {
        self.d(wh) * abs_cos_theta(wh)
    }
}

/// Atomic reference counted `MicrofacetDistribution`.
pub type ArcMicrofacetDistribution = Arc<dyn MicrofacetDistribution + Send + Sync>;

/// Integrates `D(m) max(0, w·m)` over the upper hemisphere of normals using
/// the tensor product of `rule` in (cos θ, φ / 2π).
///
/// * `ndf`  - The distribution of normals.
/// * `w`    - The direction from camera/viewer.
/// * `rule` - The quadrature rule.
pub fn sigma_by_quadrature<M>(ndf: &M, w: &Vector3f, rule: &QuadratureRule) -> Float
where
    M: MicrofacetDistribution + ?Sized,
{
    TWO_PI
        * rule.integrate_2d(|u, v| {
            let sin_theta = max(0.0, 1.0 - u * u).sqrt();
            let m = spherical_direction(sin_theta, u, TWO_PI * v);
            ndf.d(&m) * max(0.0, w.dot(&m))
        })
}

/// Maps a sampled tan²θ and azimuth to a normal in the hemisphere of `wo`.
///
/// * `wo`         - Outgoing direction.
/// * `tan2_theta` - tan²θ of the normal.
/// * `phi`        - Azimuth of the normal.
pub(crate) fn normal_from_slope(wo: &Vector3f, tan2_theta: Float, phi: Float) -> Vector3f {
    let cos_theta = 1.0 / (1.0 + tan2_theta).sqrt();
    let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
    let wh = spherical_direction(sin_theta, cos_theta, phi);
    if !same_hemisphere(wo, &wh) {
        -wh
    } else {
        wh
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::MonteCarloAccumulator;

    /// Compares the sample mean of `g(wh)` over `sample_wh()` with the
    /// quadrature expectation under `D(m) cos θm`.
    pub(crate) fn check_sample_wh<M, G>(ndf: &M, g: G, seed: u64)
    where
        M: MicrofacetDistribution,
        G: Fn(&Vector3f) -> Float,
    {
        let expected = TWO_PI
            * GAUSS_100.integrate_2d(|u, v| {
                let sin_theta = max(0.0, 1.0 - u * u).sqrt();
                let m = spherical_direction(sin_theta, u, TWO_PI * v);
                ndf.d(&m) * u * g(&m)
            });

        let wo = Vector3f::new(0.3, 0.1, 0.9).normalize();
        let mut rng = RNG::with_seed(seed, 0);
        let mut acc = MonteCarloAccumulator::default();
        for _ in 0..100_000 {
            let wh = ndf.sample_wh(&wo, &mut rng);
            assert!(wh.z >= 0.0);
            assert!((wh.length() - 1.0).abs() < 1e-9);
            acc.add(g(&wh));
        }
        assert!(
            (acc.mean() - expected).abs() < 0.01,
            "sampled {} expected {}",
            acc.mean(),
            expected
        );
    }

    #[test]
    fn default_lambda_from_sigma() {
        let ndf = StudentTDistribution::new(0.5, 3.0);
        let w = Vector3f::new(0.6, 0.0, 0.8);
        let lambda = ndf.lambda(&w);
        assert!((0.8 * (1.0 + lambda) - ndf.sigma(&w)).abs() < 1e-12);
        assert!((0.8 * ndf.lambda(&-w) - ndf.sigma(&-w)).abs() < 1e-12);
        assert_eq!(ndf.lambda(&Vector3f::X_AXIS), INFINITY);
        assert_eq!(ndf.g1(&Vector3f::X_AXIS), 0.0);
    }

    #[test]
    fn normal_follows_wo() {
        let wh = normal_from_slope(&Vector3f::new(0.0, 0.0, -1.0), 0.25, 1.0);
        assert!(wh.z < 0.0);
        let wh = normal_from_slope(&Vector3f::Z_AXIS, 0.0, 1.0);
        assert_eq!(wh.z, 1.0);
    }
}
