//! Beckmann–Spizzichino Distribution

use super::*;

/// Implements the Beckmann–Spizzichino distribution which based on Gaussian
/// distribution of microfacet slopes.
#[derive(Copy, Clone, Debug)]
pub struct BeckmannDistribution {
    /// For microfacets oriented perpendicular to the x-axis and where
    /// α = sqrt(2) * σ and σ is the RMS slope of microfacets.
    alpha_x: Float,

    /// For microfacets oriented perpendicular to the y-axis and where
    /// α = sqrt(2) * σ and σ is the RMS slope of microfacets.
    alpha_y: Float,
}

impl BeckmannDistribution {
    /// Create a new `BeckmannDistribution`.
    ///
    /// * `alpha_x` - For microfacets oriented perpendicular to the x-axis and
    ///               where α = sqrt(2) * σ and σ is the RMS slope of
    ///               microfacets.
    /// * `alpha_y` - For microfacets oriented perpendicular to the y-axis and
    ///               where α = sqrt(2) * σ and σ is the RMS slope of
    ///               microfacets.
    pub fn new(alpha_x: Float, alpha_y: Float) -> Self {
        Self {
            alpha_x: max(0.001, alpha_x),
            alpha_y: max(0.001, alpha_y),
        }
    }

    /// Create a new isotropic `BeckmannDistribution`.
    ///
    /// * `alpha` - Roughness in both directions.
    pub fn isotropic(alpha: Float) -> Self {
        Self::new(alpha, alpha)
    }

    /// Returns the roughness seen along the azimuth of `w`.
    ///
    /// * `w` - The direction.
    fn projected_alpha(&self, w: &Vector3f) -> Float {
        (cos_2_phi(w) * self.alpha_x * self.alpha_x + sin_2_phi(w) * self.alpha_y * self.alpha_y).sqrt()
    }
}

impl MicrofacetDistribution for BeckmannDistribution {
    /// Return the differential area of microfacets oriented with the surface
    /// normal `wh`.
    ///
    /// * `wh` - A sample normal from the distrubition of normal vectors.
    #[rustfmt::skip]
    fn d(&self, wh: &Vector3f) -> Float {
        let tan2_theta = tan_2_theta(wh);
        if wh.z <= 0.0 || tan2_theta.is_infinite() {
            0.0
        } else {
            let cos4_theta = cos_2_theta(wh) * cos_2_theta(wh);
            (-tan2_theta * (cos_2_phi(wh) / (self.alpha_x * self.alpha_x) +
                            sin_2_phi(wh) / (self.alpha_y * self.alpha_y))
            ).exp() /
            (PI * self.alpha_x * self.alpha_y * cos4_theta)
        }
    }

    /// Returns the projected area in closed form:
    /// `σ(w) = max(0, cos θ) + |cos θ| Λ(w)`.
    ///
    /// * `w` - The direction from camera/viewer.
    fn sigma(&self, w: &Vector3f) -> Float {
        let cos_theta = cos_theta(w);
        let sin_theta = sin_theta(w);

        let hidden = if sin_theta == 0.0 {
            0.0
        } else {
            let alpha = self.projected_alpha(w);
            let a = abs(cos_theta) / (alpha * sin_theta);
            let hidden =
                0.5 * abs(cos_theta) * (erf(a) - 1.0) + 0.5 * alpha * sin_theta * (-a * a).exp() * INV_SQRT_PI;
            max(0.0, hidden)
        };

        max(0.0, cos_theta) + hidden
    }

    /// Returns the invisible masked microfacet area per visible microfacet area.
    ///
    /// * `w` - The direction from camera/viewer.
    fn lambda(&self, w: &Vector3f) -> Float {
        let abs_tan_theta = abs(tan_theta(w));
        if abs_tan_theta.is_infinite() {
            INFINITY
        } else if abs_tan_theta == 0.0 {
            0.0
        } else {
            let a = 1.0 / (self.projected_alpha(w) * abs_tan_theta);
            max(0.0, 0.5 * (erf(a) - 1.0) + 0.5 * (-a * a).exp() * INV_SQRT_PI / a)
        }
    }

    /// Returns a sample from the distribution of normal vectors.
    ///
    /// * `wo`  - Outgoing direction.
    /// * `rng` - Random number generator.
    fn sample_wh(&self, wo: &Vector3f, rng: &mut RNG) -> Vector3f {
        let u0 = rng.uniform_float();
        let u1 = rng.uniform_float();

        let log_sample = (1.0 - u0).ln();
        debug_assert!(log_sample.is_finite());

        let (tan2_theta, phi) = if self.alpha_x == self.alpha_y {
            (-self.alpha_x * self.alpha_x * log_sample, u1 * TWO_PI)
        } else {
            let mut phi = (self.alpha_y / self.alpha_x * (TWO_PI * u1 + PI_OVER_TWO).tan()).atan();
            if u1 > 0.5 {
                phi += PI;
            }
            let sin_phi = sin(phi);
            let cos_phi = cos(phi);
            let alphax2 = self.alpha_x * self.alpha_x;
            let alphay2 = self.alpha_y * self.alpha_y;
            let tan2_theta = -log_sample / (cos_phi * cos_phi / alphax2 + sin_phi * sin_phi / alphay2);

            (tan2_theta, phi)
        };

        normal_from_slope(wo, tan2_theta, phi)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::microfacet::tests::check_sample_wh;
    use float_cmp::*;
    use proptest::prelude::*;

    fn polar(u: Float, phi: Float) -> Vector3f {
        spherical_direction(max(0.0, 1.0 - u * u).sqrt(), u, phi)
    }

    #[test]
    fn normalized() {
        for ndf in [BeckmannDistribution::isotropic(0.5), BeckmannDistribution::new(0.3, 0.8)] {
            let area = sigma_by_quadrature(&ndf, &Vector3f::Z_AXIS, &GAUSS_100);
            assert!(approx_eq!(f64, area, 1.0, epsilon = 1e-9), "area = {area}");
        }
    }

    #[test]
    fn lower_hemisphere_is_empty() {
        let ndf = BeckmannDistribution::isotropic(0.5);
        assert_eq!(ndf.d(&-Vector3f::Z_AXIS), 0.0);
        assert_eq!(ndf.d(&polar(-0.5, 1.0)), 0.0);
        assert_eq!(ndf.d(&Vector3f::X_AXIS), 0.0);
        assert!(approx_eq!(f64, ndf.d(&Vector3f::Z_AXIS), 1.0 / (PI * 0.25), ulps = 4));
    }

    #[test]
    fn sigma_known_values() {
        let ndf = BeckmannDistribution::isotropic(0.5);
        assert!(approx_eq!(f64, ndf.sigma(&polar(0.0, 0.0)), 0.5 * INV_SQRT_PI / 2.0, epsilon = 1e-12));
        assert_eq!(ndf.sigma(&Vector3f::Z_AXIS), 1.0);
        assert_eq!(ndf.sigma(&-Vector3f::Z_AXIS), 0.0);
    }

    #[test]
    fn sigma_matches_quadrature() {
        for ndf in [BeckmannDistribution::isotropic(0.5), BeckmannDistribution::new(0.3, 0.8)] {
            for u in [-0.9, -0.5, -0.1, 0.0, 0.3, 0.7, 0.99] {
                let w = polar(u, 0.7);
                let closed = ndf.sigma(&w);
                let numeric = sigma_by_quadrature(&ndf, &w, &GAUSS_100);
                assert!((closed - numeric).abs() < 1e-4, "u = {u}: {closed} vs {numeric}");
            }
        }
    }

    #[test]
    fn lambda_agrees_with_sigma() {
        let ndf = BeckmannDistribution::new(0.3, 0.8);
        for u in [0.1, 0.5, 0.9] {
            let w = polar(u, 2.0);
            assert!(approx_eq!(f64, u * (1.0 + ndf.lambda(&w)), ndf.sigma(&w), epsilon = 1e-12));
        }
        assert_eq!(ndf.lambda(&Vector3f::Z_AXIS), 0.0);
        assert_eq!(ndf.g1(&Vector3f::X_AXIS), 0.0);
    }

    #[test]
    fn sample_isotropic_tan2_cdf() {
        // P(tan²θ < α²) = 1 - 1/e.
        let alpha = 0.5;
        let ndf = BeckmannDistribution::isotropic(alpha);
        let mut rng = RNG::with_seed(21, 0);
        let n = 100_000;
        let below = (0..n)
            .filter(|_| tan_2_theta(&ndf.sample_wh(&Vector3f::Z_AXIS, &mut rng)) < alpha * alpha)
            .count();
        let p = below as Float / n as Float;
        assert!((p - (1.0 - (-1.0 as Float).exp())).abs() < 0.008, "p = {p}");
    }

    #[test]
    fn sample_anisotropic_moments() {
        let ndf = BeckmannDistribution::new(0.3, 0.8);
        check_sample_wh(&ndf, |m| m.x * m.x, 22);
        check_sample_wh(&ndf, |m| m.y * m.y, 23);
    }

    #[test]
    fn pdf_is_d_cos() {
        let ndf = BeckmannDistribution::isotropic(0.5);
        let wh = polar(0.8, 0.3);
        assert_eq!(ndf.pdf(&Vector3f::Z_AXIS, &wh), ndf.d(&wh) * 0.8);
    }

    proptest! {
        #[test]
        fn sigma_difference_is_cos_theta(u in -1.0..1.0f64, phi in 0.0..6.28f64) {
            let ndf = BeckmannDistribution::new(0.4, 0.6);
            let w = polar(u, phi);
            prop_assert!((ndf.sigma(&w) - ndf.sigma(&-w) - w.z).abs() < 1e-12);
            prop_assert!(ndf.sigma(&w) >= 0.0);
        }
    }
}
