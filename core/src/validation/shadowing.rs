//! Shadowing Estimator

use crate::geometry::*;
use crate::math::*;
use crate::microfacet::*;
use crate::rng::*;
use crate::sampling::*;

/// Radius of the disk candidate normals are drawn from. Slightly less than 1
/// so the lifted hemisphere never reaches its rim.
pub const DISK_RADIUS: Float = 0.999999;

/// Outcome of an acceptance-rejection run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadowingEstimate {
    /// Number of accepted trials.
    pub accepted: u64,

    /// Number of trials.
    pub trials: u64,

    /// Number of trials where the density exceeded the majorant.
    pub bound_violations: u64,

    /// The majorant used for the rejection test.
    pub majorant: Float,

    /// Radius of the sampling disk.
    pub disk_radius: Float,
}

impl ShadowingEstimate {
    /// Create an estimate with no trials.
    ///
    /// * `majorant` - The majorant used for the rejection test.
    pub fn empty(majorant: Float) -> Self {
        Self {
            accepted: 0,
            trials: 0,
            bound_violations: 0,
            majorant,
            disk_radius: DISK_RADIUS,
        }
    }

    /// Returns the fraction of accepted trials; 0 when there are no trials.
    pub fn fraction(&self) -> Float {
        if self.trials == 0 {
            0.0
        } else {
            self.accepted as Float / self.trials as Float
        }
    }

    /// Returns the projected area estimate `fraction · π r² · majorant`,
    /// comparable with `MicrofacetDistribution::sigma()`.
    pub fn projected_area(&self) -> Float {
        self.fraction() * PI * self.disk_radius * self.disk_radius * self.majorant
    }

    /// Returns the binomial standard error of `projected_area()`.
    pub fn std_error(&self) -> Float {
        if self.trials == 0 {
            return 0.0;
        }
        let p = self.fraction();
        PI * self.disk_radius * self.disk_radius * self.majorant * (p * (1.0 - p) / self.trials as Float).sqrt()
    }

    /// Accumulate the trials of another run with the same majorant.
    ///
    /// * `other` - The other estimate.
    pub fn merge(&mut self, other: &Self) {
        debug_assert!(self.majorant == other.majorant);

        self.accepted += other.accepted;
        self.trials += other.trials;
        self.bound_violations += other.bound_violations;
    }
}

/// Returns the direction `(sqrt(1 - u²), 0, u)` in the xz-plane with polar
/// cosine `u`.
///
/// * `u` - Cosine of the polar angle in [-1, 1].
pub fn sigma_direction(u: Float) -> Vector3f {
    Vector3f::new(max(0.0, 1.0 - u * u).sqrt(), 0.0, u)
}

/// Estimates the projected area of a microsurface seen from `w` by
/// acceptance-rejection.
///
/// Each trial draws a point on a disk, lifts it to the unit hemisphere and
/// rotates the hemisphere so its pole points along `w`. This gives candidate
/// normals `m` with density `(w·m) / π`. A candidate is accepted with
/// probability `D(m) / majorant`, so the accepted fraction converges to
/// `σ(w) / (π · majorant)`.
///
/// A density above the majorant is applied as is. Such trials are counted in
/// `bound_violations` and reported once with `warn!`.
///
/// * `rng`      - Random number generator.
/// * `ndf`      - The distribution of normals.
/// * `w`        - The viewing direction. Need not be normalized.
/// * `majorant` - Upper bound of `ndf.d()`.
/// * `trials`   - Number of trials.
pub fn estimate_projected_area<M>(
    rng: &mut RNG,
    ndf: &M,
    w: &Vector3f,
    majorant: Float,
    trials: u64,
) -> ShadowingEstimate
where
    M: MicrofacetDistribution + ?Sized,
{
    let estimate = run_trials(rng, ndf, w, majorant, trials);
    report_estimate(w, &estimate);
    estimate
}

/// Logs an estimate; bound violations at `warn!` level.
///
/// * `w`        - The viewing direction.
/// * `estimate` - The estimate.
fn report_estimate(w: &Vector3f, estimate: &ShadowingEstimate) {
    if estimate.bound_violations > 0 {
        warn!(
            "{} of {} trials exceeded the majorant {}",
            estimate.bound_violations, estimate.trials, estimate.majorant
        );
    }
    debug!(
        "w = {w}: accepted {} of {} trials, projected area {}",
        estimate.accepted,
        estimate.trials,
        estimate.projected_area()
    );
}

/// Runs the acceptance-rejection trials of `estimate_projected_area()`
/// without logging.
///
/// * `rng`      - Random number generator.
/// * `ndf`      - The distribution of normals.
/// * `w`        - The viewing direction. Need not be normalized.
/// * `majorant` - Upper bound of `ndf.d()`.
/// * `trials`   - Number of trials.
pub(crate) fn run_trials<M>(
    rng: &mut RNG,
    ndf: &M,
    w: &Vector3f,
    majorant: Float,
    trials: u64,
) -> ShadowingEstimate
where
    M: MicrofacetDistribution + ?Sized,
{
    let w = w.normalize();
    let u = clamp(w.z, -1.0, 1.0);
    let s = max(0.0, 1.0 - u * u).sqrt();
    let psi = if w.x == 0.0 && w.y == 0.0 { 0.0 } else { atan2(w.y, w.x) };
    let (sin_psi, cos_psi) = (sin(psi), cos(psi));

    let mut estimate = ShadowingEstimate::empty(majorant);
    for _ in 0..trials {
        let p = disk_sample_2d(rng, DISK_RADIUS);
        let z = max(0.0, 1.0 - p.x * p.x - p.y * p.y).sqrt();

        // Tilt the pole to polar cosine u, then turn it to the azimuth of w.
        let x1 = p.x * u + s * z;
        let y1 = p.y;
        let z1 = u * z - p.x * s;
        let m = Vector3f::new(cos_psi * x1 - sin_psi * y1, sin_psi * x1 + cos_psi * y1, z1);

        let density = ndf.d(&m);
        if density > majorant {
            estimate.bound_violations += 1;
        }
        if rng.uniform_float() < density / majorant {
            estimate.accepted += 1;
        }
        estimate.trials += 1;
    }

    estimate
}

/// Estimates the projected area for the direction `sigma_direction(u)`.
///
/// * `rng`      - Random number generator.
/// * `ndf`      - The distribution of normals.
/// * `u`        - Cosine of the polar angle of the viewing direction.
/// * `majorant` - Upper bound of `ndf.d()`.
/// * `trials`   - Number of trials.
pub fn estimate_sigma<M>(rng: &mut RNG, ndf: &M, u: Float, majorant: Float, trials: u64) -> ShadowingEstimate
where
    M: MicrofacetDistribution + ?Sized,
{
    estimate_projected_area(rng, ndf, &sigma_direction(u), majorant, trials)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_matches(estimate: &ShadowingEstimate, expected: Float) {
        let tolerance = 5.0 * estimate.std_error();
        assert!(
            (estimate.projected_area() - expected).abs() < tolerance,
            "estimate {} ± {} expected {}",
            estimate.projected_area(),
            estimate.std_error(),
            expected
        );
    }

    #[test]
    fn beckmann_at_grazing_angle() {
        let ndf = BeckmannDistribution::isotropic(0.5);
        let mut rng = RNG::with_seed(7, 0);
        let estimate = estimate_sigma(&mut rng, &ndf, 0.0, 1.3, 100_000);
        let expected = ndf.sigma(&sigma_direction(0.0));
        assert!((estimate.projected_area() - expected).abs() < 0.01);
        assert_eq!(estimate.bound_violations, 0);
    }

    #[test]
    fn beckmann_at_normal_incidence() {
        let ndf = BeckmannDistribution::isotropic(0.5);
        let mut rng = RNG::with_seed(7, 1);
        let estimate = estimate_sigma(&mut rng, &ndf, 1.0, 1.3, 1_000_000);
        assert!((estimate.projected_area() - 1.0).abs() < 0.01);
    }

    #[test]
    fn beckmann_sweep() {
        let ndf = BeckmannDistribution::isotropic(0.5);
        let mut rng = RNG::with_seed(7, 2);
        for u in [-0.6, -0.2, 0.4, 0.8] {
            let estimate = estimate_sigma(&mut rng, &ndf, u, 1.3, 200_000);
            assert_matches(&estimate, ndf.sigma(&sigma_direction(u)));
        }
    }

    /// Returns the largest `d()` over a dense (cos θ, φ) grid of the upper
    /// hemisphere.
    fn max_density_on_grid<M: MicrofacetDistribution>(ndf: &M) -> Float {
        let n = 400;
        let mut max_d: Float = 0.0;
        for i in 0..=n {
            let cos_theta = i as Float / n as Float;
            let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
            for j in 0..n {
                let phi = TWO_PI * j as Float / n as Float;
                max_d = max(max_d, ndf.d(&spherical_direction(sin_theta, cos_theta, phi)));
            }
        }
        max_d
    }

    #[test]
    fn anisotropic_density_peaks_off_the_pole() {
        let ndf = BeckmannDistribution::new(0.3, 0.8);
        let at_pole = ndf.d(&Vector3f::Z_AXIS);
        let peak = max_density_on_grid(&ndf);
        assert!(peak > 1.4 && peak > at_pole, "peak {peak} pole {at_pole}");
        assert!(peak < 1.5);
    }

    #[test]
    fn anisotropic_off_plane_azimuth() {
        let ndf = BeckmannDistribution::new(0.3, 0.8);
        let majorant = 1.5;
        assert!(max_density_on_grid(&ndf) < majorant);
        let w = spherical_direction(0.8, 0.6, PI_OVER_TWO);
        let mut rng = RNG::with_seed(7, 3);
        let estimate = estimate_projected_area(&mut rng, &ndf, &w, majorant, 200_000);
        assert_eq!(estimate.bound_violations, 0);
        assert_matches(&estimate, ndf.sigma(&w));
    }

    #[test]
    fn isotropic_majorants_bound_the_density() {
        assert!(max_density_on_grid(&BeckmannDistribution::isotropic(0.5)) < 1.3);
        assert!(max_density_on_grid(&StudentTDistribution::new(0.5, 2.0)) < 1.3);
    }

    #[test]
    fn student_t_matches_quadrature() {
        let ndf = StudentTDistribution::new(0.5, 2.0);
        let mut rng = RNG::with_seed(7, 4);
        let estimate = estimate_sigma(&mut rng, &ndf, 0.5, 1.3, 400_000);
        assert_matches(&estimate, ndf.sigma(&sigma_direction(0.5)));
    }

    #[test]
    fn low_majorant_is_reported_not_corrected() {
        let ndf = BeckmannDistribution::isotropic(0.5);
        let mut rng = RNG::with_seed(7, 5);
        let estimate = estimate_sigma(&mut rng, &ndf, 1.0, 0.5, 10_000);
        assert!(estimate.bound_violations > 0);
        assert!(estimate.projected_area() < 1.0);
    }

    #[test]
    fn same_seed_same_estimate() {
        let ndf = BeckmannDistribution::isotropic(0.5);
        let a = estimate_sigma(&mut RNG::with_seed(9, 9), &ndf, 0.3, 1.3, 5_000);
        let b = estimate_sigma(&mut RNG::with_seed(9, 9), &ndf, 0.3, 1.3, 5_000);
        assert_eq!(a, b);
    }

    #[test]
    fn no_trials() {
        let ndf = BeckmannDistribution::isotropic(0.5);
        let estimate = estimate_sigma(&mut RNG::default(), &ndf, 0.3, 1.3, 0);
        assert_eq!(estimate.fraction(), 0.0);
        assert_eq!(estimate.projected_area(), 0.0);
    }

    #[test]
    fn merge_adds_counts() {
        let mut a = ShadowingEstimate::empty(2.0);
        a.accepted = 3;
        a.trials = 10;
        let mut b = ShadowingEstimate::empty(2.0);
        b.accepted = 1;
        b.trials = 10;
        b.bound_violations = 2;
        a.merge(&b);
        assert_eq!((a.accepted, a.trials, a.bound_violations), (4, 20, 2));
        assert_eq!(a.fraction(), 0.2);
    }
}
