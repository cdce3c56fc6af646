//! Eval/Sample Consistency Checker

use crate::geometry::*;
use crate::math::*;
use crate::reflection::*;
use crate::rng::*;
use crate::sampling::*;
use crate::stats::*;

/// Distribution of outgoing directions for the evaluation path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReferenceDistribution {
    /// Uniform over the unit sphere.
    UniformSphere,

    /// Cosine-weighted over the hemisphere around +z.
    CosineHemisphere,
}

impl ReferenceDistribution {
    /// Sample a direction.
    ///
    /// * `rng` - Random number generator.
    pub fn sample(&self, rng: &mut RNG) -> Vector3f {
        match self {
            Self::UniformSphere => isotropic_direction(rng),
            Self::CosineHemisphere => lambert_direction(rng),
        }
    }

    /// Returns the PDF for sampling the given direction.
    ///
    /// * `wo` - The direction.
    pub fn pdf(&self, wo: &Vector3f) -> Float {
        match self {
            Self::UniformSphere => uniform_sphere_pdf(),
            Self::CosineHemisphere => cosine_hemisphere_pdf(max(0.0, cos_theta(wo))),
        }
    }
}

/// Parameters of an eval/sample comparison.
#[derive(Copy, Clone, Debug)]
pub struct EvalSampleConfig {
    /// Number of calls to `BSDF::sample()`.
    pub sample_count: u64,

    /// Number of calls to `BSDF::eval()`.
    pub eval_count: u64,

    /// Number of cos θo bins over [-1, 1].
    pub n_bins: usize,

    /// Distribution of directions for the evaluation path.
    pub reference: ReferenceDistribution,
}

impl Default for EvalSampleConfig {
    fn default() -> Self {
        Self {
            sample_count: 100_000,
            eval_count: 100_000,
            n_bins: 10,
            reference: ReferenceDistribution::UniformSphere,
        }
    }
}

/// Outcome of an eval/sample comparison. Both paths estimate the reflectance
/// `∫ eval(wi, wo) dwo`.
#[derive(Clone, Debug)]
pub struct EvalSampleReport {
    /// Importance sampling weights `value / pdf` (0 for absorbed samples).
    pub sample: MonteCarloAccumulator,

    /// Evaluation path estimates `eval / pdf`.
    pub eval: MonteCarloAccumulator,

    /// Number of absorbed samples.
    pub absorbed: u64,

    /// Per bin sampling path estimate of the reflectance into the bin.
    pub sample_bins: Vec<Float>,

    /// Per bin evaluation path estimate of the reflectance into the bin.
    pub eval_bins: Vec<Float>,
}

impl EvalSampleReport {
    /// Returns the sampling path estimate.
    pub fn sample_estimate(&self) -> Float {
        self.sample.mean()
    }

    /// Returns the evaluation path estimate.
    pub fn eval_estimate(&self) -> Float {
        self.eval.mean()
    }

    /// Returns `|sample - eval| / max(|sample|, |eval|)`; 0 when both are 0.
    pub fn relative_difference(&self) -> Float {
        let s = self.sample_estimate();
        let e = self.eval_estimate();
        let scale = max(abs(s), abs(e));
        if scale == 0.0 {
            0.0
        } else {
            abs(s - e) / scale
        }
    }

    /// Returns `true` if the relative difference is within `tolerance`.
    ///
    /// * `tolerance` - Relative tolerance.
    pub fn agrees_within(&self, tolerance: Float) -> bool {
        self.relative_difference() <= tolerance
    }

    /// Returns the cos θo at the centre of each bin.
    pub fn bin_centers(&self) -> Vec<Float> {
        let n_bins = self.sample_bins.len();
        let dx = 2.0 / n_bins as Float;
        (0..n_bins).map(|i| -1.0 + (i as Float + 0.5) * dx).collect()
    }
}

/// Returns the bin of cos θo.
///
/// * `wo`     - Outgoing direction.
/// * `n_bins` - Number of bins over [-1, 1].
fn bin_index(wo: &Vector3f, n_bins: usize) -> usize {
    min(n_bins - 1, discrete_map(-1.0, 1.0, 2.0 / n_bins as Float, cos_theta(wo)))
}

/// Cross checks `BSDF::eval()` against `BSDF::sample()` for a fixed incident
/// direction by estimating the reflectance with both.
///
/// * `bsdf`       - The scattering model.
/// * `wi`         - Incident direction.
/// * `sample_rng` - Random number generator for the sampling path.
/// * `eval_rng`   - Random number generator for the evaluation path.
/// * `config`     - Sample counts, binning and reference distribution.
pub fn compare_eval_sample<B>(
    bsdf: &B,
    wi: &Vector3f,
    sample_rng: &mut RNG,
    eval_rng: &mut RNG,
    config: &EvalSampleConfig,
) -> EvalSampleReport
where
    B: BSDF + ?Sized,
{
    assert!(config.n_bins > 0, "at least one bin is required");

    let mut sample = MonteCarloAccumulator::default();
    let mut sample_bins = vec![0.0; config.n_bins];
    let mut absorbed = 0;
    for _ in 0..config.sample_count {
        match bsdf.sample(wi, sample_rng) {
            Some(s) => {
                let weight = s.weight();
                sample.add(weight);
                sample_bins[bin_index(&s.wo, config.n_bins)] += weight;
            }
            None => {
                absorbed += 1;
                sample.add(0.0);
            }
        }
    }

    let mut eval = MonteCarloAccumulator::default();
    let mut eval_bins = vec![0.0; config.n_bins];
    for _ in 0..config.eval_count {
        let wo = config.reference.sample(eval_rng);
        let pdf = config.reference.pdf(&wo);
        let value = if pdf > 0.0 { bsdf.eval(wi, &wo) / pdf } else { 0.0 };
        eval.add(value);
        eval_bins[bin_index(&wo, config.n_bins)] += value;
    }

    if config.sample_count > 0 {
        let n = config.sample_count as Float;
        sample_bins.iter_mut().for_each(|b| *b /= n);
    }
    if config.eval_count > 0 {
        let n = config.eval_count as Float;
        eval_bins.iter_mut().for_each(|b| *b /= n);
    }

    let report = EvalSampleReport {
        sample,
        eval,
        absorbed,
        sample_bins,
        eval_bins,
    };
    debug!(
        "wi = {wi}: sample {} ± {}, eval {} ± {}, {} absorbed",
        report.sample_estimate(),
        report.sample.std_error(),
        report.eval_estimate(),
        report.eval.std_error(),
        report.absorbed
    );

    report
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::microfacet::*;
    use float_cmp::*;
    use std::sync::Arc;

    #[test]
    fn lambertian_agrees_exactly_with_cosine_reference() {
        let bsdf = LambertianReflection::new(0.8);
        let wi = Vector3f::new(0.6, 0.0, 0.8);
        let config = EvalSampleConfig {
            sample_count: 10_000,
            eval_count: 10_000,
            n_bins: 4,
            reference: ReferenceDistribution::CosineHemisphere,
        };
        let report = compare_eval_sample(
            &bsdf,
            &wi,
            &mut RNG::with_seed(1, 0),
            &mut RNG::with_seed(1, 1),
            &config,
        );
        assert!(approx_eq!(f64, report.sample_estimate(), 0.8, epsilon = 1e-9));
        assert!(approx_eq!(f64, report.eval_estimate(), 0.8, epsilon = 1e-9));
        assert!(report.agrees_within(1e-9));
        assert_eq!(report.absorbed, 0);
        assert_eq!(report.sample_bins[0], 0.0);
        assert_eq!(report.eval_bins[1], 0.0);
    }

    #[test]
    fn lambertian_uniform_sphere_reference() {
        let bsdf = LambertianReflection::new(0.8);
        let wi = Vector3f::new(0.0, 0.6, 0.8);
        let config = EvalSampleConfig {
            sample_count: 100_000,
            eval_count: 400_000,
            ..Default::default()
        };
        let report = compare_eval_sample(
            &bsdf,
            &wi,
            &mut RNG::with_seed(2, 0),
            &mut RNG::with_seed(2, 1),
            &config,
        );
        assert!(report.agrees_within(0.01), "{report:?}");
    }

    #[test]
    fn rough_mirror_agrees() {
        let ndf: ArcMicrofacetDistribution = Arc::new(BeckmannDistribution::isotropic(0.7));
        let bsdf = MicrofacetReflection::new(ndf);
        let theta_i: Float = 30.0 * PI / 180.0;
        let wi = Vector3f::new(theta_i.sin(), 0.0, theta_i.cos());
        let config = EvalSampleConfig {
            sample_count: 400_000,
            eval_count: 400_000,
            n_bins: 10,
            reference: ReferenceDistribution::CosineHemisphere,
        };
        let report = compare_eval_sample(
            &bsdf,
            &wi,
            &mut RNG::with_seed(3, 0),
            &mut RNG::with_seed(3, 1),
            &config,
        );
        assert!(report.agrees_within(0.01), "relative difference {}", report.relative_difference());
        assert!(report.absorbed > 0);
        for (i, (s, e)) in report.sample_bins.iter().zip(report.eval_bins.iter()).enumerate() {
            assert!((s - e).abs() < 0.005, "bin {i}: {s} vs {e}");
        }
    }

    #[test]
    fn bins_sum_to_estimates() {
        let ndf: ArcMicrofacetDistribution = Arc::new(BeckmannDistribution::isotropic(0.4));
        let bsdf = MicrofacetReflection::new(ndf);
        let wi = Vector3f::new(0.6, 0.0, 0.8);
        let config = EvalSampleConfig {
            sample_count: 5_000,
            eval_count: 5_000,
            ..Default::default()
        };
        let report = compare_eval_sample(
            &bsdf,
            &wi,
            &mut RNG::with_seed(4, 0),
            &mut RNG::with_seed(4, 1),
            &config,
        );
        let sample_total: Float = report.sample_bins.iter().sum();
        let eval_total: Float = report.eval_bins.iter().sum();
        assert!(approx_eq!(f64, sample_total, report.sample_estimate(), epsilon = 1e-9));
        assert!(approx_eq!(f64, eval_total, report.eval_estimate(), epsilon = 1e-9));
        assert_eq!(report.sample.count(), 5_000);
        assert!(report.sample_bins[..5].iter().all(|&b| b == 0.0));
        assert!(report.eval_bins[..5].iter().all(|&b| b == 0.0));
    }

    #[test]
    fn bin_centers() {
        let report = EvalSampleReport {
            sample: MonteCarloAccumulator::default(),
            eval: MonteCarloAccumulator::default(),
            absorbed: 0,
            sample_bins: vec![0.0; 4],
            eval_bins: vec![0.0; 4],
        };
        assert_eq!(report.bin_centers(), vec![-0.75, -0.25, 0.25, 0.75]);
        assert_eq!(report.relative_difference(), 0.0);
        assert!(report.agrees_within(0.0));
    }

    #[test]
    fn top_of_range_maps_to_last_bin() {
        assert_eq!(bin_index(&Vector3f::Z_AXIS, 10), 9);
        assert_eq!(bin_index(&-Vector3f::Z_AXIS, 10), 0);
        assert_eq!(bin_index(&Vector3f::X_AXIS, 4), 2);
    }

    #[test]
    fn reference_pdfs() {
        let up = Vector3f::new(0.0, 0.6, 0.8);
        assert_eq!(ReferenceDistribution::UniformSphere.pdf(&-up), INV_FOUR_PI);
        assert_eq!(ReferenceDistribution::CosineHemisphere.pdf(&-up), 0.0);
        assert!(approx_eq!(f64, ReferenceDistribution::CosineHemisphere.pdf(&up), 0.8 * INV_PI, ulps = 2));
    }
}
