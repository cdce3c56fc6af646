//! Eval/sample consistency check for a Beckmann rough mirror.

use crate::sigma::check_above;
use mfcheck_core::app::*;
use mfcheck_core::geometry::*;
use mfcheck_core::math::*;
use mfcheck_core::microfacet::*;
use mfcheck_core::reflection::*;
use mfcheck_core::rng::*;
use mfcheck_core::validation::*;
use std::io::{self, Write};
use std::sync::Arc;

/// Prints `sample_estimate eval_estimate` followed by one line
/// `cos_center sample eval` per cos θo bin.
///
/// * `options`  - Application options.
/// * `rough_x`  - Roughness along x.
/// * `rough_y`  - Roughness along y.
/// * `theta_i`  - Polar angle of the incident direction in degrees.
/// * `n_sample` - Number of sampled directions.
/// * `n_eval`   - Number of evaluated directions.
pub fn run(
    options: &Options,
    rough_x: Float,
    rough_y: Float,
    theta_i: Float,
    n_sample: u64,
    n_eval: u64,
) -> Result<(), String> {
    check_above("rough_x", rough_x, 0.0)?;
    check_above("rough_y", rough_y, 0.0)?;
    if !(0.0..90.0).contains(&theta_i) {
        return Err(format!("Invalid theta_i {theta_i}; must be in [0, 90)."));
    }

    let ndf: ArcMicrofacetDistribution = Arc::new(BeckmannDistribution::new(rough_x, rough_y));
    let bsdf = MicrofacetReflection::new(ndf);
    let theta = theta_i.to_radians();
    let wi = Vector3f::new(sin(theta), 0.0, cos(theta));

    let seed = options.seed();
    let config = EvalSampleConfig {
        sample_count: n_sample,
        eval_count: n_eval,
        ..Default::default()
    };

    info!("Comparing {n_sample} samples with {n_eval} evaluations at wi = {wi}");
    let report = compare_eval_sample(
        &bsdf,
        &wi,
        &mut RNG::with_seed(seed, 0),
        &mut RNG::with_seed(seed, 1),
        &config,
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let to_string = |e: io::Error| e.to_string();

    writeln!(out, "{} {}", report.sample_estimate(), report.eval_estimate()).map_err(to_string)?;
    for ((center, sample), eval) in report
        .bin_centers()
        .iter()
        .zip(report.sample_bins.iter())
        .zip(report.eval_bins.iter())
    {
        writeln!(out, "{center} {sample} {eval}").map_err(to_string)?;
    }

    Ok(())
}
