//! Projected area check for the Student-t distribution.

use mfcheck_core::app::*;
use mfcheck_core::math::*;
use mfcheck_core::microfacet::*;
use mfcheck_core::validation::*;
use indicatif::ProgressBar;
use std::io::{self, Write};

/// Number of acceptance-rejection trials per viewing direction.
const TRIALS: u64 = 100_000;

/// Prints the parameters, the analytic projected area over
/// `u = -0.999, -0.999 + du, .. <= 0.98` and the Monte Carlo acceptance
/// fractions `accepted / trials` over `u = -1, -1 + du, .. < 1`.
///
/// * `options`   - Application options.
/// * `roughness` - Roughness α.
/// * `majorant`  - Upper bound of the distribution of normals.
/// * `gamma`     - Shape parameter γ.
/// * `du`        - Step of the sweep.
pub fn run(options: &Options, roughness: Float, majorant: Float, gamma: Float, du: Float) -> Result<(), String> {
    check_above("du", du, 0.0)?;
    check_above("gamma", gamma, 1.0)?;
    check_above("majorant", majorant, 0.0)?;
    check_above("roughness", roughness, 0.0)?;

    let ndf = StudentTDistribution::new(roughness, gamma);
    let seed = options.seed();
    let n_threads = options.threads();

    let analytic_us = sweep(-0.999, du, |u| u <= 0.98);
    let mc_us = sweep(-1.0, du, |u| u < 1.0);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let to_string = |e: io::Error| e.to_string();

    writeln!(out, "roughness: {roughness}").map_err(to_string)?;
    writeln!(out, "majorant: {majorant}").map_err(to_string)?;
    writeln!(out, "gamma: {gamma}").map_err(to_string)?;
    writeln!(out, "du: {du}").map_err(to_string)?;

    let analytic: Vec<Float> = analytic_us.iter().map(|&u| ndf.sigma(&sigma_direction(u))).collect();
    write_row(&mut out, &analytic).map_err(to_string)?;

    let chunks_per_direction = (TRIALS + CHUNK_TRIALS - 1) / CHUNK_TRIALS;
    let progress = create_progress_bar(mc_us.len() as u64 * chunks_per_direction, options.quiet);
    progress.set_message("Estimating projected area");

    let (estimates, violations) = acceptance_fractions(&ndf, &mc_us, majorant, TRIALS, seed, n_threads, &progress);
    progress.finish_with_message("Estimation complete");

    if violations > 0 {
        warn!("Density exceeded the majorant {majorant} in {violations} trials");
    }

    write_row(&mut out, &estimates).map_err(to_string)?;
    Ok(())
}

/// Returns the acceptance fraction `accepted / trials` for each polar cosine
/// and the total number of trials above the majorant. Direction `i` seeds its
/// chunk streams with `seed + i`.
///
/// * `ndf`       - The distribution of normals.
/// * `us`        - Polar cosines of the viewing directions.
/// * `majorant`  - Upper bound of `ndf.d()`.
/// * `trials`    - Trials per direction.
/// * `seed`      - Base seed.
/// * `n_threads` - Number of worker threads.
/// * `progress`  - Progress bar.
fn acceptance_fractions<M>(
    ndf: &M,
    us: &[Float],
    majorant: Float,
    trials: u64,
    seed: u64,
    n_threads: usize,
    progress: &ProgressBar,
) -> (Vec<Float>, u64)
where
    M: MicrofacetDistribution + Sync,
{
    let mut violations = 0;
    let mut fractions = Vec::with_capacity(us.len());
    for (i, &u) in us.iter().enumerate() {
        let estimate = estimate_projected_area_parallel(
            ndf,
            &sigma_direction(u),
            majorant,
            trials,
            seed.wrapping_add(i as u64),
            n_threads,
            progress,
        );
        violations += estimate.bound_violations;
        fractions.push(estimate.fraction());
    }
    (fractions, violations)
}

/// Writes the values as one line, each followed by a space.
///
/// * `out`    - The output stream.
/// * `values` - The values.
fn write_row<W: Write>(out: &mut W, values: &[Float]) -> io::Result<()> {
    for v in values {
        write!(out, "{v} ")?;
    }
    writeln!(out)
}

/// Returns `start, start + du, ..` while `keep` holds. Each value is the
/// previous one plus `du`, so rounding accumulates along the sweep and sets
/// the number of columns.
///
/// * `start` - First value.
/// * `du`    - Step; must be positive.
/// * `keep`  - Predicate for values to keep.
fn sweep<F>(start: Float, du: Float, keep: F) -> Vec<Float>
where
    F: Fn(Float) -> bool,
{
    let mut us = vec![];
    let mut u = start;
    while keep(u) {
        us.push(u);
        u += du;
    }
    us
}

/// Returns an error unless `value > bound`.
///
/// * `name`  - Argument name.
/// * `value` - Argument value.
/// * `bound` - Exclusive lower bound.
pub fn check_above(name: &str, value: Float, bound: Float) -> Result<(), String> {
    if value > bound {
        Ok(())
    } else {
        Err(format!("Invalid {name} {value}; must be > {bound}."))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_accumulates_steps() {
        let mc = sweep(-1.0, 0.1, |u| u < 1.0);
        assert_eq!(mc.len(), 21);
        assert!(mc[20] < 1.0 && mc[20] > 0.99);

        let analytic = sweep(-0.999, 0.1, |u| u <= 0.98);
        assert_eq!(analytic.len(), 20);

        assert_eq!(sweep(-1.0, 0.25, |u| u < 1.0).len(), 8);
    }

    #[test]
    fn sweep_steps_by_addition() {
        let us = sweep(-1.0, 0.1, |u| u < 1.0);
        for pair in us.windows(2) {
            assert_eq!(pair[1].to_bits(), (pair[0] + 0.1).to_bits());
        }
    }

    #[test]
    fn rows_end_each_value_with_a_space() {
        let mut out = Vec::new();
        write_row(&mut out, &[0.5, 1.0, 0.125]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.5 1 0.125 \n");
    }

    #[test]
    fn monte_carlo_row_holds_acceptance_fractions() {
        let ndf = StudentTDistribution::new(0.5, 2.0);
        let us = [-0.5, 0.0, 0.5];
        let progress = ProgressBar::hidden();
        let (fractions, violations) = acceptance_fractions(&ndf, &us, 1.3, 20_000, 9, 2, &progress);
        assert_eq!(fractions.len(), 3);
        assert_eq!(violations, 0);
        for (i, (&u, &fraction)) in us.iter().zip(fractions.iter()).enumerate() {
            let estimate =
                estimate_projected_area_parallel(&ndf, &sigma_direction(u), 1.3, 20_000, 9 + i as u64, 1, &progress);
            assert_eq!(fraction, estimate.accepted as Float / 20_000.0);
            // The fraction is σ / (π r² majorant), not the projected area.
            let expected = ndf.sigma(&sigma_direction(u)) / (PI * DISK_RADIUS * DISK_RADIUS * 1.3);
            assert!((fraction - expected).abs() < 0.015, "u = {u}: {fraction} vs {expected}");
        }
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        assert!(check_above("du", 0.0, 0.0).is_err());
        assert!(check_above("gamma", 1.0, 1.0).is_err());
        assert!(check_above("majorant", Float::NAN, 0.0).is_err());
        assert!(check_above("du", 0.1, 0.0).is_ok());
    }
}
