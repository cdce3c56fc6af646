//! Parallel Shadowing Estimation

use super::*;
use crate::geometry::*;
use crate::math::*;
use crate::microfacet::*;
use crate::rng::*;
use indicatif::ProgressBar;
use std::thread;

/// Number of trials per work item.
pub const CHUNK_TRIALS: u64 = 10_000;

/// Runs `estimate_projected_area()` over a pool of worker threads.
///
/// The trials are split into chunks of `CHUNK_TRIALS`. Chunk `i` draws from
/// its own stream `RNG::with_seed(seed, i)` and the chunk estimates are merged
/// in chunk order, so the result does not depend on `n_threads`.
///
/// Chunks are not logged. Bound violations are left in the returned estimate
/// for the caller to report.
///
/// * `ndf`       - The distribution of normals.
/// * `w`         - The viewing direction.
/// * `majorant`  - Upper bound of `ndf.d()`.
/// * `trials`    - Total number of trials.
/// * `seed`      - Seed shared by all chunk streams.
/// * `n_threads` - Number of worker threads.
/// * `progress`  - Progress bar advanced once per chunk.
pub fn estimate_projected_area_parallel<M>(
    ndf: &M,
    w: &Vector3f,
    majorant: Float,
    trials: u64,
    seed: u64,
    n_threads: usize,
    progress: &ProgressBar,
) -> ShadowingEstimate
where
    M: MicrofacetDistribution + Sync + ?Sized,
{
    if trials == 0 {
        return ShadowingEstimate::empty(majorant);
    }

    let n_chunks = ((trials + CHUNK_TRIALS - 1) / CHUNK_TRIALS) as usize;
    let n_threads = clamp(n_threads, 1, n_chunks);
    let mut results: Vec<(usize, ShadowingEstimate)> = Vec::with_capacity(n_chunks);

    thread::scope(|scope| {
        let (tx_worker, rx_worker) = crossbeam_channel::bounded::<usize>(n_chunks);
        let (tx_collector, rx_collector) = crossbeam_channel::bounded::<(usize, ShadowingEstimate)>(n_chunks);

        // Spawn worker threads.
        for _ in 0..n_threads {
            let rx_worker = rx_worker.clone();
            let tx_collector = tx_collector.clone();
            scope.spawn(move || {
                for chunk in rx_worker.iter() {
                    let start = chunk as u64 * CHUNK_TRIALS;
                    let chunk_trials = min(CHUNK_TRIALS, trials - start);
                    let mut rng = RNG::with_seed(seed, chunk as u64);
                    let estimate = run_trials(&mut rng, ndf, w, majorant, chunk_trials);
                    if tx_collector.send((chunk, estimate)).is_err() {
                        break;
                    }
                    progress.inc(1);
                }
            });
        }
        drop(rx_worker); // Drop extra since we've cloned one for each worker.
        drop(tx_collector);

        // Send work.
        for chunk in 0..n_chunks {
            if tx_worker.send(chunk).is_err() {
                break;
            }
        }
        drop(tx_worker);

        results.extend(rx_collector.iter());
    });

    results.sort_by_key(|(chunk, _)| *chunk);
    let estimate = results
        .iter()
        .fold(ShadowingEstimate::empty(majorant), |mut acc, (_, estimate)| {
            acc.merge(estimate);
            acc
        });
    debug!(
        "w = {w}: accepted {} of {} trials in {n_chunks} chunks, {} above the majorant",
        estimate.accepted, estimate.trials, estimate.bound_violations
    );
    estimate
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
