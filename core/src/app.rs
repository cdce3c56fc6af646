//! Application related stuff

use crate::math::*;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{SystemTime, UNIX_EPOCH};

/// System wide options.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Monte Carlo checks for microfacet models.", long_about = None)]
pub struct Options {
    /// Number of threads to use for estimation.
    #[arg(
        long = "nthreads",
        short = 't',
        value_name = "NUM",
        default_value_t = 1,
        global = true,
        help = "Use specified number of threads for estimation."
    )]
    n_threads: usize,

    /// Seed for the random number generators.
    #[arg(
        long,
        value_name = "SEED",
        env = "MFCHECK_SEED",
        global = true,
        help = "Seed for the random number generators (default: system time)."
    )]
    seed: Option<u64>,

    /// Suppress all text output other than results and error messages.
    #[arg(
        long,
        global = true,
        help = "Suppress all text output other than results and error messages."
    )]
    pub quiet: bool,

    /// The check to run.
    #[command(subcommand)]
    pub command: Command,
}

/// The checks.
#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Compare the projected area of a Student-t distribution with an
    /// acceptance-rejection estimate over a sweep of viewing angles.
    Sigma {
        /// Roughness α.
        roughness: Float,

        /// Upper bound of the distribution of normals.
        majorant: Float,

        /// Shape parameter γ > 1.
        gamma: Float,

        /// Step of the polar cosine sweep.
        du: Float,
    },

    /// Compare the evaluation and sampling paths of a Beckmann rough mirror.
    EvalSample {
        /// Roughness along x.
        rough_x: Float,

        /// Roughness along y.
        rough_y: Float,

        /// Polar angle of the incident direction in degrees.
        theta_i: Float,

        /// Number of sampled directions.
        n_sample: u64,

        /// Number of evaluated directions.
        n_eval: u64,
    },
}

impl Options {
    /// Returns the number of threads to use.
    pub fn threads(&self) -> usize {
        let max_threads = num_cpus::get();
        match self.n_threads {
            0 => {
                warn!("Invalid nthreads");
                1
            }
            n if n > max_threads => {
                warn!("Num threads > max logical CPUs {}", max_threads);
                max_threads
            }
            n => n,
        }
    }

    /// Returns the seed, defaulting to the system time in nanoseconds.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            let seed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0);
            info!("Using seed {seed}");
            seed
        })
    }
}

/// Create a progress bar on stderr.
///
/// * `len`   - Number of steps.
/// * `quiet` - Hide the progress bar.
pub fn create_progress_bar(len: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new(len);
    match ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}") {
        Ok(style) => progress.set_style(style.progress_chars("=> ")),
        Err(e) => warn!("Invalid progress bar template: {e}"),
    }
    progress
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sigma() {
        let options = Options::try_parse_from(["mfcheck", "sigma", "0.5", "1.3", "2", "0.1", "--seed", "3"]).unwrap();
        assert_eq!(options.seed(), 3);
        assert_eq!(options.threads(), 1);
        assert!(!options.quiet);
        match options.command {
            Command::Sigma {
                roughness,
                majorant,
                gamma,
                du,
            } => assert_eq!((roughness, majorant, gamma, du), (0.5, 1.3, 2.0, 0.1)),
            _ => panic!("expected sigma"),
        }
    }

    #[test]
    fn parse_eval_sample() {
        let options =
            Options::try_parse_from(["mfcheck", "-t", "1", "--quiet", "eval-sample", "0.3", "0.6", "30", "1000", "2000"])
                .unwrap();
        assert!(options.quiet);
        match options.command {
            Command::EvalSample {
                rough_x,
                rough_y,
                theta_i,
                n_sample,
                n_eval,
            } => {
                assert_eq!((rough_x, rough_y, theta_i), (0.3, 0.6, 30.0));
                assert_eq!((n_sample, n_eval), (1000, 2000));
            }
            _ => panic!("expected eval-sample"),
        }
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        assert!(Options::try_parse_from(["mfcheck", "sigma", "0.5", "1.3", "2"]).is_err());
        assert!(Options::try_parse_from(["mfcheck", "eval-sample", "0.3"]).is_err());
        assert!(Options::try_parse_from(["mfcheck"]).is_err());
    }

    #[test]
    fn zero_threads_falls_back_to_one() {
        let options = Options::try_parse_from(["mfcheck", "-t", "0", "sigma", "0.5", "1.3", "2", "0.1"]).unwrap();
        assert_eq!(options.threads(), 1);
    }

    #[test]
    fn quiet_progress_bar_is_hidden() {
        assert!(create_progress_bar(10, true).is_hidden());
    }
}
