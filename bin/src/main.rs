#[macro_use]
extern crate log;

mod eval_sample;
mod sigma;

use clap::Parser;
use mfcheck_core::app::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize `env_logger`.
    env_logger::init();

    // Malformed command lines print usage and exit with a non-zero status.
    let options = Options::parse();

    let result = match &options.command {
        Command::Sigma {
            roughness,
            majorant,
            gamma,
            du,
        } => sigma::run(&options, *roughness, *majorant, *gamma, *du),
        Command::EvalSample {
            rough_x,
            rough_y,
            theta_i,
            n_sample,
            n_eval,
        } => eval_sample::run(&options, *rough_x, *rough_y, *theta_i, *n_sample, *n_eval),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
