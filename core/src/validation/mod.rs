//! Validation

mod eval_sample;
mod parallel;
mod shadowing;

// Re-export.
pub use eval_sample::*;
pub use parallel::*;
pub use shadowing::*;
