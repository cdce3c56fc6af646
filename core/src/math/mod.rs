//! Scalar math

mod common;

// Re-export
pub use common::*;
