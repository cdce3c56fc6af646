//! Numerical Quadrature

mod rule;
mod tables;

// Re-export
pub use rule::*;
pub use tables::*;
