//! Core

#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;

// Re-export.
pub mod app;
pub mod geometry;
pub mod math;
pub mod microfacet;
pub mod quadrature;
pub mod reflection;
pub mod rng;
pub mod sampling;
pub mod stats;
pub mod validation;
