//! Core

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

// Re-export.
#[macro_use]
pub mod geometry;
pub mod app;
pub mod microfacet;
pub mod paramset;
pub mod pbrt;
pub mod reflection;
pub mod rng;
pub mod sampler;
pub mod shading;
pub mod spectrum;
