//! Microfacet Distribution Models

mod ggx;

// Re-exports
pub use ggx::*;
