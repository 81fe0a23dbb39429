//! Reflection lobes and batched scattering outputs

mod bxdf;
mod lobe_sampled;
mod lobe_samples;
mod lobe_traits;
mod lobe_weights;

// Re-export
pub use bxdf::*;
pub use lobe_sampled::*;
pub use lobe_samples::*;
pub use lobe_traits::*;
pub use lobe_weights::*;
