//! BxDFs

#[macro_use]
extern crate log;

mod albedo;
mod ggx;

// Re-export
pub use albedo::*;
pub use ggx::*;
