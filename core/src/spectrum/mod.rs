//! Spectrum

mod rgb_spectrum;

// Re-export
pub use rgb_spectrum::*;

/// Default to using `RGBSpectrum` for reflectance colors and lobe weights.
pub type Spectrum = RGBSpectrum;
