//! Batched Sampling Results

use super::{LobeSampled, LobeTraits, LobeWeights};
use crate::geometry::*;
use crate::pbrt::*;

/// Results of generating one sample per point.
#[derive(Clone, Debug, Default)]
pub struct GeneratedSamples {
    /// Lobe that produced each sample. Invalid if no sample was generated.
    pub lobe_sampled: Vec<LobeSampled>,

    /// Sampled outgoing directions.
    pub directions: Vec<Vector3f>,

    /// Color weights per active lobe.
    pub weights: LobeWeights,

    /// Forward PDFs.
    pub fpdf: Vec<Float>,

    /// Reverse PDFs.
    pub rpdf: Vec<Float>,
}

impl GeneratedSamples {
    /// Create a new `GeneratedSamples` with `n_pts` invalid samples.
    ///
    /// * `n_pts` - Number of points in the batch.
    pub fn new(n_pts: usize) -> Self {
        let mut samples = Self::default();
        samples.reset(n_pts);
        samples
    }

    /// Marks all samples invalid and zeroes all outputs.
    ///
    /// * `n_pts` - Number of points in the batch.
    pub fn reset(&mut self, n_pts: usize) {
        self.lobe_sampled.clear();
        self.lobe_sampled.resize(n_pts, LobeSampled::NONE);
        self.directions.clear();
        self.directions.resize(n_pts, Vector3f::ZERO);
        self.fpdf.clear();
        self.fpdf.resize(n_pts, 0.0);
        self.rpdf.clear();
        self.rpdf.resize(n_pts, 0.0);
        self.weights.clear(n_pts);
    }

    /// Returns the number of points in the batch.
    pub fn num_pts(&self) -> usize {
        self.lobe_sampled.len()
    }

    /// Returns true if a sample was generated for point `i`.
    ///
    /// * `i` - Point index.
    pub fn is_valid(&self, i: usize) -> bool {
        self.lobe_sampled[i].is_valid()
    }
}

/// Results of evaluating the lobes for given directions per point.
#[derive(Clone, Debug, Default)]
pub struct EvaluatedSamples {
    /// Lobes evaluated at each point.
    pub lobes_evaluated: Vec<LobeTraits>,

    /// Color weights per active lobe.
    pub weights: LobeWeights,

    /// Forward PDFs.
    pub fpdf: Vec<Float>,

    /// Reverse PDFs.
    pub rpdf: Vec<Float>,
}

impl EvaluatedSamples {
    /// Create a new `EvaluatedSamples` with `n_pts` unevaluated points.
    ///
    /// * `n_pts` - Number of points in the batch.
    pub fn new(n_pts: usize) -> Self {
        let mut samples = Self::default();
        samples.reset(n_pts);
        samples
    }

    /// Clears the evaluated lobes and zeroes all outputs.
    ///
    /// * `n_pts` - Number of points in the batch.
    pub fn reset(&mut self, n_pts: usize) {
        self.lobes_evaluated.clear();
        self.lobes_evaluated.resize(n_pts, LobeTraits::empty());
        self.fpdf.clear();
        self.fpdf.resize(n_pts, 0.0);
        self.rpdf.clear();
        self.rpdf.resize(n_pts, 0.0);
        self.weights.clear(n_pts);
    }

    /// Returns the number of points in the batch.
    pub fn num_pts(&self) -> usize {
        self.lobes_evaluated.len()
    }
}
