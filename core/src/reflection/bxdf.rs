//! BxDF

use super::{EvaluatedSamples, GeneratedSamples, LobeTraits};
use crate::geometry::*;
use crate::sampler::*;

/// Sides of the surface a BxDF is evaluated on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EvaluateDomain {
    /// Only the side the normal points to.
    Front,

    /// Only the side opposite the normal.
    Back,

    /// Both sides.
    Both,
}

bitflags! {
    /// Hints a BxDF factory gives about its instances.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct InstanceHints: u8 {
        /// Instances are fully opaque and need no opacity evaluation.
        const TRIVIALLY_OPAQUE = 0b00000001;
        /// Instances compute opacity.
        const COMPUTES_OPACITY = 0b00000010;
        /// Instances compute presence.
        const COMPUTES_PRESENCE = 0b00000100;
    }
}

/// Interface for BxDFs evaluated over a batch of shading points.
pub trait Bxdf {
    /// Returns the sides of the surface the BxDF is evaluated on.
    fn evaluate_domain(&self) -> EvaluateDomain;

    /// Returns the lobes provided by the BxDF.
    fn aggregate_lobe_traits(&self) -> LobeTraits;

    /// Generates one outgoing direction per point. Points that do not
    /// produce a sample are left invalid.
    ///
    /// * `lobes_wanted` - Lobes requested for each point.
    /// * `sampler`      - Source of uniform 2D samples.
    /// * `out`          - Output buffers; reset for the batch.
    fn generate_sample(
        &self,
        lobes_wanted: &[LobeTraits],
        sampler: &mut dyn SampleSource,
        out: &mut GeneratedSamples,
    ) -> Result<(), String>;

    /// Evaluates the BxDF for one outgoing direction per point.
    ///
    /// * `lobes_wanted` - Lobes requested for each point.
    /// * `ln`           - Outgoing directions.
    /// * `out`          - Output buffers; reset for the batch.
    fn evaluate_sample(&self, lobes_wanted: &[LobeTraits], ln: &[Vector3f], out: &mut EvaluatedSamples);

    /// Evaluates the BxDF at a single point for several outgoing directions.
    ///
    /// * `lobes_wanted` - Lobes requested for every direction.
    /// * `index`        - Point index.
    /// * `ln`           - Outgoing directions.
    /// * `out`          - Output buffers with one entry per direction; reset.
    fn evaluate_samples_at_index(
        &self,
        lobes_wanted: LobeTraits,
        index: usize,
        ln: &[Vector3f],
        out: &mut EvaluatedSamples,
    );
}
