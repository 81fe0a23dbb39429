//! GGX Reflection

use bxdf_core::geometry::*;
use bxdf_core::microfacet::*;
use bxdf_core::paramset::*;
use bxdf_core::pbrt::*;
use bxdf_core::reflection::*;
use bxdf_core::sampler::*;
use bxdf_core::shading::*;
use bxdf_core::spectrum::*;
use std::fmt;

/// Name of the lobe the GGX BxDF scatters into.
pub const GGX_LOBE_NAME: &str = "Reflection";

/// Parameters the GGX BxDF reads from the shading context.
pub const GGX_PARAMS: [ParamInfo; 2] = [
    ParamInfo::new("Color", ParamType::Color),
    ParamInfo::new("Roughness", ParamType::Float),
];

/// Creates GGX BxDF instances for batches of shading points.
#[derive(Copy, Clone, Debug)]
pub struct GGXFactory {
    /// Reflectance used when a point has no bound color.
    default_color: Spectrum,

    /// Roughness used when a point has no bound roughness.
    default_roughness: Float,

    /// The reflection lobe.
    lobe: LobeSampled,
}

impl GGXFactory {
    /// Create a new `GGXFactory` with a 0.5 gray reflectance and zero
    /// roughness as defaults.
    ///
    /// * `registry` - Lobe table used to resolve the reflection lobe.
    pub fn new(registry: &mut LobeRegistry) -> Self {
        Self::with_defaults(registry, Spectrum::new(0.5), 0.0)
    }

    /// Create a new `GGXFactory`.
    ///
    /// * `registry`          - Lobe table used to resolve the reflection lobe.
    /// * `default_color`     - Reflectance used when a point has no bound color.
    /// * `default_roughness` - Roughness used when a point has no bound roughness.
    pub fn with_defaults(registry: &mut LobeRegistry, default_color: Spectrum, default_roughness: Float) -> Self {
        let lobe = registry.lookup_lobe_by_name(false, true, true, false, 0, GGX_LOBE_NAME);
        debug!(
            "GGX factory: color {}, roughness {}, lobe {}",
            default_color, default_roughness, lobe
        );
        Self {
            default_color,
            default_roughness,
            lobe,
        }
    }

    /// Returns the parameters read from the shading context.
    pub fn param_table(&self) -> &'static [ParamInfo] {
        &GGX_PARAMS
    }

    /// Returns hints about the instances.
    pub fn instance_hints(&self) -> InstanceHints {
        InstanceHints::TRIVIALLY_OPAQUE
    }

    /// Returns the reflection lobe.
    pub fn lobe(&self) -> LobeSampled {
        self.lobe
    }

    /// Returns a GGX BxDF for a batch of shading points. Material parameters
    /// are evaluated once per point.
    ///
    /// * `sc`           - The shading context.
    /// * `lobes_wanted` - Lobes the caller intends to request.
    pub fn begin_scatter<'sc>(&self, sc: &'sc ShadingContext, lobes_wanted: LobeTraits) -> GGX<'sc> {
        let lobe_traits = lobes_wanted & LobeTraits::from(self.lobe);
        debug!("GGX begin scatter: {} points, lobes {:?}", sc.num_pts(), lobe_traits);

        let color = sc
            .eval_color_param(GGX_PARAMS[0].name, self.default_color)
            .into_iter()
            .map(|c| c.clamp_default())
            .collect();
        let distribs = sc
            .eval_float_param(GGX_PARAMS[1].name, self.default_roughness)
            .into_iter()
            .map(GGXDistribution::new)
            .collect();

        for name in sc.params.unused() {
            warn!("GGX ignores parameter '{}'", name);
        }

        GGX {
            sc,
            lobe: self.lobe,
            lobe_traits,
            color,
            distribs,
        }
    }
}

impl fmt::Display for GGXFactory {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GGXFactory {{ default_color: {}, default_roughness: {}, lobe: {} }}",
            self.default_color, self.default_roughness, self.lobe
        )
    }
}

/// GGX microfacet reflection over a batch of shading points.
pub struct GGX<'sc> {
    /// The shading context.
    sc: &'sc ShadingContext,

    /// The reflection lobe.
    lobe: LobeSampled,

    /// Lobes provided for this batch.
    lobe_traits: LobeTraits,

    /// Reflectance per point.
    color: Vec<Spectrum>,

    /// Microfacet distribution per point.
    distribs: Vec<GGXDistribution>,
}

impl<'sc> GGX<'sc> {
    /// Returns true if the lobe is wanted.
    ///
    /// * `lobes_wanted` - Lobes requested.
    #[inline(always)]
    fn is_wanted(&self, lobes_wanted: LobeTraits) -> bool {
        (self.lobe_traits & lobes_wanted).has_any()
    }

    /// Evaluates the lobe at point `i` for an outgoing direction. Returns
    /// `None` if the point faces away from the viewer or `l` lies below the
    /// surface.
    ///
    /// * `i` - Point index.
    /// * `l` - Outgoing direction.
    fn evaluate_point(&self, i: usize, l: &Vector3f) -> Option<LobeEval> {
        let v = &self.sc.vn[i];
        let (nf, n_dot_v) = resolve_facing(&self.sc.nn[i], v);
        if n_dot_v <= MIN_FACING || nf.dot(l) <= 0.0 {
            return None;
        }
        Some(evaluate(&self.distribs[i], &nf, v, l, &self.color[i]))
    }
}

impl<'sc> Bxdf for GGX<'sc> {
    /// Returns the sides of the surface the BxDF is evaluated on. The BxDF
    /// is two-sided but opaque.
    fn evaluate_domain(&self) -> EvaluateDomain {
        EvaluateDomain::Front
    }

    /// Returns the lobes provided by the BxDF.
    fn aggregate_lobe_traits(&self) -> LobeTraits {
        self.lobe_traits
    }

    /// Generates one reflected direction per point by sampling a microfacet
    /// normal from the GGX distribution.
    ///
    /// * `lobes_wanted` - Lobes requested for each point.
    /// * `sampler`      - Source of uniform 2D samples.
    /// * `out`          - Output buffers; reset for the batch.
    fn generate_sample(
        &self,
        lobes_wanted: &[LobeTraits],
        sampler: &mut dyn SampleSource,
        out: &mut GeneratedSamples,
    ) -> Result<(), String> {
        let n_pts = self.sc.num_pts();
        assert_eq!(lobes_wanted.len(), n_pts, "lobes_wanted.len() != num_pts()");

        out.reset(n_pts);
        let samples = sampler.draw_samples_2d(n_pts)?;

        if !lobes_wanted.iter().any(|w| self.is_wanted(*w)) {
            return Ok(());
        }

        let GeneratedSamples {
            lobe_sampled,
            directions,
            weights,
            fpdf,
            rpdf,
        } = out;
        let refl_wgt = weights.add_active_lobe(self.lobe);

        for i in (0..n_pts).filter(|i| self.is_wanted(lobes_wanted[*i])) {
            let v = &self.sc.vn[i];
            let (nf, n_dot_v) = resolve_facing(&self.sc.nn[i], v);
            if n_dot_v <= MIN_FACING {
                continue;
            }

            let distrib = &self.distribs[i];
            let (l, cos_theta_h) = match sample_direction(distrib, &nf, &self.sc.tn[i], v, &samples[i]) {
                Some(s) => s,
                None => continue,
            };

            let n_dot_l = nf.dot(&l);
            if n_dot_l <= 0.0 {
                continue;
            }

            let eval = evaluate_half_vector(distrib, cos_theta_h, n_dot_v, n_dot_l, &self.color[i]);
            lobe_sampled[i] = self.lobe;
            directions[i] = l;
            refl_wgt[i] = eval.weight;
            fpdf[i] = eval.fpdf;
            rpdf[i] = eval.rpdf;
        }

        Ok(())
    }

    /// Evaluates the lobe for one outgoing direction per point.
    ///
    /// * `lobes_wanted` - Lobes requested for each point.
    /// * `ln`           - Outgoing directions.
    /// * `out`          - Output buffers; reset for the batch.
    fn evaluate_sample(&self, lobes_wanted: &[LobeTraits], ln: &[Vector3f], out: &mut EvaluatedSamples) {
        let n_pts = self.sc.num_pts();
        assert_eq!(lobes_wanted.len(), n_pts, "lobes_wanted.len() != num_pts()");
        assert_eq!(ln.len(), n_pts, "ln.len() != num_pts()");

        out.reset(n_pts);
        if !lobes_wanted.iter().any(|w| self.is_wanted(*w)) {
            return;
        }

        let EvaluatedSamples {
            lobes_evaluated,
            weights,
            fpdf,
            rpdf,
        } = out;
        let refl_wgt = weights.add_active_lobe(self.lobe);

        for i in (0..n_pts).filter(|i| self.is_wanted(lobes_wanted[*i])) {
            if let Some(eval) = self.evaluate_point(i, &ln[i]) {
                lobes_evaluated[i] |= self.lobe_traits;
                refl_wgt[i] = eval.weight;
                fpdf[i] = eval.fpdf;
                rpdf[i] = eval.rpdf;
            }
        }
    }

    /// Evaluates the lobe at a single point for several outgoing directions.
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
    ) {
        assert!(index < self.sc.num_pts(), "index {} out of bounds", index);

        out.reset(ln.len());
        if ln.is_empty() || !self.is_wanted(lobes_wanted) {
            return;
        }

        let EvaluatedSamples {
            lobes_evaluated,
            weights,
            fpdf,
            rpdf,
        } = out;
        let refl_wgt = weights.add_active_lobe(self.lobe);

        let v = &self.sc.vn[index];
        let (nf, n_dot_v) = resolve_facing(&self.sc.nn[index], v);
        if n_dot_v <= MIN_FACING {
            return;
        }

        let distrib = &self.distribs[index];
        let color = &self.color[index];
        for (i, l) in ln.iter().enumerate() {
            if nf.dot(l) <= 0.0 {
                continue;
            }

            let eval = evaluate(distrib, &nf, v, l, color);
            lobes_evaluated[i] |= self.lobe_traits;
            refl_wgt[i] = eval.weight;
            fpdf[i] = eval.fpdf;
            rpdf[i] = eval.rpdf;
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
