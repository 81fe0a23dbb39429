//! Directional Albedo

use super::GGXFactory;
use bxdf_core::geometry::*;
use bxdf_core::paramset::*;
use bxdf_core::pbrt::*;
use bxdf_core::reflection::*;
use bxdf_core::sampler::*;
use bxdf_core::shading::*;
use bxdf_core::spectrum::*;

/// Maximum number of points in a batch.
pub const ALBEDO_BATCH_SIZE: usize = 4096;

/// Computes the hemispherical-directional reflectance of the GGX lobe by
/// Monte Carlo integration of `weight / fpdf` over generated samples. Points
/// that do not produce a sample contribute zero.
///
/// * `factory`     - The GGX factory.
/// * `color`       - Reflectance.
/// * `roughness`   - Roughness.
/// * `cos_theta_v` - Cosine of the view direction with the normal in (0, 1].
/// * `n_samples`   - Number of samples.
/// * `sampler`     - Source of uniform 2D samples.
pub fn directional_albedo(
    factory: &GGXFactory,
    color: Spectrum,
    roughness: Float,
    cos_theta_v: Float,
    n_samples: usize,
    sampler: &mut dyn SampleSource,
) -> Result<Spectrum, String> {
    if !(cos_theta_v > 0.0 && cos_theta_v <= 1.0) {
        return Err(format!("Invalid view cosine {}; expected (0, 1]", cos_theta_v));
    }
    if n_samples == 0 {
        return Err(String::from("Number of samples must be > 0"));
    }

    let n = Normal3f::new(0.0, 0.0, 1.0);
    let t = Vector3f::new(1.0, 0.0, 0.0);
    let sin_theta_v = max(0.0, 1.0 - cos_theta_v * cos_theta_v).sqrt();
    let v = Vector3f::new(sin_theta_v, 0.0, cos_theta_v);

    let mut params = ParamSet::new();
    params.add_spectrum("Color", &[color]);
    params.add_float("Roughness", &[roughness]);

    let mut out = GeneratedSamples::default();
    let mut sum = Spectrum::ZERO;
    let mut remaining = n_samples;
    while remaining > 0 {
        let n_pts = remaining.min(ALBEDO_BATCH_SIZE);
        remaining -= n_pts;

        let sc = ShadingContext::uniform(n_pts, n, t, v).with_params(params.clone());
        let ggx = factory.begin_scatter(&sc, LobeTraits::ALL);
        ggx.generate_sample(&vec![LobeTraits::ALL; n_pts], sampler, &mut out)?;

        if let Some(weights) = out.weights.weights(&factory.lobe()) {
            for (i, w) in weights.iter().enumerate() {
                if out.is_valid(i) && out.fpdf[i] > 0.0 {
                    sum += *w / out.fpdf[i];
                }
            }
        }
    }

    Ok(sum / n_samples as Float)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    fn factory() -> GGXFactory {
        GGXFactory::new(&mut LobeRegistry::new())
    }

    fn albedo(roughness: Float, cos_theta_v: Float) -> Spectrum {
        let mut sampler = RandomSampleSource::new(11);
        directional_albedo(&factory(), Spectrum::ONE, roughness, cos_theta_v, 10_000, &mut sampler).unwrap()
    }

    #[test]
    fn smooth_surface_reflects_everything() {
        let a = albedo(0.0, 1.0);
        assert!(approx_eq!(f32, a[0], 1.0, epsilon = 1e-3), "albedo = {}", a);
    }

    #[test]
    fn rough_surface_loses_energy() {
        let a = albedo(1.0, 1.0);
        assert!(a[0] > 0.3 && a[0] < 0.95, "albedo = {}", a);
    }

    #[test]
    fn energy_loss_grows_towards_grazing() {
        assert!(albedo(0.8, 0.2)[0] < albedo(0.8, 1.0)[0]);
    }

    #[test]
    fn albedo_scales_with_color() {
        let color = Spectrum::from_rgb(&[1.0, 0.5, 0.25]);
        let mut sampler = RandomSampleSource::new(3);
        let a = directional_albedo(&factory(), color, 0.5, 0.7, 5000, &mut sampler).unwrap();
        assert!(approx_eq!(f32, a[1], 0.5 * a[0], epsilon = 1e-5));
        assert!(approx_eq!(f32, a[2], 0.25 * a[0], epsilon = 1e-5));
    }

    #[test]
    fn spans_multiple_batches() {
        let mut sampler = FixedSampleSource::new(vec![Point2f::new(0.25, 0.75); ALBEDO_BATCH_SIZE + 10]).unwrap();
        let a = directional_albedo(&factory(), Spectrum::ONE, 0.5, 1.0, ALBEDO_BATCH_SIZE + 10, &mut sampler).unwrap();
        assert_eq!(sampler.remaining(), 0);
        assert!(a[0] > 0.0 && a[0] <= 1.0);
    }

    #[test]
    fn invalid_arguments() {
        let mut sampler = RandomSampleSource::new(0);
        assert!(directional_albedo(&factory(), Spectrum::ONE, 0.5, 0.0, 10, &mut sampler).is_err());
        assert!(directional_albedo(&factory(), Spectrum::ONE, 0.5, 1.5, 10, &mut sampler).is_err());
        assert!(directional_albedo(&factory(), Spectrum::ONE, 0.5, 0.5, 0, &mut sampler).is_err());

        let mut empty = FixedSampleSource::new(vec![]).unwrap();
        assert!(directional_albedo(&factory(), Spectrum::ONE, 0.5, 0.5, 1, &mut empty).is_err());
    }
}
