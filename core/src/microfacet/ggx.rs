//! GGX Distribution

use crate::geometry::*;
use crate::pbrt::*;
use crate::spectrum::*;

/// Roughness values below this are clamped to avoid a singular distribution.
pub const MIN_ROUGHNESS: Float = 0.001;

/// Points whose facing cosine is at or below this are not shaded.
pub const MIN_FACING: Float = 0.0001;

/// Implements the isotropic GGX (Trowbridge-Reitz) microfacet distribution
/// with Smith masking-shadowing.
///
/// The distribution is parameterized by `alpha = roughness²`; all terms only
/// need `alpha²`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GGXDistribution {
    /// Square of the distribution width `alpha`.
    alpha2: Float,
}

/// Result of evaluating the lobe for one pair of directions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LobeEval {
    /// BRDF times the cosine of the outgoing direction.
    pub weight: Spectrum,

    /// Probability density for sampling the outgoing direction.
    pub fpdf: Float,

    /// Probability density for sampling the view direction in reverse.
    pub rpdf: Float,
}

impl GGXDistribution {
    /// Create a new `GGXDistribution`.
    ///
    /// * `roughness` - Roughness in [0, 1]. Clamped to `MIN_ROUGHNESS`.
    pub fn new(roughness: Float) -> Self {
        let r = max(MIN_ROUGHNESS, roughness);
        let alpha = r * r;
        Self {
            alpha2: alpha * alpha,
        }
    }

    /// Returns `alpha²`.
    pub fn alpha_squared(&self) -> Float {
        self.alpha2
    }

    /// Returns `π((α² - 1)cos²θ + 1)²` written as `π(α²cos²θ + sin²θ)²`
    /// which stays finite as `α²` approaches 0 in single precision.
    ///
    /// * `cos2_theta` - Squared cosine of the half vector angle.
    #[inline(always)]
    fn denominator(&self, cos2_theta: Float) -> Float {
        let e = self.alpha2 * cos2_theta + max(0.0, 1.0 - cos2_theta);
        PI * e * e
    }

    /// Returns the normal distribution function for a half vector at angle θ
    /// from the normal, projected onto the macro surface.
    ///
    /// * `cos_theta` - Cosine of the half vector angle.
    pub fn d(&self, cos_theta: Float) -> Float {
        if cos_theta <= 0.0 {
            0.0
        } else {
            self.alpha2 * cos_theta / self.denominator(cos_theta * cos_theta)
        }
    }

    /// Returns Smith's single direction masking term for a direction at
    /// angle θ from the normal. Used for both the view and light directions.
    ///
    /// * `cos_theta` - Cosine of the direction angle.
    pub fn g1(&self, cos_theta: Float) -> Float {
        if cos_theta <= 0.0 {
            0.0
        } else {
            let cos2_theta = cos_theta * cos_theta;
            let tan2_theta = max(0.0, 1.0 - cos2_theta) / cos2_theta;
            2.0 / (1.0 + (1.0 + self.alpha2 * tan2_theta).sqrt())
        }
    }

    /// Returns the density of sampling a half vector in polar angle θ. This
    /// is a density over half vectors, not over outgoing directions.
    ///
    /// * `cos_theta` - Cosine of the half vector angle.
    /// * `sin_theta` - Sine of the half vector angle.
    pub fn pdf(&self, cos_theta: Float, sin_theta: Float) -> Float {
        self.alpha2 * cos_theta * sin_theta / self.denominator(cos_theta * cos_theta)
    }

    /// Returns the cosine of the polar angle of a half vector sampled from
    /// the distribution by inverting its CDF.
    ///
    /// * `u` - Uniform random value in [0, 1).
    pub fn sample_cos_theta(&self, u: Float) -> Float {
        let one_minus_u = 1.0 - u;
        (one_minus_u / (one_minus_u + u * self.alpha2)).sqrt()
    }

    /// Returns a half vector sampled from the distribution around `nf` and
    /// the cosine of its angle with `nf`.
    ///
    /// * `nf` - Facing normal.
    /// * `tx` - Unit tangent orthogonal to `nf`.
    /// * `ty` - Unit bitangent orthogonal to `nf` and `tx`.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_wh(&self, nf: &Normal3f, tx: &Vector3f, ty: &Vector3f, u: &Point2f) -> (Vector3f, Float) {
        let cos_theta = self.sample_cos_theta(u[0]);
        let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
        let phi = u[1] * TWO_PI;

        let x = sin_theta * phi.cos();
        let y = sin_theta * phi.sin();
        let m = x * *tx + y * *ty + cos_theta * Vector3f::from(nf);
        (m, cos_theta)
    }
}

/// Returns the facing normal, flipped if needed to lie on the side of the
/// viewer, and its cosine with the view direction.
///
/// * `n` - Shading normal.
/// * `v` - Direction towards the viewer.
#[inline(always)]
pub fn resolve_facing(n: &Normal3f, v: &Vector3f) -> (Normal3f, Float) {
    let nf = n.face_forward(v);
    (nf, nf.dot(v))
}

/// Reflects `v` about the microfacet normal `m`.
///
/// * `v` - Direction towards the viewer.
/// * `m` - Unit microfacet normal.
#[inline(always)]
pub fn reflect_about(v: &Vector3f, m: &Vector3f) -> Vector3f {
    2.0 * v.abs_dot(m) * *m - *v
}

/// Combines the distribution and masking terms into the lobe weight and
/// the forward and reverse densities.
///
/// * `d`     - Normal distribution function value.
/// * `g1`    - Masking term of the view direction.
/// * `g2`    - Masking term of the outgoing direction.
/// * `cos_i` - Cosine between the facing normal and the view direction.
/// * `cos_o` - Cosine between the facing normal and the outgoing direction.
/// * `color` - Reflectance.
pub fn ggx_weight(d: Float, g1: Float, g2: Float, cos_i: Float, cos_o: Float, color: &Spectrum) -> LobeEval {
    let (weight, fpdf) = if cos_i > 0.0 {
        (*color * (g1 * g2 * d / (4.0 * cos_i)), d * g1 / (4.0 * cos_i))
    } else {
        (Spectrum::ZERO, 0.0)
    };
    let rpdf = if cos_o > 0.0 { d * g2 / (4.0 * cos_o) } else { 0.0 };

    LobeEval { weight, fpdf, rpdf }
}

/// Evaluates the lobe given the half vector angle and the cosines of the
/// view and outgoing directions with the facing normal.
///
/// * `distrib`     - The microfacet distribution.
/// * `cos_theta_h` - Cosine of the half vector angle.
/// * `cos_i`       - Cosine between the facing normal and the view direction.
/// * `cos_o`       - Cosine between the facing normal and the outgoing direction.
/// * `color`       - Reflectance.
pub fn evaluate_half_vector(
    distrib: &GGXDistribution,
    cos_theta_h: Float,
    cos_i: Float,
    cos_o: Float,
    color: &Spectrum,
) -> LobeEval {
    let d = distrib.d(cos_theta_h);
    let g1 = distrib.g1(cos_i);
    let g2 = distrib.g1(cos_o);
    ggx_weight(d, g1, g2, cos_i, cos_o, color)
}

/// Samples an outgoing direction by reflecting `v` about a half vector drawn
/// from the distribution. Returns the direction and the cosine of the half
/// vector angle, or `None` if the half vector faces away from `v`.
///
/// * `distrib` - The microfacet distribution.
/// * `nf`      - Facing normal.
/// * `tn`      - Surface tangent.
/// * `v`       - Direction towards the viewer.
/// * `u`       - The 2D uniform random values.
pub fn sample_direction(
    distrib: &GGXDistribution,
    nf: &Normal3f,
    tn: &Vector3f,
    v: &Vector3f,
    u: &Point2f,
) -> Option<(Vector3f, Float)> {
    let (tx, ty) = shading_basis(nf, tn);
    let (m, cos_theta_h) = distrib.sample_wh(nf, &tx, &ty, u);
    if v.dot(&m) <= 0.0 {
        return None;
    }
    Some((reflect_about(v, &m), cos_theta_h))
}

/// Evaluates the lobe for a view direction and an outgoing direction on the
/// facing side of the surface.
///
/// * `distrib` - The microfacet distribution.
/// * `nf`      - Facing normal.
/// * `v`       - Direction towards the viewer.
/// * `l`       - Outgoing direction.
/// * `color`   - Reflectance.
pub fn evaluate(distrib: &GGXDistribution, nf: &Normal3f, v: &Vector3f, l: &Vector3f, color: &Spectrum) -> LobeEval {
    let m = (*l + *v).normalize();
    let cos_theta_h = nf.abs_dot(&m);
    evaluate_half_vector(distrib, cos_theta_h, nf.dot(v), nf.dot(l), color)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
