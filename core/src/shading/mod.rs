//! Shading Context

use crate::geometry::*;
use crate::paramset::*;
use crate::pbrt::*;
use crate::spectrum::*;
use std::fmt::Display;

/// A batch of shading points handed to a scattering model. All directional
/// quantities are expected to be unit length; this is not validated.
#[derive(Clone, Default)]
pub struct ShadingContext {
    /// Shading normals.
    pub nn: Vec<Normal3f>,

    /// Geometric normals.
    pub ngn: Vec<Normal3f>,

    /// Surface tangents.
    pub tn: Vec<Vector3f>,

    /// Directions towards the viewer.
    pub vn: Vec<Vector3f>,

    /// Material inputs bound to the batch.
    pub params: ParamSet,
}

impl ShadingContext {
    /// Create a new `ShadingContext`. Returns an error if the arrays do not
    /// all contain the same number of points.
    ///
    /// * `nn`  - Shading normals.
    /// * `ngn` - Geometric normals.
    /// * `tn`  - Surface tangents.
    /// * `vn`  - Directions towards the viewer.
    pub fn new(
        nn: Vec<Normal3f>,
        ngn: Vec<Normal3f>,
        tn: Vec<Vector3f>,
        vn: Vec<Vector3f>,
    ) -> Result<Self, String> {
        let n = nn.len();
        if ngn.len() != n || tn.len() != n || vn.len() != n {
            return Err(format!(
                "Shading arrays differ in length: Nn={}, Ngn={}, Tn={}, Vn={}.",
                n,
                ngn.len(),
                tn.len(),
                vn.len()
            ));
        }

        Ok(Self {
            nn,
            ngn,
            tn,
            vn,
            params: ParamSet::new(),
        })
    }

    /// Create a new `ShadingContext` where every point shares the same
    /// geometry.
    ///
    /// * `n_pts` - Number of points.
    /// * `n`     - Shading and geometric normal.
    /// * `t`     - Surface tangent.
    /// * `v`     - Direction towards the viewer.
    pub fn uniform(n_pts: usize, n: Normal3f, t: Vector3f, v: Vector3f) -> Self {
        Self {
            nn: vec![n; n_pts],
            ngn: vec![n; n_pts],
            tn: vec![t; n_pts],
            vn: vec![v; n_pts],
            params: ParamSet::new(),
        }
    }

    /// Replace the material inputs bound to the batch.
    ///
    /// * `params` - The material inputs.
    pub fn with_params(mut self, params: ParamSet) -> Self {
        self.params = params;
        self
    }

    /// Returns the number of shading points.
    pub fn num_pts(&self) -> usize {
        self.nn.len()
    }

    /// Evaluates a color parameter for every point.
    ///
    /// * `name`    - Parameter name.
    /// * `default` - Value used when the parameter is not bound.
    pub fn eval_color_param(&self, name: &str, default: Spectrum) -> Vec<Spectrum> {
        broadcast(name, self.params.find_spectrum(name), default, self.num_pts())
    }

    /// Evaluates a float parameter for every point.
    ///
    /// * `name`    - Parameter name.
    /// * `default` - Value used when the parameter is not bound.
    pub fn eval_float_param(&self, name: &str, default: Float) -> Vec<Float> {
        broadcast(name, self.params.find_float(name), default, self.num_pts())
    }
}

/// Expands a bound parameter to one value per point. A single value is
/// shared by all points and `n_pts` values are taken as is. Anything else
/// falls back to the default.
///
/// * `name`    - Parameter name.
/// * `values`  - The bound values, if any.
/// * `default` - Default value.
/// * `n_pts`   - Number of points.
fn broadcast<T: Copy + Display>(name: &str, values: Option<&[T]>, default: T, n_pts: usize) -> Vec<T> {
    match values {
        None => vec![default; n_pts],
        Some([v]) => vec![*v; n_pts],
        Some(v) if v.len() == n_pts => v.to_vec(),
        Some(v) => {
            warn!(
                "Parameter '{}' has {} values for {} points. Using default {}.",
                name,
                v.len(),
                n_pts,
                default
            );
            vec![default; n_pts]
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
