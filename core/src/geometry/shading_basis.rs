//! Shading basis

use super::common::*;
use super::{Normal3f, Vector3f};
use crate::pbrt::*;

/// Returns two unit vectors that form an orthonormal basis with the unit
/// vector `v1`.
///
/// A second vector is constructed from the first by zeroing one of the
/// coordinates and swapping the remaining 2 and negating one of them. This
/// vector is also normalized. The third vector is the cross product of the
/// given vector and the second vector.
///
/// * `v1` - The first unit vector to form part of the coordinate system.
pub fn coordinate_system(v1: &Vector3f) -> (Vector3f, Vector3f) {
    let v2 = if abs(v1.x) > abs(v1.y) {
        Vector3f::new(-v1.z, 0.0, v1.x) / (v1.x * v1.x + v1.z * v1.z).sqrt()
    } else {
        Vector3f::new(0.0, v1.z, -v1.y) / (v1.y * v1.y + v1.z * v1.z).sqrt()
    };

    let v3 = v1.cross(&v2);

    (v2, v3)
}

/// Returns the tangent `tx` and bitangent `ty` of a right handed shading
/// frame around the unit normal `n`.
///
/// The tangent is made orthogonal to `n` (Gram-Schmidt). When the tangent is
/// missing or parallel to the normal an arbitrary frame is built from `n`.
///
/// * `n` - The unit normal.
/// * `t` - The surface tangent.
pub fn shading_basis(n: &Normal3f, t: &Vector3f) -> (Vector3f, Vector3f) {
    let nv = Vector3f::from(n);
    let tx = *t - nv * n.dot(t);
    if tx.length_squared() < 1e-4 {
        return coordinate_system(&nv);
    }

    let tx = tx.normalize();
    let ty = nv.cross(&tx);
    (tx, ty)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
