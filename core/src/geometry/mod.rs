//! Geometry

// Define macros for property based testing.
#[cfg(test)]
#[macro_export]
macro_rules! prop_range {
    ($name: ident, $t: ty, $r: expr) => {
        prop_compose! {
            fn $name()(f in $r) -> $t {
                f
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_vector3 {
    ($name: ident, $t: ty, $xr: expr, $yr: expr, $zr: expr) => {
        prop_compose! {
            fn $name()(x in $xr, y in $yr, z in $zr) -> Vector3<$t> {
                Vector3 { x, y, z }
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_unit_vector3 {
    ($name: ident, $zr: expr) => {
        prop_compose! {
            fn $name()(z in $zr, phi in 0.0..TWO_PI) -> Vector3f {
                let r = max(0.0, 1.0 - z * z).sqrt();
                Vector3f::new(r * phi.cos(), r * phi.sin(), z).normalize()
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_point2 {
    ($name: ident, $t: ty, $xr: expr, $yr: expr) => {
        prop_compose! {
            fn $name()(x in $xr, y in $yr) -> Point2<$t> {
                Point2 { x, y }
            }
        }
    };
}

mod common;
mod normal;
mod point2;
mod shading_basis;
mod vector3;

// Re-export
pub use common::*;
pub use normal::*;
pub use point2::*;
pub use shading_basis::*;
pub use vector3::*;
