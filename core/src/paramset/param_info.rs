//! Parameter Table

use std::fmt;

/// Types of parameters a scattering model can declare.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParamType {
    /// A single `Float`.
    Float,

    /// An RGB color.
    Color,
}

/// An entry in the parameter table a scattering model declares to the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParamInfo {
    /// Parameter name.
    pub name: &'static str,

    /// Parameter type.
    pub param_type: ParamType,
}

impl ParamInfo {
    /// Create a new `ParamInfo`.
    ///
    /// * `name`       - Parameter name.
    /// * `param_type` - Parameter type.
    pub const fn new(name: &'static str, param_type: ParamType) -> Self {
        Self { name, param_type }
    }
}

impl fmt::Display for ParamInfo {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = match self.param_type {
            ParamType::Float => "float",
            ParamType::Color => "color",
        };
        write!(f, "\"{} {}\"", t, self.name)
    }
}
