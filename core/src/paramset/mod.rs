//! Parameter Sets

use crate::pbrt::*;
use crate::spectrum::*;
use std::collections::HashMap;
use std::fmt;

mod param_info;
mod paramset_item;

// Re-export
pub use param_info::*;
pub use paramset_item::*;

/// A hashmap of parameter sets stored by name.
pub type ParamSetMap<T> = HashMap<String, ParamSetItem<T>>;

/// Stores parameter set items of different types in hashmaps.
#[derive(Clone, Default)]
pub struct ParamSet {
    pub floats: ParamSetMap<Float>,
    pub spectra: ParamSetMap<Spectrum>,
}

/// Define a macro that can be used to generate a function for adding/replacing
/// parameter set item.
macro_rules! paramset_add {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&mut self, name: &str, values: &[$t]) {
            let n = String::from(name);
            self.$paramset.insert(n, ParamSetItem::new(values.to_vec()));
        }
    };
}

/// Define a macro that can be used to generate a function for removing
/// parameter set item.
macro_rules! paramset_erase {
    ($func: ident, $paramset: ident) => {
        pub fn $func(&mut self, name: &str) -> bool {
            self.$paramset.remove(name).is_some()
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item that is stored as a single item.
macro_rules! paramset_find_one {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str, default: $t) -> $t {
            match self.$paramset.get(name) {
                Some(param) if param.values.len() == 1 => {
                    param.looked_up.set(true);
                    param.values[0].clone()
                }
                _ => default.clone(),
            }
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item that is stored as a list.
macro_rules! paramset_find {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str) -> Option<&[$t]> {
            self.$paramset.get(name).map(|param| {
                param.looked_up.set(true);
                param.values.as_slice()
            })
        }
    };
}

/// Define a macro that can be used to print parameter set items.
macro_rules! display_param {
    ($params: expr, $param_type: literal, $formatter: expr) => {
        let mut names: Vec<&String> = $params.keys().collect();
        names.sort();
        for name in names {
            writeln!($formatter, "\"{} {}\" {}", $param_type, name, $params[name])?;
        }
    };
}

impl ParamSet {
    /// Returns a new `ParamSet`.
    pub fn new() -> Self {
        Self {
            floats: HashMap::new(),
            spectra: HashMap::new(),
        }
    }

    paramset_erase!(erase_float, floats);
    paramset_find_one!(find_one_float, Float, floats);
    paramset_find!(find_float, Float, floats);
    paramset_add!(add_float, Float, floats);

    paramset_erase!(erase_spectrum, spectra);
    paramset_find_one!(find_one_spectrum, Spectrum, spectra);
    paramset_find!(find_spectrum, Spectrum, spectra);
    paramset_add!(add_spectrum, Spectrum, spectra);

    /// Add/replace an RGB spectrum.
    ///
    /// * `name`   - Parameter name.
    /// * `values` - RGB values in a linear slice.
    pub fn add_rgb_spectrum(&mut self, name: &str, values: &[Float]) {
        let n = values.len();
        assert!(n % 3 == 0, "RGB spectrum values % 3 != 0");

        self.spectra.insert(
            String::from(name),
            ParamSetItem::new(
                values
                    .chunks_exact(3)
                    .map(|c| Spectrum::from_rgb(&[c[0], c[1], c[2]]))
                    .collect(),
            ),
        );
    }

    /// Returns the names of parameters that were never looked up.
    pub fn unused(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .floats
            .iter()
            .filter(|(_, p)| !p.looked_up.get())
            .map(|(n, _)| format!("float {}", n))
            .chain(
                self.spectra
                    .iter()
                    .filter(|(_, p)| !p.looked_up.get())
                    .map(|(n, _)| format!("color {}", n)),
            )
            .collect();
        names.sort();
        names
    }

    /// Clear all parameter set items.
    pub fn clear(&mut self) {
        self.floats.clear();
        self.spectra.clear();
    }
}

impl fmt::Display for ParamSet {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_param!(self.floats, "float", f);
        display_param!(self.spectra, "color", f);
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_one_returns_default_when_missing() {
        let ps = ParamSet::new();
        assert_eq!(ps.find_one_float("Roughness", 0.25), 0.25);
        assert_eq!(ps.find_one_spectrum("Color", Spectrum::new(0.5)), Spectrum::new(0.5));
    }

    #[test]
    fn find_one_returns_default_for_lists() {
        let mut ps = ParamSet::new();
        ps.add_float("Roughness", &[0.1, 0.2]);
        assert_eq!(ps.find_one_float("Roughness", 0.25), 0.25);
        assert_eq!(ps.find_float("Roughness"), Some(&[0.1, 0.2][..]));
    }

    #[test]
    fn add_rgb_spectrum_groups_triplets() {
        let mut ps = ParamSet::new();
        ps.add_rgb_spectrum("Color", &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        let colors = ps.find_spectrum("Color").unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].to_rgb(), [1.0, 0.0, 0.0]);
        assert_eq!(colors[1].to_rgb(), [0.0, 1.0, 0.0]);
    }

    #[test]
    #[should_panic]
    fn add_rgb_spectrum_panics_on_partial_triplet() {
        ParamSet::new().add_rgb_spectrum("Color", &[1.0, 0.0]);
    }

    #[test]
    fn unused_reports_parameters_never_looked_up() {
        let mut ps = ParamSet::new();
        ps.add_float("Roughness", &[0.1]);
        ps.add_float("Anisotropy", &[0.3]);
        ps.add_rgb_spectrum("Color", &[1.0, 1.0, 1.0]);
        let _ = ps.find_one_float("Roughness", 0.0);
        assert_eq!(ps.unused(), vec!["color Color".to_string(), "float Anisotropy".to_string()]);
    }

    #[test]
    fn erase_removes_parameter() {
        let mut ps = ParamSet::new();
        ps.add_float("Roughness", &[0.1]);
        assert!(ps.erase_float("Roughness"));
        assert!(!ps.erase_float("Roughness"));
        ps.add_float("Roughness", &[0.1]);
        ps.clear();
        assert!(ps.find_float("Roughness").is_none());
    }

    #[test]
    fn display_lists_parameters_by_type() {
        let mut ps = ParamSet::new();
        ps.add_float("Roughness", &[0.5]);
        assert_eq!(format!("{}", ps), "\"float Roughness\" [0.5]\n");
    }
}
