//! Application related stuff

use crate::pbrt::*;
use crate::spectrum::*;
use clap::Parser;

lazy_static! {
    /// The global application options.
    pub static ref OPTIONS: Options = Options::parse();
}

/// System wide options.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Estimates the directional albedo of the GGX reflection lobe.", long_about = None)]
pub struct Options {
    /// Surface roughness.
    #[arg(
        long = "roughness",
        short = 'r',
        value_name = "FLOAT",
        default_value_t = 0.5,
        help = "Surface roughness in [0, 1]."
    )]
    pub roughness: Float,

    /// Reflectance.
    #[arg(
        long = "color",
        short = 'c',
        value_name = "FLOAT",
        num_args = 3,
        allow_negative_numbers = true,
        default_values_t = [1.0, 1.0, 1.0],
        help = "Reflectance color (r g b)."
    )]
    pub color: Vec<Float>,

    /// Number of samples per view direction.
    #[arg(
        long = "samples",
        short = 's',
        value_name = "NUM",
        default_value_t = 65536,
        help = "Number of samples per view direction."
    )]
    pub samples: usize,

    /// Number of view directions.
    #[arg(
        long = "angles",
        short = 'a',
        value_name = "NUM",
        default_value_t = 16,
        help = "Number of view directions evenly spaced in cos(theta)."
    )]
    pub angles: usize,

    /// Random number sequence seed.
    #[arg(long = "seed", value_name = "NUM", default_value_t = 0, help = "Random number sequence seed.")]
    pub seed: u64,

    /// Number of threads to use.
    #[arg(
        long = "nthreads",
        short = 't',
        value_name = "NUM",
        default_value_t = 1,
        help = "Use specified number of threads."
    )]
    n_threads: usize,

    /// Suppress all text output other than error messages and results.
    #[arg(long, help = "Suppress all text output other than error messages and results.")]
    pub quiet: bool,
}

impl Options {
    /// Returns the number of threads to use.
    pub fn threads(&self) -> usize {
        let max_threads = num_cpus::get();
        match self.n_threads {
            0 => {
                warn!("Invalid nthreads");
                1
            }
            n if n > max_threads => {
                warn!("Num threads > max logical CPUs {}", max_threads);
                max_threads
            }
            n => n,
        }
    }

    /// Returns the reflectance.
    pub fn reflectance(&self) -> Result<Spectrum, String> {
        match self.color[..] {
            [r, g, b] if r >= 0.0 && g >= 0.0 && b >= 0.0 => Ok(Spectrum::from_rgb(&[r, g, b])),
            _ => Err(format!("Invalid color {:?}; expected 3 non-negative values", self.color)),
        }
    }
}
