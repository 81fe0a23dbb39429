//! Sampler

use crate::geometry::*;
use crate::rng::*;

/// Source of uniform 2D samples in [0, 1)². A batch of `n` shading points
/// consumes exactly `n` samples, one per point in point order.
pub trait SampleSource {
    /// Returns `n` samples.
    ///
    /// * `n` - The number of samples to draw.
    fn draw_samples_2d(&mut self, n: usize) -> Result<Vec<Point2f>, String>;
}

/// Draws samples from a PCG32 random number generator.
#[derive(Clone, Default)]
pub struct RandomSampleSource {
    /// The random number generator.
    rng: RNG,
}

impl RandomSampleSource {
    /// Create a new `RandomSampleSource`.
    ///
    /// * `seed` - The sequence index for the random number generator.
    pub fn new(seed: u64) -> Self {
        Self { rng: RNG::new(seed) }
    }
}

impl SampleSource for RandomSampleSource {
    /// Returns `n` samples.
    ///
    /// * `n` - The number of samples to draw.
    fn draw_samples_2d(&mut self, n: usize) -> Result<Vec<Point2f>, String> {
        Ok((0..n)
            .map(|_| {
                let x = self.rng.uniform_float();
                let y = self.rng.uniform_float();
                Point2f::new(x, y)
            })
            .collect())
    }
}

/// Hands out samples that the caller drew ahead of time.
#[derive(Clone, Default)]
pub struct FixedSampleSource {
    /// The pre-supplied samples.
    samples: Vec<Point2f>,

    /// Index of the next sample to hand out.
    next: usize,
}

impl FixedSampleSource {
    /// Create a new `FixedSampleSource`. Returns an error if any sample lies
    /// outside [0, 1)².
    ///
    /// * `samples` - The pre-supplied samples.
    pub fn new(samples: Vec<Point2f>) -> Result<Self, String> {
        let range = 0.0..1.0;
        match samples
            .iter()
            .position(|u| !range.contains(&u.x) || !range.contains(&u.y))
        {
            Some(i) => Err(format!("Sample {} ({}) is outside [0, 1)^2.", i, samples[i])),
            None => Ok(Self { samples, next: 0 }),
        }
    }

    /// Returns the number of samples not yet handed out.
    pub fn remaining(&self) -> usize {
        self.samples.len() - self.next
    }
}

impl SampleSource for FixedSampleSource {
    /// Returns the next `n` pre-supplied samples.
    ///
    /// * `n` - The number of samples to draw.
    fn draw_samples_2d(&mut self, n: usize) -> Result<Vec<Point2f>, String> {
        if n > self.remaining() {
            return Err(format!(
                "Requested {} samples but only {} remain.",
                n,
                self.remaining()
            ));
        }

        let start = self.next;
        self.next += n;
        Ok(self.samples[start..self.next].to_vec())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_source_draws_exactly_n_samples_in_unit_square() {
        let mut source = RandomSampleSource::new(3);
        let samples = source.draw_samples_2d(257).unwrap();
        assert_eq!(samples.len(), 257);
        assert!(samples
            .iter()
            .all(|u| (0.0..1.0).contains(&u.x) && (0.0..1.0).contains(&u.y)));
    }

    #[test]
    fn random_source_is_deterministic_per_seed() {
        let a = RandomSampleSource::new(11).draw_samples_2d(16).unwrap();
        let b = RandomSampleSource::new(11).draw_samples_2d(16).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_source_hands_out_samples_in_order() {
        let samples = vec![
            Point2f::new(0.1, 0.2),
            Point2f::new(0.3, 0.4),
            Point2f::new(0.5, 0.6),
        ];
        let mut source = FixedSampleSource::new(samples.clone()).unwrap();
        assert_eq!(source.draw_samples_2d(2).unwrap(), samples[0..2].to_vec());
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.draw_samples_2d(1).unwrap(), samples[2..3].to_vec());
    }

    #[test]
    fn fixed_source_rejects_overdraw() {
        let mut source = FixedSampleSource::new(vec![Point2f::new(0.5, 0.5)]).unwrap();
        assert!(source.draw_samples_2d(2).is_err());
        // A failed draw consumes nothing.
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn fixed_source_rejects_samples_outside_unit_square() {
        assert!(FixedSampleSource::new(vec![Point2f::new(1.0, 0.5)]).is_err());
        assert!(FixedSampleSource::new(vec![Point2f::new(0.5, -0.1)]).is_err());
    }
}
