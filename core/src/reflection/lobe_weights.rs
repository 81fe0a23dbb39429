//! Lobe Weights

use super::LobeSampled;
use crate::spectrum::*;

/// Color weights of a batch of points, one array per active lobe.
#[derive(Clone, Debug, Default)]
pub struct LobeWeights {
    /// Number of points in the batch.
    n_pts: usize,

    /// Active lobes.
    lobes: Vec<LobeSampled>,

    /// Weights for each active lobe.
    weights: Vec<Vec<Spectrum>>,

    /// Number of calls to `add_active_lobe()` since the last `clear()`.
    requests: usize,
}

impl LobeWeights {
    /// Create a new `LobeWeights` for a batch of points.
    ///
    /// * `n_pts` - Number of points in the batch.
    pub fn new(n_pts: usize) -> Self {
        Self {
            n_pts,
            ..Self::default()
        }
    }

    /// Returns the number of points in the batch.
    pub fn num_pts(&self) -> usize {
        self.n_pts
    }

    /// Activates a lobe and returns its weights initialized to zero. If the
    /// lobe is already active its existing weights are returned.
    ///
    /// * `lobe` - The lobe.
    pub fn add_active_lobe(&mut self, lobe: LobeSampled) -> &mut [Spectrum] {
        self.requests += 1;

        let idx = match self.lobes.iter().position(|l| l.same_lobe(&lobe)) {
            Some(idx) => idx,
            None => {
                self.lobes.push(lobe);
                self.weights.push(vec![Spectrum::ZERO; self.n_pts]);
                self.lobes.len() - 1
            }
        };
        &mut self.weights[idx]
    }

    /// Returns the weights of an active lobe.
    ///
    /// * `lobe` - The lobe.
    pub fn weights(&self, lobe: &LobeSampled) -> Option<&[Spectrum]> {
        self.lobes
            .iter()
            .position(|l| l.same_lobe(lobe))
            .map(|idx| self.weights[idx].as_slice())
    }

    /// Returns the active lobes.
    pub fn active_lobes(&self) -> &[LobeSampled] {
        &self.lobes
    }

    /// Returns the number of times a lobe was activated.
    pub fn request_count(&self) -> usize {
        self.requests
    }

    /// Deactivates all lobes and resizes for a new batch.
    ///
    /// * `n_pts` - Number of points in the batch.
    pub fn clear(&mut self, n_pts: usize) {
        self.n_pts = n_pts;
        self.lobes.clear();
        self.weights.clear();
        self.requests = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOBE: LobeSampled = LobeSampled::new(false, true, true, false, 0);

    #[test]
    fn add_active_lobe_zero_initializes() {
        let mut weights = LobeWeights::new(3);
        let w = weights.add_active_lobe(LOBE);
        assert_eq!(w.len(), 3);
        assert!(w.iter().all(|s| s.is_black()));
        w[1] = Spectrum::new(0.5);

        assert_eq!(weights.request_count(), 1);
        assert_eq!(weights.active_lobes(), &[LOBE]);
        assert_eq!(weights.weights(&LOBE).map(|w| w[1]), Some(Spectrum::new(0.5)));
    }

    #[test]
    fn same_lobe_reuses_weights() {
        let mut weights = LobeWeights::new(2);
        weights.add_active_lobe(LOBE)[0] = Spectrum::ONE;

        let mut invalid = LOBE;
        invalid.set_valid(false);
        let w = weights.add_active_lobe(invalid);
        assert_eq!(w[0], Spectrum::ONE);
        assert_eq!(weights.request_count(), 2);
        assert_eq!(weights.active_lobes().len(), 1);
    }

    #[test]
    fn inactive_lobe_has_no_weights() {
        let weights = LobeWeights::new(2);
        assert!(weights.weights(&LOBE).is_none());
        assert_eq!(weights.request_count(), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut weights = LobeWeights::new(2);
        weights.add_active_lobe(LOBE);
        weights.clear(5);
        assert_eq!(weights.num_pts(), 5);
        assert_eq!(weights.request_count(), 0);
        assert!(weights.active_lobes().is_empty());
        assert_eq!(weights.add_active_lobe(LOBE).len(), 5);
    }
}
