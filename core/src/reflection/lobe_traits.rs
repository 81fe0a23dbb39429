//! Lobe Traits

use super::LobeSampled;

bitflags! {
    /// Capabilities of scattering lobes. Used both to describe what a BxDF
    /// provides and to select which lobes a caller wants per point.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LobeTraits: u8 {
        const DIFFUSE_REFLECTION = 0b00000001;
        const SPECULAR_REFLECTION = 0b00000010;
        const DIFFUSE_TRANSMISSION = 0b00000100;
        const SPECULAR_TRANSMISSION = 0b00001000;
        const ALL = Self::DIFFUSE_REFLECTION.bits()
            | Self::SPECULAR_REFLECTION.bits()
            | Self::DIFFUSE_TRANSMISSION.bits()
            | Self::SPECULAR_TRANSMISSION.bits();
    }
}

impl LobeTraits {
    /// Returns true if any lobe is present.
    #[inline(always)]
    pub fn has_any(&self) -> bool {
        !self.is_empty()
    }
}

impl From<LobeSampled> for LobeTraits {
    /// Convert a lobe descriptor to the single trait it represents.
    ///
    /// * `lobe` - The lobe descriptor.
    fn from(lobe: LobeSampled) -> Self {
        if !lobe.is_valid() {
            return Self::empty();
        }
        match (lobe.is_specular(), lobe.is_reflect()) {
            (false, true) => Self::DIFFUSE_REFLECTION,
            (true, true) => Self::SPECULAR_REFLECTION,
            (false, false) => Self::DIFFUSE_TRANSMISSION,
            (true, false) => Self::SPECULAR_TRANSMISSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_any() {
        assert!(!LobeTraits::empty().has_any());
        assert!(LobeTraits::SPECULAR_REFLECTION.has_any());
        assert!(LobeTraits::ALL.has_any());
    }

    #[test]
    fn intersection_gates_lobes() {
        let wanted = LobeTraits::DIFFUSE_REFLECTION | LobeTraits::SPECULAR_TRANSMISSION;
        assert!(!(wanted & LobeTraits::SPECULAR_REFLECTION).has_any());
        assert!((LobeTraits::ALL & LobeTraits::SPECULAR_REFLECTION).has_any());
    }

    #[test]
    fn from_lobe_sampled() {
        let spec_refl = LobeSampled::new(false, true, true, false, 0);
        assert_eq!(LobeTraits::from(spec_refl), LobeTraits::SPECULAR_REFLECTION);

        let diff_trans = LobeSampled::new(false, false, false, false, 1);
        assert_eq!(LobeTraits::from(diff_trans), LobeTraits::DIFFUSE_TRANSMISSION);

        assert_eq!(LobeTraits::from(LobeSampled::NONE), LobeTraits::empty());
    }
}
