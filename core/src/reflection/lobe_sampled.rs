//! Lobe Descriptors

use std::fmt;

/// Identifies the lobe that produced a sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LobeSampled {
    valid: bool,
    discrete: bool,
    specular: bool,
    reflect: bool,
    user: bool,
    id: u8,
}

impl LobeSampled {
    /// An invalid lobe.
    pub const NONE: Self = Self {
        valid: false,
        discrete: false,
        specular: false,
        reflect: false,
        user: false,
        id: 0,
    };

    /// Create a new valid `LobeSampled`.
    ///
    /// * `discrete` - True for lobes concentrated in a single direction.
    /// * `specular` - True for specular lobes, false for diffuse.
    /// * `reflect`  - True for reflection lobes, false for transmission.
    /// * `user`     - True for user lobes.
    /// * `id`       - Lobe id within its category.
    pub const fn new(discrete: bool, specular: bool, reflect: bool, user: bool, id: u8) -> Self {
        Self {
            valid: true,
            discrete,
            specular,
            reflect,
            user,
            id,
        }
    }

    /// Returns true if the descriptor identifies a lobe.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Sets the validity flag.
    ///
    /// * `valid` - Validity flag.
    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    /// Returns true if the lobe is a discrete (delta) lobe.
    pub fn is_discrete(&self) -> bool {
        self.discrete
    }

    /// Returns true if the lobe is specular rather than diffuse.
    pub fn is_specular(&self) -> bool {
        self.specular
    }

    /// Returns true if the lobe reflects rather than transmits.
    pub fn is_reflect(&self) -> bool {
        self.reflect
    }

    /// Returns true if the lobe is a user lobe.
    pub fn is_user(&self) -> bool {
        self.user
    }

    /// Returns the lobe id within its category.
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Returns true if both descriptors name the same lobe regardless of
    /// their validity.
    ///
    /// * `other` - The other descriptor.
    pub fn same_lobe(&self, other: &Self) -> bool {
        self.discrete == other.discrete
            && self.specular == other.specular
            && self.reflect == other.reflect
            && self.user == other.user
            && self.id == other.id
    }
}

impl fmt::Display for LobeSampled {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "LobeSampled {{ invalid }}");
        }
        write!(
            f,
            "LobeSampled {{ {}{} {}{} id: {} }}",
            if self.discrete { "discrete " } else { "" },
            if self.specular { "specular" } else { "diffuse" },
            if self.reflect { "reflect" } else { "transmit" },
            if self.user { " user" } else { "" },
            self.id
        )
    }
}

/// Table of named lobes shared by the BxDFs of a renderer.
#[derive(Clone, Debug, Default)]
pub struct LobeRegistry {
    lobes: Vec<(String, LobeSampled)>,
}

impl LobeRegistry {
    /// Create an empty `LobeRegistry`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the descriptor registered under `name`, registering a new one
    /// with the given flags on first use.
    ///
    /// * `discrete` - True for lobes concentrated in a single direction.
    /// * `specular` - True for specular lobes, false for diffuse.
    /// * `reflect`  - True for reflection lobes, false for transmission.
    /// * `user`     - True for user lobes.
    /// * `id`       - Lobe id within its category.
    /// * `name`     - Lobe name.
    pub fn lookup_lobe_by_name(
        &mut self,
        discrete: bool,
        specular: bool,
        reflect: bool,
        user: bool,
        id: u8,
        name: &str,
    ) -> LobeSampled {
        let requested = LobeSampled::new(discrete, specular, reflect, user, id);
        if let Some((_, lobe)) = self.lobes.iter().find(|(n, _)| n == name) {
            if !lobe.same_lobe(&requested) {
                warn!("Lobe '{}' already registered as {}; ignoring {}", name, lobe, requested);
            }
            return *lobe;
        }

        debug!("Registering lobe '{}' as {}", name, requested);
        self.lobes.push((name.to_owned(), requested));
        requested
    }

    /// Returns the number of registered lobes.
    pub fn len(&self) -> usize {
        self.lobes.len()
    }

    /// Returns true if no lobes are registered.
    pub fn is_empty(&self) -> bool {
        self.lobes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_invalid() {
        assert!(!LobeSampled::NONE.is_valid());
        assert!(!LobeSampled::default().is_valid());
    }

    #[test]
    fn set_valid() {
        let mut lobe = LobeSampled::new(false, true, true, false, 3);
        assert!(lobe.is_valid());
        lobe.set_valid(false);
        assert!(!lobe.is_valid());
        assert_eq!(lobe.id(), 3);
        assert!(lobe.same_lobe(&LobeSampled::new(false, true, true, false, 3)));
    }

    #[test]
    fn registry_returns_first_registration() {
        let mut registry = LobeRegistry::new();
        assert!(registry.is_empty());

        let a = registry.lookup_lobe_by_name(false, true, true, false, 0, "Reflection");
        let b = registry.lookup_lobe_by_name(false, true, true, false, 0, "Reflection");
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);

        let c = registry.lookup_lobe_by_name(false, false, true, false, 1, "Reflection");
        assert_eq!(a, c);
        assert_eq!(registry.len(), 1);

        let d = registry.lookup_lobe_by_name(false, false, true, false, 1, "Diffuse");
        assert!(d.is_valid());
        assert!(!d.is_specular());
        assert_eq!(registry.len(), 2);
    }
}
