//! Strength tiers and the rules that pick one.

/// Length from which `Medium` becomes reachable.
pub const MEDIUM_LENGTH: usize = 8;
/// Length from which `Strong` becomes reachable.
pub const STRONG_LENGTH: usize = 12;
/// Length from which `VeryStrong` becomes reachable.
pub const VERY_STRONG_LENGTH: usize = 16;

/// Discrete strength of a password, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    Empty,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Every tier, weakest first.
    pub const ALL: [StrengthTier; 5] = [
        StrengthTier::Empty,
        StrengthTier::Weak,
        StrengthTier::Medium,
        StrengthTier::Strong,
        StrengthTier::VeryStrong,
    ];

    /// Picks the tier for a password of `length` characters containing
    /// `type_count` character classes. First matching rule wins.
    pub fn classify(length: usize, type_count: usize) -> Self {
        if length == 0 {
            StrengthTier::Empty
        } else if length < MEDIUM_LENGTH || type_count <= 1 {
            StrengthTier::Weak
        } else if length >= VERY_STRONG_LENGTH && type_count == 4 {
            StrengthTier::VeryStrong
        } else if length >= STRONG_LENGTH && type_count >= 3 {
            StrengthTier::Strong
        } else if length >= MEDIUM_LENGTH && type_count >= 2 {
            StrengthTier::Medium
        } else {
            StrengthTier::Weak
        }
    }

    /// Style class applied to the label and the bar fill.
    ///
    /// `Empty` has none: the surface shows its neutral style.
    pub fn style_class(self) -> Option<&'static str> {
        match self {
            StrengthTier::Empty => None,
            StrengthTier::Weak => Some("faible"),
            StrengthTier::Medium => Some("moyen"),
            StrengthTier::Strong => Some("fort"),
            StrengthTier::VeryStrong => Some("tres-fort"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_empty_ignores_type_count() {
        for types in 0..=4 {
            assert_eq!(StrengthTier::classify(0, types), StrengthTier::Empty);
        }
    }

    #[test]
    fn test_classify_short_is_weak() {
        for len in 1..MEDIUM_LENGTH {
            assert_eq!(StrengthTier::classify(len, 4), StrengthTier::Weak);
        }
    }

    #[test]
    fn test_classify_single_class_is_weak_at_any_length() {
        for len in [8, 12, 16, 64] {
            assert_eq!(StrengthTier::classify(len, 0), StrengthTier::Weak);
            assert_eq!(StrengthTier::classify(len, 1), StrengthTier::Weak);
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(StrengthTier::classify(8, 2), StrengthTier::Medium);
        assert_eq!(StrengthTier::classify(11, 4), StrengthTier::Medium);
        assert_eq!(StrengthTier::classify(12, 2), StrengthTier::Medium);
        assert_eq!(StrengthTier::classify(12, 3), StrengthTier::Strong);
        assert_eq!(StrengthTier::classify(15, 4), StrengthTier::Strong);
        assert_eq!(StrengthTier::classify(16, 3), StrengthTier::Strong);
        assert_eq!(StrengthTier::classify(16, 4), StrengthTier::VeryStrong);
        assert_eq!(StrengthTier::classify(100, 4), StrengthTier::VeryStrong);
    }

    #[test]
    fn test_tiers_ordered_weakest_first() {
        for pair in StrengthTier::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_style_class() {
        assert_eq!(StrengthTier::Empty.style_class(), None);
        assert_eq!(StrengthTier::Weak.style_class(), Some("faible"));
        assert_eq!(StrengthTier::Medium.style_class(), Some("moyen"));
        assert_eq!(StrengthTier::Strong.style_class(), Some("fort"));
        assert_eq!(StrengthTier::VeryStrong.style_class(), Some("tres-fort"));
    }
}
