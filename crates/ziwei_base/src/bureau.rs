//! Five-element bureau resolution from a palace's stem-branch pair.
//!
//! The bureau number (2-6) seeds both the Zi Wei anchor placement and the
//! decade-limit start age. The classical 30-row na-yin table collapses to a
//! dense 5x6 array: stems are grouped in adjacent pairs (Jia/Yi, Bing/Ding,
//! ...) and so are branches (Zi/Chou, Yin/Mao, ...), so the lookup is a
//! plain double index and a miss cannot occur.

use serde::{Deserialize, Serialize};

use crate::cycle::{Branch, Stem};

/// The five bureaus, valued by their element number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bureau {
    Water,
    Wood,
    Metal,
    Earth,
    Fire,
}

impl Bureau {
    /// The bureau number (2-6) used in anchor and limit arithmetic.
    pub const fn value(self) -> u8 {
        match self {
            Self::Water => 2,
            Self::Wood => 3,
            Self::Metal => 4,
            Self::Earth => 5,
            Self::Fire => 6,
        }
    }

    /// Create from a bureau number (2-6).
    pub fn from_value(v: u8) -> Option<Self> {
        match v {
            2 => Some(Self::Water),
            3 => Some(Self::Wood),
            4 => Some(Self::Metal),
            5 => Some(Self::Earth),
            6 => Some(Self::Fire),
            _ => None,
        }
    }

    /// Traditional bureau name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "水二局",
            Self::Wood => "木三局",
            Self::Metal => "金四局",
            Self::Earth => "土五局",
            Self::Fire => "火六局",
        }
    }
}

/// Bureau by stem-pair group (rows, `stem.index() / 2`) and branch-pair
/// group (columns, `branch.index() / 2`).
const BUREAU_TABLE: [[Bureau; 6]; 5] = [
    // Jia/Yi
    [
        Bureau::Metal,
        Bureau::Water,
        Bureau::Fire,
        Bureau::Metal,
        Bureau::Water,
        Bureau::Fire,
    ],
    // Bing/Ding
    [
        Bureau::Water,
        Bureau::Fire,
        Bureau::Earth,
        Bureau::Water,
        Bureau::Fire,
        Bureau::Earth,
    ],
    // Wu/Ji
    [
        Bureau::Fire,
        Bureau::Earth,
        Bureau::Wood,
        Bureau::Fire,
        Bureau::Earth,
        Bureau::Wood,
    ],
    // Geng/Xin
    [
        Bureau::Earth,
        Bureau::Wood,
        Bureau::Metal,
        Bureau::Earth,
        Bureau::Wood,
        Bureau::Metal,
    ],
    // Ren/Gui
    [
        Bureau::Wood,
        Bureau::Metal,
        Bureau::Water,
        Bureau::Wood,
        Bureau::Metal,
        Bureau::Water,
    ],
];

/// Resolve the five-element bureau of a stem-branch pair.
pub fn bureau_for(stem: Stem, branch: Branch) -> Bureau {
    BUREAU_TABLE[(stem.index() / 2) as usize][(branch.index() / 2) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::{ALL_BRANCHES, ALL_STEMS};

    #[test]
    fn bureau_values() {
        assert_eq!(Bureau::Water.value(), 2);
        assert_eq!(Bureau::Wood.value(), 3);
        assert_eq!(Bureau::Metal.value(), 4);
        assert_eq!(Bureau::Earth.value(), 5);
        assert_eq!(Bureau::Fire.value(), 6);
    }

    #[test]
    fn from_value_round_trip() {
        for v in 2..=6u8 {
            assert_eq!(Bureau::from_value(v).map(Bureau::value), Some(v));
        }
        assert_eq!(Bureau::from_value(1), None);
        assert_eq!(Bureau::from_value(7), None);
    }

    #[test]
    fn known_pairs() {
        // Jia Zi -> Metal 4, Bing Yin -> Fire 6, Ren Chen -> Water 2
        assert_eq!(bureau_for(Stem::Jia, Branch::Zi), Bureau::Metal);
        assert_eq!(bureau_for(Stem::Bing, Branch::Yin), Bureau::Fire);
        assert_eq!(bureau_for(Stem::Ren, Branch::Chen), Bureau::Water);
    }

    #[test]
    fn paired_stems_agree() {
        for pair in ALL_STEMS.chunks(2) {
            for b in ALL_BRANCHES {
                assert_eq!(bureau_for(pair[0], b), bureau_for(pair[1], b));
            }
        }
    }

    #[test]
    fn paired_branches_agree() {
        for s in ALL_STEMS {
            for pair in ALL_BRANCHES.chunks(2) {
                assert_eq!(bureau_for(s, pair[0]), bureau_for(s, pair[1]));
            }
        }
    }

    #[test]
    fn value_always_in_range() {
        for s in ALL_STEMS {
            for b in ALL_BRANCHES {
                let v = bureau_for(s, b).value();
                assert!((2..=6).contains(&v), "{s:?} {b:?} -> {v}");
            }
        }
    }
}
