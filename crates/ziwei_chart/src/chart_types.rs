//! Caller-facing chart types.
//!
//! A `Chart` is an immutable value: the assembler produces a fresh one on
//! every input change, never mutates one in place. All types serialize so
//! callers can hand engine output to external collaborators.

use serde::{Deserialize, Serialize};

use ziwei_base::limit::DecadeWindow;
use ziwei_base::palace::{PalaceName, grid_slot};
use ziwei_base::sihua::Transformation;
use ziwei_base::star::Star;
use ziwei_base::{Branch, Bureau, Stem};

/// The four independently settable overlay anchors. Setting any one means
/// recomputing the whole chart; there is no partial update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Branch of the Life palace.
    pub life: Option<Branch>,
    /// Branch of the active decade-limit palace.
    pub decade: Option<Branch>,
    /// Branch of the active year-limit palace.
    pub year: Option<Branch>,
    /// Branch of the active small-limit palace.
    pub small: Option<Branch>,
}

/// A star as placed in a palace, with its birth-year transformation tag
/// if it carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedStar {
    pub star: Star,
    pub transformation: Option<Transformation>,
}

/// One entry of a palace stem's own transformation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarTransformation {
    pub star: Star,
    pub transformation: Transformation,
}

/// Overlay labels of a palace, one per active overlay anchor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayLabels {
    pub decade: Option<String>,
    pub year: Option<String>,
    pub small: Option<String>,
}

/// One of the 12 chart palaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palace {
    /// Fixed grid slot, 0-11.
    pub id: u8,
    pub stem: Stem,
    pub branch: Branch,
    /// Canonical name; present only once a Life palace is configured.
    pub name: Option<PalaceName>,
    /// The palace stem's own four transformation targets.
    pub stem_transformations: [StarTransformation; 4],
    pub primary_stars: Vec<PlacedStar>,
    pub assistant_stars: Vec<PlacedStar>,
    pub overlay: OverlayLabels,
    /// Present once birth data and a Life palace are configured.
    pub decade_window: Option<DecadeWindow>,
}

impl Palace {
    /// Whether `star` was placed in this palace (either grade list).
    pub fn holds_star(&self, star: Star) -> bool {
        self.primary_stars.iter().any(|p| p.star == star)
            || self.assistant_stars.iter().any(|p| p.star == star)
    }
}

/// A complete 12-palace chart. Palaces are in grid order; branches form a
/// bijection with the 12 grid slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub palaces: [Palace; 12],
    /// Five-element bureau of the Life palace, when stars were computed.
    pub bureau: Option<Bureau>,
}

impl Chart {
    /// The palace bound to `branch`.
    pub fn palace_by_branch(&self, branch: Branch) -> &Palace {
        &self.palaces[grid_slot(branch)]
    }

    /// The Life palace, when one is configured.
    pub fn life_palace(&self) -> Option<&Palace> {
        self.palaces
            .iter()
            .find(|p| p.name == Some(PalaceName::Life))
    }
}
