//! The four transformations (si hua) keyed by heavenly stem.
//!
//! Each stem designates an ordered list of four stars; wherever those stars
//! were placed, they carry the matching tag (Lu, Quan, Ke, Ji). The same
//! table drives both birth-year tagging and per-palace flying-star paths.

use serde::{Deserialize, Serialize};

use crate::cycle::Stem;
use crate::star::Star;

/// The four transformation tags, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transformation {
    Lu,
    Quan,
    Ke,
    Ji,
}

/// All four transformations in table order.
pub const ALL_TRANSFORMATIONS: [Transformation; 4] = [
    Transformation::Lu,
    Transformation::Quan,
    Transformation::Ke,
    Transformation::Ji,
];

impl Transformation {
    /// Single-character traditional label.
    pub const fn label(self) -> char {
        match self {
            Self::Lu => '祿',
            Self::Quan => '權',
            Self::Ke => '科',
            Self::Ji => '忌',
        }
    }
}

/// Transformation target stars per stem (rows Jia..Gui, columns Lu Quan Ke
/// Ji).
const SI_HUA_TABLE: [[Star; 4]; 10] = [
    [Star::LianZhen, Star::PoJun, Star::WuQu, Star::TaiYang],
    [Star::TianJi, Star::TianLiang, Star::ZiWei, Star::TaiYin],
    [Star::TianTong, Star::TianJi, Star::WenChang, Star::LianZhen],
    [Star::TaiYin, Star::TianTong, Star::TianJi, Star::JuMen],
    [Star::TanLang, Star::TaiYin, Star::YouBi, Star::TianJi],
    [Star::WuQu, Star::TanLang, Star::TianLiang, Star::WenQu],
    [Star::TaiYang, Star::WuQu, Star::TaiYin, Star::TianTong],
    [Star::JuMen, Star::TaiYang, Star::WenQu, Star::WenChang],
    [Star::TianLiang, Star::ZiWei, Star::ZuoFu, Star::WuQu],
    [Star::PoJun, Star::JuMen, Star::TaiYin, Star::TanLang],
];

/// The ordered four target stars of a stem.
pub fn transformation_targets(stem: Stem) -> &'static [Star; 4] {
    &SI_HUA_TABLE[stem.index() as usize]
}

/// Tag carried by `star` under `stem`, by name match.
pub fn transformation_of(stem: Stem, star: Star) -> Option<Transformation> {
    transformation_targets(stem)
        .iter()
        .position(|&s| s == star)
        .map(|i| ALL_TRANSFORMATIONS[i])
}
