//! The star roster and its placement rules.
//!
//! 14 primary stars sit at fixed offsets from the Zi Wei / Tian Fu anchors.
//! The assistant and inauspicious stars each follow an independent
//! closed-form rule over birth month, birth hour-branch, or birth-year
//! stem. Rules are evaluated independently; several stars may land in the
//! same branch.

use serde::{Deserialize, Serialize};

use crate::cycle::{Branch, Stem, norm_mod};

/// Star grades: primary (14 majors), assistant (supporting stars), and
/// inauspicious (the four malefics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarCategory {
    Primary,
    Assistant,
    Inauspicious,
}

/// Every star the engine places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Star {
    // Zi Wei group
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    // Tian Fu group
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
    // Assistants
    ZuoFu,
    YouBi,
    WenChang,
    WenQu,
    TianKui,
    TianYue,
    LuCun,
    // Malefics
    QingYang,
    TuoLuo,
    DiJie,
    DiKong,
}

impl Star {
    /// Traditional name of the star.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天機",
            Self::TaiYang => "太陽",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉貞",
            Self::TianFu => "天府",
            Self::TaiYin => "太陰",
            Self::TanLang => "貪狼",
            Self::JuMen => "巨門",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七殺",
            Self::PoJun => "破軍",
            Self::ZuoFu => "左輔",
            Self::YouBi => "右弼",
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::TianKui => "天魁",
            Self::TianYue => "天鉞",
            Self::LuCun => "祿存",
            Self::QingYang => "擎羊",
            Self::TuoLuo => "陀羅",
            Self::DiJie => "地劫",
            Self::DiKong => "地空",
        }
    }

    /// Grade of the star.
    pub const fn category(self) -> StarCategory {
        match self {
            Self::ZiWei
            | Self::TianJi
            | Self::TaiYang
            | Self::WuQu
            | Self::TianTong
            | Self::LianZhen
            | Self::TianFu
            | Self::TaiYin
            | Self::TanLang
            | Self::JuMen
            | Self::TianXiang
            | Self::TianLiang
            | Self::QiSha
            | Self::PoJun => StarCategory::Primary,
            Self::ZuoFu
            | Self::YouBi
            | Self::WenChang
            | Self::WenQu
            | Self::TianKui
            | Self::TianYue
            | Self::LuCun => StarCategory::Assistant,
            Self::QingYang | Self::TuoLuo | Self::DiJie | Self::DiKong => {
                StarCategory::Inauspicious
            }
        }
    }
}

/// The 6 stars anchored on Zi Wei, with branch offsets.
pub const ZI_WEI_GROUP: [(Star, i32); 6] = [
    (Star::ZiWei, 0),
    (Star::TianJi, -1),
    (Star::TaiYang, -3),
    (Star::WuQu, -4),
    (Star::TianTong, -5),
    (Star::LianZhen, -8),
];

/// The 8 stars anchored on Tian Fu, with branch offsets.
pub const TIAN_FU_GROUP: [(Star, i32); 8] = [
    (Star::TianFu, 0),
    (Star::TaiYin, 1),
    (Star::TanLang, 2),
    (Star::JuMen, 3),
    (Star::TianXiang, 4),
    (Star::TianLiang, 5),
    (Star::QiSha, 6),
    (Star::PoJun, 10),
];

/// Lu Cun branch per year stem (Jia..Gui).
const LU_CUN_BRANCH: [Branch; 10] = [
    Branch::Yin,
    Branch::Mao,
    Branch::Si,
    Branch::Wu,
    Branch::Si,
    Branch::Wu,
    Branch::Shen,
    Branch::You,
    Branch::Hai,
    Branch::Zi,
];

/// Tian Kui branch per year stem.
const TIAN_KUI_BRANCH: [Branch; 10] = [
    Branch::Chou,
    Branch::Zi,
    Branch::Hai,
    Branch::Hai,
    Branch::Chou,
    Branch::Zi,
    Branch::Chou,
    Branch::Wu,
    Branch::Mao,
    Branch::Mao,
];

/// Tian Yue branch per year stem.
const TIAN_YUE_BRANCH: [Branch; 10] = [
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::You,
    Branch::Wei,
    Branch::Shen,
    Branch::Wei,
    Branch::Yin,
    Branch::Si,
    Branch::Si,
];

/// Stars placed in each of the 12 branches, split by grade.
///
/// `assistant` carries both assistant and inauspicious stars; the grade is
/// recoverable from [`Star::category`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchStars {
    pub primary: Vec<Star>,
    pub assistant: Vec<Star>,
}

/// Place the 14 primary stars from the Zi Wei anchor.
///
/// Returns per-branch primary star lists indexed by branch index.
pub fn place_primary_stars(zi_wei: Branch) -> [Vec<Star>; 12] {
    let tian_fu = crate::anchor::tian_fu_branch(zi_wei);
    let mut map: [Vec<Star>; 12] = std::array::from_fn(|_| Vec::new());

    for (star, offset) in ZI_WEI_GROUP {
        map[zi_wei.offset(offset).index() as usize].push(star);
    }
    for (star, offset) in TIAN_FU_GROUP {
        map[tian_fu.offset(offset).index() as usize].push(star);
    }
    map
}

/// Place the assistant and inauspicious stars.
///
/// `month` is the 1-indexed lunar birth month.
pub fn place_assistant_stars(month: u8, hour_branch: Branch, year_stem: Stem) -> [Vec<Star>; 12] {
    let mut map: [Vec<Star>; 12] = std::array::from_fn(|_| Vec::new());
    let m = month as i32;
    let h = hour_branch.index() as i32;

    // month pair
    map[norm_mod(3 + m, 12) as usize].push(Star::ZuoFu);
    map[norm_mod(11 - m, 12) as usize].push(Star::YouBi);

    // hour quartet
    map[norm_mod(10 - h, 12) as usize].push(Star::WenChang);
    map[norm_mod(4 + h, 12) as usize].push(Star::WenQu);
    map[norm_mod(11 + h, 12) as usize].push(Star::DiJie);
    map[norm_mod(11 - h, 12) as usize].push(Star::DiKong);

    // Lu Cun with its two flanking malefics
    let lu_cun = LU_CUN_BRANCH[year_stem.index() as usize];
    map[lu_cun.index() as usize].push(Star::LuCun);
    map[lu_cun.offset(1).index() as usize].push(Star::QingYang);
    map[lu_cun.offset(-1).index() as usize].push(Star::TuoLuo);

    // nobility pair
    map[TIAN_KUI_BRANCH[year_stem.index() as usize].index() as usize].push(Star::TianKui);
    map[TIAN_YUE_BRANCH[year_stem.index() as usize].index() as usize].push(Star::TianYue);

    map
}

/// Place all stars for a birth, merged per branch.
pub fn distribute_stars(
    zi_wei: Branch,
    month: u8,
    hour_branch: Branch,
    year_stem: Stem,
) -> [BranchStars; 12] {
    let primary = place_primary_stars(zi_wei);
    let assistant = place_assistant_stars(month, hour_branch, year_stem);
    let mut out: [BranchStars; 12] = std::array::from_fn(|_| BranchStars::default());
    for (slot, (p, a)) in out.iter_mut().zip(primary.into_iter().zip(assistant)) {
        slot.primary = p;
        slot.assistant = a;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::ALL_BRANCHES;

    fn flat_count(map: &[Vec<Star>; 12]) -> usize {
        map.iter().map(Vec::len).sum()
    }

    #[test]
    fn fourteen_primaries_placed_once() {
        for zw in ALL_BRANCHES {
            let map = place_primary_stars(zw);
            assert_eq!(flat_count(&map), 14);
            let mut seen = std::collections::HashSet::new();
            for list in &map {
                for s in list {
                    assert!(seen.insert(*s), "{s:?} placed twice for zi wei {zw:?}");
                }
            }
        }
    }

    #[test]
    fn zi_wei_group_positions() {
        // Zi Wei in You (9): Tian Ji 8, Tai Yang 6, Wu Qu 5, Tian Tong 4,
        // Lian Zhen 1
        let map = place_primary_stars(Branch::You);
        assert!(map[9].contains(&Star::ZiWei));
        assert!(map[8].contains(&Star::TianJi));
        assert!(map[6].contains(&Star::TaiYang));
        assert!(map[5].contains(&Star::WuQu));
        assert!(map[4].contains(&Star::TianTong));
        assert!(map[1].contains(&Star::LianZhen));
    }

    #[test]
    fn tian_fu_group_positions() {
        // Zi Wei in You -> Tian Fu in Wei (7); Po Jun at (7 + 10) % 12 = 5
        let map = place_primary_stars(Branch::You);
        assert!(map[7].contains(&Star::TianFu));
        assert!(map[8].contains(&Star::TaiYin));
        assert!(map[0].contains(&Star::TianLiang));
        assert!(map[5].contains(&Star::PoJun));
    }

    #[test]
    fn month_pair_positions() {
        // month 1: Zuo Fu at 4, You Bi at 10
        let map = place_assistant_stars(1, Branch::Zi, Stem::Jia);
        assert!(map[4].contains(&Star::ZuoFu));
        assert!(map[10].contains(&Star::YouBi));
    }

    #[test]
    fn hour_quartet_positions() {
        // hour Zi (0): Wen Chang 10, Wen Qu 4, Di Jie 11, Di Kong 11
        let map = place_assistant_stars(1, Branch::Zi, Stem::Jia);
        assert!(map[10].contains(&Star::WenChang));
        assert!(map[4].contains(&Star::WenQu));
        assert!(map[11].contains(&Star::DiJie));
        assert!(map[11].contains(&Star::DiKong));
    }

    #[test]
    fn lu_cun_flanks() {
        // Jia year: Lu Cun in Yin (2), Qing Yang in Mao (3), Tuo Luo in
        // Chou (1)
        let map = place_assistant_stars(1, Branch::Zi, Stem::Jia);
        assert!(map[2].contains(&Star::LuCun));
        assert!(map[3].contains(&Star::QingYang));
        assert!(map[1].contains(&Star::TuoLuo));
    }

    #[test]
    fn nobility_pair() {
        // Xin year: Tian Kui in Wu (6), Tian Yue in Yin (2)
        let map = place_assistant_stars(1, Branch::Zi, Stem::Xin);
        assert!(map[6].contains(&Star::TianKui));
        assert!(map[2].contains(&Star::TianYue));
    }

    #[test]
    fn eleven_assistants_placed_once() {
        for stem in crate::cycle::ALL_STEMS {
            let map = place_assistant_stars(7, Branch::Si, stem);
            assert_eq!(flat_count(&map), 11);
            let mut seen = std::collections::HashSet::new();
            for list in &map {
                for s in list {
                    assert!(seen.insert(*s), "{s:?} placed twice for stem {stem:?}");
                }
            }
        }
    }

    #[test]
    fn distribute_merges_grades() {
        let all = distribute_stars(Branch::You, 1, Branch::Zi, Stem::Jia);
        let primaries: usize = all.iter().map(|b| b.primary.len()).sum();
        let assistants: usize = all.iter().map(|b| b.assistant.len()).sum();
        assert_eq!(primaries, 14);
        assert_eq!(assistants, 11);
    }

    #[test]
    fn categories() {
        assert_eq!(Star::ZiWei.category(), StarCategory::Primary);
        assert_eq!(Star::ZuoFu.category(), StarCategory::Assistant);
        assert_eq!(Star::LuCun.category(), StarCategory::Assistant);
        assert_eq!(Star::QingYang.category(), StarCategory::Inauspicious);
        assert_eq!(Star::DiKong.category(), StarCategory::Inauspicious);
    }
}
