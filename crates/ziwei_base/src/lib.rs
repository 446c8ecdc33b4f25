//! Pure chart mathematics for Zi Wei Dou Shu natal charts.
//!
//! This crate provides:
//! - The stem/branch cyclic domain and normalized modular arithmetic
//! - Five-element bureau resolution
//! - Anchor-star placement and the full star distribution rules
//! - Four-transformation (si hua) tagging
//! - Palace naming, overlay labels, and decade/small-limit arithmetic
//!
//! Everything is a pure function over small fixed tables; chart assembly
//! lives in the `ziwei_chart` crate.

pub mod anchor;
pub mod birth;
pub mod bureau;
pub mod cycle;
pub mod error;
pub mod limit;
pub mod palace;
pub mod sihua;
pub mod star;

pub use anchor::{tian_fu_branch, zi_wei_branch};
pub use birth::{BirthData, Gender, five_tigers_stems, life_palace_branch};
pub use bureau::{Bureau, bureau_for};
pub use cycle::{
    ALL_BRANCHES, ALL_STEMS, Branch, Stem, hour_branch_from_clock, norm_mod, year_branch,
    year_stem,
};
pub use error::ChartError;
pub use limit::{
    DecadeWindow, Direction, age_for_year_branch, branch_distance, decade_window,
    limit_direction, small_limit_branch, small_limit_start,
};
pub use palace::{
    ALL_PALACE_NAMES, DEFAULT_GRID_STEMS, GRID_BRANCHES, OverlayKind, PalaceName, grid_slot,
    overlay_label, palace_name_for,
};
pub use sihua::{ALL_TRANSFORMATIONS, Transformation, transformation_of, transformation_targets};
pub use star::{
    BranchStars, Star, StarCategory, TIAN_FU_GROUP, ZI_WEI_GROUP, distribute_stars,
    place_assistant_stars, place_primary_stars,
};
