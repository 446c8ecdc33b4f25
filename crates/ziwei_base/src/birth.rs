//! Birth data and the stem/branch derivations the caller runs before
//! assembling a chart.
//!
//! The engine works in lunar calendar terms; converting a solar date is the
//! caller's job (an external lunar-calendar library). Only the 24-hour
//! clock-to-branch mapping lives here, in [`crate::cycle`].

use serde::{Deserialize, Serialize};

use crate::cycle::{ALL_STEMS, Branch, Stem, norm_mod};
use crate::error::ChartError;
use crate::palace::GRID_BRANCHES;

/// Chart gender. Drives both limit directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Validated lunar birth data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthData {
    /// Gregorian year.
    pub year: i32,
    /// Lunar month, 1-12.
    pub month: u8,
    /// Lunar day, 1-30.
    pub day: u8,
    /// Branch of the birth double-hour.
    pub hour_branch: Branch,
    pub gender: Gender,
}

impl BirthData {
    /// Fail fast on out-of-range month or day.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !(1..=12).contains(&self.month) {
            return Err(ChartError::InvalidMonth(self.month));
        }
        if !(1..=30).contains(&self.day) {
            return Err(ChartError::InvalidDay(self.day));
        }
        Ok(())
    }
}

/// Grid stems for a birth-year stem, by the five-tigers rule.
///
/// The first month's stem starts at `(year_stem % 5) * 2 + 2` and walks the
/// stem cycle along branches from Yin; the result is projected onto grid
/// slot order. Every slot receives a stem.
pub fn five_tigers_stems(year_stem: Stem) -> [Stem; 12] {
    let start = ((year_stem.index() % 5) * 2 + 2) as i32;

    let mut by_branch = [Stem::Jia; 12];
    for i in 0..12 {
        let branch = norm_mod(2 + i, 12) as usize;
        by_branch[branch] = ALL_STEMS[norm_mod(start + i, 10) as usize];
    }

    std::array::from_fn(|slot| by_branch[GRID_BRANCHES[slot].index() as usize])
}

/// Branch of the Life palace from lunar month and birth hour-branch.
///
/// Count forward from Yin by the month, then back by the hour.
pub fn life_palace_branch(month: u8, hour_branch: Branch) -> Branch {
    Branch::Yin.offset(month as i32 - 1 - hour_branch.index() as i32)
}
