//! Chart assembly: the single entry point external callers use.
//!
//! `compute_chart` is a pure function of (base stems, config, birth); the
//! caller owns that state and recomputes on every change. Identical inputs
//! yield identical charts, so results may be cached by key equality.

use ziwei_base::anchor::zi_wei_branch;
use ziwei_base::birth::BirthData;
use ziwei_base::bureau::bureau_for;
use ziwei_base::cycle::{Stem, year_branch, year_stem};
use ziwei_base::error::ChartError;
use ziwei_base::limit::{
    age_for_year_branch, branch_distance, decade_window, limit_direction, small_limit_branch,
};
use ziwei_base::palace::{GRID_BRANCHES, OverlayKind, grid_slot, overlay_label, palace_name_for};
use ziwei_base::sihua::{ALL_TRANSFORMATIONS, transformation_of, transformation_targets};
use ziwei_base::star::distribute_stars;
use ziwei_base::{Branch, Bureau};

use crate::chart_types::{Chart, ChartConfig, OverlayLabels, Palace, PlacedStar, StarTransformation};

/// Compute a full chart.
///
/// Without birth data (or without a configured Life palace) the palaces
/// carry stems, branches, names, and overlay labels only. With both, the
/// bureau is resolved from the Life palace's stem-branch pair and every
/// palace receives its stars and decade window.
pub fn compute_chart(
    base_stems: &[Stem; 12],
    config: &ChartConfig,
    birth: Option<&BirthData>,
) -> Result<Chart, ChartError> {
    if let Some(b) = birth {
        b.validate()?;
    }

    let mut palaces: [Palace; 12] = std::array::from_fn(|slot| {
        let branch = GRID_BRANCHES[slot];
        let stem = base_stems[slot];
        let targets = transformation_targets(stem);
        Palace {
            id: slot as u8,
            stem,
            branch,
            name: config.life.map(|l| palace_name_for(l, branch)),
            stem_transformations: std::array::from_fn(|i| StarTransformation {
                star: targets[i],
                transformation: ALL_TRANSFORMATIONS[i],
            }),
            primary_stars: Vec::new(),
            assistant_stars: Vec::new(),
            overlay: OverlayLabels {
                decade: config
                    .decade
                    .map(|a| overlay_label(OverlayKind::Decade, a, branch)),
                year: config
                    .year
                    .map(|a| overlay_label(OverlayKind::Year, a, branch)),
                small: config
                    .small
                    .map(|a| overlay_label(OverlayKind::Small, a, branch)),
            },
            decade_window: None,
        }
    });

    let mut chart_bureau: Option<Bureau> = None;
    if let (Some(birth), Some(life)) = (birth, config.life) {
        let bureau = bureau_for(base_stems[grid_slot(life)], life);
        let zi_wei = zi_wei_branch(bureau, birth.day);
        let ys = year_stem(birth.year);
        let stars = distribute_stars(zi_wei, birth.month, birth.hour_branch, ys);
        let direction = limit_direction(birth.gender, ys);

        for palace in &mut palaces {
            let placed = &stars[palace.branch.index() as usize];
            palace.primary_stars = placed
                .primary
                .iter()
                .map(|&s| PlacedStar {
                    star: s,
                    transformation: transformation_of(ys, s),
                })
                .collect();
            palace.assistant_stars = placed
                .assistant
                .iter()
                .map(|&s| PlacedStar {
                    star: s,
                    transformation: transformation_of(ys, s),
                })
                .collect();

            let dist = branch_distance(life, palace.branch, direction);
            palace.decade_window = Some(decade_window(bureau, dist, birth.year));
        }
        chart_bureau = Some(bureau);
    }

    Ok(Chart {
        palaces,
        bureau: chart_bureau,
    })
}

/// Derive the small-limit branch implied by the configured year overlay.
///
/// Needs an active decade overlay to pin the year branch to a calendar
/// year; without one the age is ambiguous (the year branch repeats every
/// 12 years) and the small limit stays unset.
pub fn resolve_small_limit(
    config: &ChartConfig,
    birth: &BirthData,
    chart: &Chart,
) -> Option<Branch> {
    let target = config.year?;
    let decade = config.decade?;
    let window = chart.palace_by_branch(decade).decade_window?;
    let age = age_for_year_branch(&window, birth.year, target)?;
    Some(small_limit_branch(
        year_branch(birth.year),
        birth.gender,
        age,
    ))
}
