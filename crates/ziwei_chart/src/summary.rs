//! Plain-text summary material for the external interpretation service.
//!
//! The engine exposes, per palace, the frames an interpreter works from:
//! the three-parties/four-pillars palace group, the palace stem's flying
//! transformation paths, re-anchored (tai ji) palace naming, and a
//! text rendering of all of it. Building prompts and calling the service
//! is the caller's concern.

use ziwei_base::palace::{PalaceName, palace_name_for};
use ziwei_base::sihua::{ALL_TRANSFORMATIONS, Transformation, transformation_targets};
use ziwei_base::star::Star;

use crate::chart_types::{Chart, Palace};

/// The opposite and trine palaces of a palace.
#[derive(Debug, Clone, Copy)]
pub struct RelatedPalaces<'a> {
    /// 6 branches away (the clashed palace).
    pub opposite: &'a Palace,
    /// 4 and 8 branches away.
    pub trines: [&'a Palace; 2],
}

/// Three-parties/four-pillars lookup for `palace`.
pub fn related_palaces<'a>(chart: &'a Chart, palace: &Palace) -> RelatedPalaces<'a> {
    RelatedPalaces {
        opposite: chart.palace_by_branch(palace.branch.opposite()),
        trines: [
            chart.palace_by_branch(palace.branch.offset(4)),
            chart.palace_by_branch(palace.branch.offset(8)),
        ],
    }
}

/// Where one flying transformation lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlyingDestination {
    /// Palace holding the target star.
    pub palace_id: u8,
    /// Palace clashed by the landing (opposite of the destination).
    pub opposite_id: u8,
    /// The transformation lands in its own source palace.
    pub self_transformation: bool,
}

/// One of the four flying transformation paths of a palace stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlyingPath {
    pub star: Star,
    pub transformation: Transformation,
    /// `None` when the target star is not placed (chart without birth
    /// data).
    pub destination: Option<FlyingDestination>,
}

/// The four flying paths of `palace`'s stem across the chart.
pub fn flying_paths(chart: &Chart, palace: &Palace) -> [FlyingPath; 4] {
    let targets = transformation_targets(palace.stem);
    std::array::from_fn(|i| {
        let star = targets[i];
        let destination = chart
            .palaces
            .iter()
            .find(|p| p.holds_star(star))
            .map(|p| FlyingDestination {
                palace_id: p.id,
                opposite_id: chart.palace_by_branch(p.branch.opposite()).id,
                self_transformation: p.id == palace.id,
            });
        FlyingPath {
            star,
            transformation: ALL_TRANSFORMATIONS[i],
            destination,
        }
    })
}

/// Name of `target` when `base` is taken as the reference point (tai ji
/// re-anchoring): the canonical sequence re-counted from `base`.
pub fn relative_palace_name(base: &Palace, target: &Palace) -> PalaceName {
    palace_name_for(base.branch, target.branch)
}

/// Star list of a palace as display text: primaries with tag suffixes,
/// then assistants.
pub fn stars_description(palace: &Palace) -> String {
    let majors: String = palace
        .primary_stars
        .iter()
        .map(|p| match p.transformation {
            Some(t) => format!("{}({})", p.star.name(), t.label()),
            None => p.star.name().to_string(),
        })
        .collect();
    let minors = palace
        .assistant_stars
        .iter()
        .map(|p| p.star.name())
        .collect::<Vec<_>>()
        .join("、");

    if majors.is_empty() && minors.is_empty() {
        return "無主星".to_string();
    }
    if majors.is_empty() {
        minors
    } else if minors.is_empty() {
        majors
    } else {
        format!("{majors}、{minors}")
    }
}

/// The palace's layer stacking line, e.g. "本命命宮、大限財、流年官".
fn layer_line(palace: &Palace) -> String {
    let mut layers: Vec<String> = Vec::new();
    if let Some(name) = palace.name {
        layers.push(format!("本命{}", name.name()));
    }
    if let Some(d) = &palace.overlay.decade {
        layers.push(expand_overlay(d, "大限"));
    }
    if let Some(y) = &palace.overlay.year {
        layers.push(expand_overlay(y, "流年"));
    }
    if let Some(s) = &palace.overlay.small {
        layers.push(expand_overlay(s, "小限"));
    }
    if layers.is_empty() {
        "無".to_string()
    } else {
        layers.join("、")
    }
}

/// Replace an overlay label's one-character prefix with its full form.
fn expand_overlay(label: &str, full_prefix: &str) -> String {
    let mut chars = label.chars();
    chars.next();
    format!("{full_prefix}{}", chars.as_str())
}

fn palace_display_name(p: &Palace) -> String {
    match p.name {
        Some(n) => n.name().to_string(),
        None => p.branch.symbol().to_string(),
    }
}

/// Complete plain-text summary of one palace: identity, layer stacking,
/// stars, flying paths, and the three-parties/four-pillars star spread.
pub fn palace_summary(chart: &Chart, palace: &Palace) -> String {
    let mut out = String::new();

    out.push_str(&format!("宮位疊宮：{}\n", layer_line(palace)));
    out.push_str(&format!(
        "干支：{}{}\n",
        palace.stem.symbol(),
        palace.branch.symbol()
    ));
    if let Some(w) = &palace.decade_window {
        out.push_str(&format!(
            "大限：{}（{}-{}歲）\n",
            w.label(),
            w.start_age,
            w.end_age
        ));
    }
    out.push_str(&format!("星曜：{}\n", stars_description(palace)));

    out.push_str("四化飛星：\n");
    for path in flying_paths(chart, palace) {
        let star = path.star.name();
        let label = path.transformation.label();
        match path.destination {
            None => out.push_str(&format!("- {star}化{label}（未定）\n")),
            Some(d) if d.self_transformation => {
                out.push_str(&format!("- {star}自化{label}（在本宮）\n"));
            }
            Some(d) => {
                let dest = palace_display_name(&chart.palaces[d.palace_id as usize]);
                let opp = palace_display_name(&chart.palaces[d.opposite_id as usize]);
                out.push_str(&format!("- {star}化{label} 入 {dest}，沖 {opp}\n"));
            }
        }
    }

    let related = related_palaces(chart, palace);
    out.push_str("三方四正：\n");
    out.push_str(&format!(
        "- 本宮（{}）：{}\n",
        palace.branch.symbol(),
        stars_description(palace)
    ));
    out.push_str(&format!(
        "- 對宮（{}）：{}\n",
        related.opposite.branch.symbol(),
        stars_description(related.opposite)
    ));
    for trine in related.trines {
        out.push_str(&format!(
            "- 三合宮（{}）：{}\n",
            trine.branch.symbol(),
            stars_description(trine)
        ));
    }

    out
}
