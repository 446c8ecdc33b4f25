//! Chart assembly and caller-facing types for Zi Wei Dou Shu charts.
//!
//! Bridges the pure math in `ziwei_base` into one immutable 12-palace
//! result:
//! - `compute_chart`: the single entry point, a pure function of
//!   (base stems, overlay config, birth data)
//! - `resolve_small_limit`: overlay auto-derivation from an active decade
//! - `summary`: plain-text material for an external interpretation service

pub mod assemble;
pub mod chart_types;
pub mod summary;

pub use assemble::{compute_chart, resolve_small_limit};
pub use chart_types::{
    Chart, ChartConfig, OverlayLabels, Palace, PlacedStar, StarTransformation,
};
pub use summary::{
    FlyingDestination, FlyingPath, RelatedPalaces, flying_paths, palace_summary,
    related_palaces, relative_palace_name, stars_description,
};
