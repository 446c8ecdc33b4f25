//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from birth-data validation and symbol parsing.
///
/// Internal table lookups cannot fail: the bureau and star tables are dense
/// arrays indexed by closed enums, so there is no invariant-violation
/// variant. An unresolvable small-limit age is an `Option::None`, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// Lunar month outside 1-12.
    InvalidMonth(u8),
    /// Lunar day outside 1-30.
    InvalidDay(u8),
    /// Character is not one of the 10 stem symbols.
    UnknownStem(char),
    /// Character is not one of the 12 branch symbols.
    UnknownBranch(char),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "lunar month out of range 1-12: {m}"),
            Self::InvalidDay(d) => write!(f, "lunar day out of range 1-30: {d}"),
            Self::UnknownStem(c) => write!(f, "unknown heavenly stem symbol: {c}"),
            Self::UnknownBranch(c) => write!(f, "unknown earthly branch symbol: {c}"),
        }
    }
}

impl Error for ChartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ChartError::InvalidMonth(13).to_string(),
            "lunar month out of range 1-12: 13"
        );
        assert_eq!(
            ChartError::InvalidDay(0).to_string(),
            "lunar day out of range 1-30: 0"
        );
        assert_eq!(
            ChartError::UnknownStem('x').to_string(),
            "unknown heavenly stem symbol: x"
        );
    }
}
