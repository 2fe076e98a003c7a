//! Node colors

use serde::Serialize;

/// Fill and border pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Colors {
    /// Background fill
    pub fill: &'static str,
    /// Border stroke
    pub border: &'static str,
}

/// Palette entry a node is styled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    /// Branch nodes and anything unstyled
    Default,
    /// Grand total
    Root,
    /// New work
    New,
    /// Continued work
    Continued,
    /// Mid-year work
    Midyear,
    /// Cancelled work
    Cancelled,
    /// Approved for execution
    Approved,
    /// Converted
    Converted,
    /// Converted and fully complete
    Executing,
}

const BLUE_BORDER: &str = "#4479ba";

impl ColorKey {
    /// Resolve to concrete colors
    #[must_use]
    pub const fn colors(self) -> Colors {
        let (fill, border) = match self {
            Self::Default => ("#e8e8e8", BLUE_BORDER),
            Self::New => ("#d2e9ab", BLUE_BORDER),
            Self::Continued => ("#ffd699", "#e6a15d"),
            Self::Root | Self::Midyear => ("#d6e9f5", BLUE_BORDER),
            Self::Cancelled => ("#f4c2d4", "#cc7d75"),
            Self::Approved | Self::Executing => ("#c8e6c9", BLUE_BORDER),
            Self::Converted => ("#fff9c4", BLUE_BORDER),
        };
        Colors { fill, border }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_fills() {
        assert_eq!(ColorKey::Root.colors(), ColorKey::Midyear.colors());
        assert_eq!(ColorKey::Executing.colors(), ColorKey::Approved.colors());
        assert_eq!(ColorKey::Cancelled.colors().border, "#cc7d75");
        assert_eq!(ColorKey::Default.colors().fill, "#e8e8e8");
    }
}
