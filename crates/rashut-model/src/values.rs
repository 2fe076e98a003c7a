//! Scalar value types: selectable year and integer percentage

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Calendar year selected in the dashboard filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(pub u16);

impl Year {
    /// Create a year
    #[inline]
    #[must_use]
    pub const fn new(year: u16) -> Self {
        Self(year)
    }

    /// Numeric value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for Year {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// Year parse failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid year: {0:?}")]
pub struct ParseYearError(pub String);

impl FromStr for Year {
    type Err = ParseYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .map(Year)
            .map_err(|_| ParseYearError(s.to_string()))
    }
}

/// Integer percentage, rendered as `"{n}%"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(pub u32);

impl Percentage {
    /// Zero percent
    pub const ZERO: Self = Self(0);

    /// Round an arbitrary percent value (half away from zero, clamped at 0)
    #[must_use]
    pub fn from_percent(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::ZERO;
        }
        // Rounded and non-negative; dashboard percentages stay far below u32::MAX.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = value.round() as u32;
        Self(rounded)
    }

    /// Share `part / whole` as a percentage, 0% for an empty whole
    #[must_use]
    pub fn from_ratio(part: u64, whole: u64) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = part as f64 / whole as f64;
        Self::from_percent(ratio * 100.0)
    }

    /// Completion fraction (0..=1) expressed as a percentage
    #[inline]
    #[must_use]
    pub fn from_fraction(fraction: f64) -> Self {
        Self::from_percent(fraction * 100.0)
    }

    /// Numeric value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Percentage parse failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid percentage: {0:?}")]
pub struct ParsePercentageError(pub String);

impl FromStr for Percentage {
    type Err = ParsePercentageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        digits
            .parse::<u32>()
            .map(Percentage)
            .map_err(|_| ParsePercentageError(s.to_string()))
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Number(u32),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Text(s) => s.parse().map_err(serde::de::Error::custom),
            Wire::Number(n) => Ok(Percentage(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_parses_and_displays() {
        let year: Year = " 2025 ".parse().unwrap();
        assert_eq!(year, Year(2025));
        assert_eq!(year.to_string(), "2025");
        assert!("twenty".parse::<Year>().is_err());
    }

    #[test]
    fn percentage_rounding() {
        assert_eq!(Percentage::from_ratio(1, 3).to_string(), "33%");
        assert_eq!(Percentage::from_ratio(2, 3).to_string(), "67%");
        assert_eq!(Percentage::from_ratio(1, 2).to_string(), "50%");
        assert_eq!(Percentage::from_ratio(5, 0), Percentage::ZERO);
        assert_eq!(Percentage::from_fraction(0.5), Percentage(50));
        assert_eq!(Percentage::from_percent(f64::NAN), Percentage::ZERO);
    }

    #[test]
    fn percentage_wire_forms() {
        let p: Percentage = serde_json::from_str("\"80%\"").unwrap();
        assert_eq!(p, Percentage(80));
        let p: Percentage = serde_json::from_str("77").unwrap();
        assert_eq!(p, Percentage(77));
        assert_eq!(serde_json::to_string(&Percentage(5)).unwrap(), "\"5%\"");
        assert!(serde_json::from_str::<Percentage>("\"lots\"").is_err());
    }
}
