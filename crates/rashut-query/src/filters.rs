//! Key/value query filters

use indexmap::IndexMap;
use rashut_model::Year;
use std::fmt::Display;

/// Ordered query filters; each becomes a `param_<key>` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilters {
    params: IndexMap<String, String>,
}

impl QueryFilters {
    /// No filters
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on the selected year
    #[inline]
    #[must_use]
    pub fn for_year(year: Year) -> Self {
        Self::new().with("year", year)
    }

    /// Add a filter; keys are lower-cased
    #[inline]
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Display) -> Self {
        self.params.insert(key.to_lowercase(), value.to_string());
        self
    }

    /// Value of a filter
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(&key.to_lowercase()).map(String::as_str)
    }

    /// Whether there are no filters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate filters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercased() {
        let filters = QueryFilters::new().with("OBS", "unit-7").with("Year", 2025);
        let keys: Vec<_> = filters.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["obs", "year"]);
        assert_eq!(filters.get("YEAR"), Some("2025"));
    }

    #[test]
    fn year_filter() {
        let filters = QueryFilters::for_year(Year(2024));
        assert_eq!(filters.get("year"), Some("2024"));
    }
}
