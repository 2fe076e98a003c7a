//! Link table coverage audit

use crate::resolver::NavigationResolver;
use rashut_model::Year;
use rashut_stats::BadgeKind;
use serde::Serialize;

/// A drill-through view with no entry for a year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageGap {
    /// View key
    pub view: &'static str,
    /// Year without an entry
    pub year: Year,
}

/// Every view a click can reach: tree nodes then header badges
pub fn drill_views() -> impl Iterator<Item = &'static str> {
    rashut_hierarchy::view_keys().chain(BadgeKind::ALL.into_iter().map(BadgeKind::view_key))
}

/// Missing `(view, year)` combinations, year-major
#[must_use]
pub fn coverage_gaps(resolver: &NavigationResolver, years: &[Year]) -> Vec<CoverageGap> {
    let gaps: Vec<CoverageGap> = years
        .iter()
        .flat_map(|&year| {
            drill_views()
                .filter(move |view| !resolver.contains(&format!("{view}{year}")))
                .map(move |view| CoverageGap { view, year })
        })
        .collect();

    if !gaps.is_empty() {
        tracing::warn!(missing = gaps.len(), years = years.len(), "link table has gaps");
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covered_years_only_miss_unlinked_badges() {
        let resolver = NavigationResolver::new("http://h");
        let gaps = coverage_gaps(&resolver, &[Year(2024), Year(2025)]);
        let views: Vec<_> = gaps.iter().map(|g| (g.view, g.year.value())).collect();
        assert_eq!(
            views,
            vec![("SBA", 2024), ("SAA", 2024), ("SBA", 2025), ("SAA", 2025)]
        );
    }

    #[test]
    fn uncovered_year_misses_everything() {
        let resolver = NavigationResolver::new("http://h");
        let gaps = coverage_gaps(&resolver, &[Year(2026)]);
        assert_eq!(gaps.len(), drill_views().count());
        assert_eq!(drill_views().count(), 20);
    }
}
