//! Demo snapshot shown when no records are available
//!
//! Marked [`Provenance::Fallback`].

use rashut_model::{
    AggregateStatistics, DrillStats, Percentage, Provenance, WithShaamStats, WithoutShaamStats,
};

/// The fallback snapshot
#[must_use]
pub fn fallback_statistics() -> AggregateStatistics {
    AggregateStatistics {
        total: 1496,
        with_shaam: WithShaamStats {
            total: 590,
            percentage: Percentage(80),
            new: DrillStats {
                total: 395,
                approved: 75,
                converted: 286,
                cancelled: 34,
                executing: 242,
            },
            continued: 73,
            midyear: DrillStats {
                total: 119,
                approved: 13,
                converted: 104,
                cancelled: 2,
                executing: 91,
            },
        },
        without_shaam: WithoutShaamStats {
            total: 906,
            percentage: Percentage(77),
            new: 437,
            continued: 167,
            midyear: 175,
            cancelled: 97,
        },
        provenance: Provenance::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_marked_and_non_zero() {
        let stats = fallback_statistics();
        assert!(stats.is_fallback());
        assert_eq!(stats.with_shaam.total + stats.without_shaam.total, stats.total);
        assert_eq!(stats.with_shaam.percentage.to_string(), "80%");
        assert_eq!(stats.without_shaam.percentage.to_string(), "77%");
    }

    #[test]
    fn fallback_respects_branch_bounds() {
        let stats = fallback_statistics();
        for (branch, count) in stats.category_counts() {
            assert!(count <= stats.branch_total(branch));
        }
    }
}
